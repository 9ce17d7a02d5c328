//! Property-based and randomized tests for the (2,6) erasure code

use gfcode_algorithms::code::{decode, encode, ErasureMask, ReedSolomon26};
use gfcode_algorithms::field::{Bitwise, LogTable};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Two distinct codeword positions
fn position_pair() -> impl Strategy<Value = (usize, usize)> {
    (0usize..6, 0usize..5).prop_map(|(i, j)| if j >= i { (i, j + 1) } else { (i, j) })
}

proptest! {
    #[test]
    fn encode_is_systematic(y0 in any::<u8>(), y1 in any::<u8>()) {
        let cw = encode(y0, y1);
        prop_assert_eq!(cw.0[0], y0);
        prop_assert_eq!(cw.0[1], y1);
    }

    #[test]
    fn any_two_positions_recover(y0 in any::<u8>(), y1 in any::<u8>(), (i, j) in position_pair()) {
        let cw = encode(y0, y1);
        let mask = ErasureMask::from_positions(&[i, j]).unwrap();
        prop_assert_eq!(decode(&cw, &mask).unwrap(), [y0, y1]);
    }

    #[test]
    fn supersets_of_two_recover(y0 in any::<u8>(), y1 in any::<u8>(), present in any::<[bool; 6]>()) {
        let cw = encode(y0, y1);
        let mask = ErasureMask(present);
        match decode(&cw, &mask) {
            Ok(data) => prop_assert_eq!(data, [y0, y1]),
            Err(_) => prop_assert!(mask.present_count() < 2),
        }
    }

    #[test]
    fn strategies_produce_same_codeword(y0 in any::<u8>(), y1 in any::<u8>()) {
        let cw = encode(y0, y1);
        prop_assert_eq!(&ReedSolomon26::<Bitwise>::encode(y0, y1), &cw);
        prop_assert_eq!(&ReedSolomon26::<LogTable>::encode(y0, y1), &cw);
    }
}

#[test]
fn exhaustive_round_trip_over_all_pairs() {
    for y0 in 0..=u8::MAX {
        for y1 in 0..=u8::MAX {
            let cw = encode(y0, y1);
            for i in 0..6 {
                for j in (i + 1)..6 {
                    let mask = ErasureMask::from_positions(&[i, j]).unwrap();
                    assert_eq!(decode(&cw, &mask).unwrap(), [y0, y1], "data ({}, {}) positions {} {}", y0, y1, i, j);
                }
            }
        }
    }
}

#[test]
fn seeded_random_erasures() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    for _ in 0..100_000 {
        let data: [u8; 2] = [rng.gen(), rng.gen()];
        let cw = encode(data[0], data[1]);

        let first = rng.gen_range(0..5);
        let second = rng.gen_range(first + 1..6);
        let mask = ErasureMask::from_positions(&[first, second]).unwrap();

        assert_eq!(decode(&cw, &mask).unwrap(), data);
    }
}
