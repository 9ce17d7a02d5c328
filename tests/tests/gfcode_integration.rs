//! Integration tests through the facade crate

use gfcode::api::Error;
use gfcode::prelude::*;
use gfcode_tests::vectors::{CODEWORD_VECTORS, MUL_VECTORS, PACKED_VECTORS, POWER_VECTORS};

#[test]
fn test_mul_vectors_all_strategies() {
    for v in MUL_VECTORS {
        assert_eq!(gfcode::mul_bitwise(v.a, v.b), v.product, "bitwise {:?}", v);
        assert_eq!(gfcode::mul_log(v.a, v.b), v.product, "log {:?}", v);
        assert_eq!(gfcode::mul_table(v.a, v.b), v.product, "table {:?}", v);
        // commutativity
        assert_eq!(gfcode::mul_table(v.b, v.a), v.product, "table swapped {:?}", v);
    }
}

#[test]
fn test_power_vectors() {
    for &(exponent, expected) in POWER_VECTORS {
        assert_eq!(gfcode::pow(3, exponent), expected, "3^{}", exponent);
    }
}

#[test]
fn test_packed_vectors() {
    for &(a, b, product) in PACKED_VECTORS {
        assert_eq!(gfcode::mul_packed4(a, b), product);
        assert_eq!(Packed4::from_u32(a).mul(Packed4::from_u32(b)).to_u32(), product);
    }
}

#[test]
fn test_codeword_vectors() {
    for v in CODEWORD_VECTORS {
        let expected = v.codeword();
        assert_eq!(gfcode::encode(v.data[0], v.data[1]), expected);
        assert_eq!(gfcode::decode(expected, [true; 6]).unwrap(), v.data);
    }
}

#[test]
fn test_spec_decode_scenarios() {
    let cw = [10, 20, 0x36, 0x28, 0x72, 0x6c];
    let masks = [
        [true, true, false, false, false, false],
        [false, true, true, false, false, false],
        [false, false, true, true, false, false],
        [true, false, false, true, false, false],
    ];
    for present in masks {
        assert_eq!(gfcode::decode(cw, present).unwrap(), [10, 20]);
    }
}

#[test]
fn test_decode_error_surface() {
    let cw = gfcode::encode(1, 2);
    let err = gfcode::decode(cw, [false, false, false, true, false, false]).unwrap_err();
    match &err {
        Error::InsufficientSymbols { context, required, available } => {
            assert_eq!(*context, "decode");
            assert_eq!(*required, 2);
            assert_eq!(*available, 1);
        }
        other => panic!("Expected InsufficientSymbols error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "decode: insufficient symbols (need 2, got 1)");

    let err = gfcode::decode(cw, [false; 6]).unwrap_err();
    assert!(matches!(err, Error::InsufficientSymbols { available: 0, .. }));
}

#[test]
fn test_result_ext_context() {
    let r = ErasureMask::from_positions(&[9]).with_context("mask");
    match r {
        Err(Error::InvalidParameter { context, message }) => {
            assert_eq!(context, "mask");
            assert_eq!(message, "codeword position must be below 6");
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }
}

#[test]
fn test_generic_erasure_code_consumer() {
    fn survive_two_losses<C>(data: C::Data, mask: C::Mask) -> gfcode::api::Result<C::Data>
    where
        C: ErasureCode,
    {
        let codeword = C::encode(&data);
        C::decode(&codeword, &mask)
    }

    let mask = ErasureMask::from_positions(&[1, 2, 5]).unwrap();
    assert_eq!(survive_two_losses::<ReedSolomon26<Bitwise>>([7, 9], mask).unwrap(), [7, 9]);
    assert_eq!(survive_two_losses::<ReedSolomon26<LogTable>>([7, 9], mask).unwrap(), [7, 9]);
    assert_eq!(survive_two_losses::<ReedSolomon26<FullTable>>([7, 9], mask).unwrap(), [7, 9]);
}

#[test]
fn test_global_tables_self_check() {
    FieldTables::global().verify().unwrap();
    FieldTables::new().verify().unwrap();
}

#[test]
fn test_global_tables_shared_across_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|t| {
            std::thread::spawn(move || {
                let tables = FieldTables::global() as *const FieldTables as usize;
                let mut acc = 0u8;
                for a in 0..=u8::MAX {
                    acc ^= gfcode::mul_table(a, t.wrapping_add(1));
                }
                (tables, acc)
            })
        })
        .collect();

    let results: Vec<(usize, u8)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = results[0].0;
    for (t, &(ptr, acc)) in results.iter().enumerate() {
        assert_eq!(ptr, first, "tables built more than once");

        let b = (t as u8).wrapping_add(1);
        let expected = (0..=u8::MAX).fold(0u8, |acc, a| acc ^ gfcode::mul_bitwise(a, b));
        assert_eq!(acc, expected, "thread {} products", t);
    }
}

#[test]
fn test_gf256_linear_combination() {
    // y0·(x+1) + y1·x evaluated with the element type matches the codeword
    let (y0, y1) = (Gf256(10), Gf256(20));
    let cw = gfcode::encode(10, 20);
    for x in 0..6u8 {
        let xe = Gf256(x);
        let value = y0 * (xe + Gf256::ONE) + y1 * xe;
        assert_eq!(value.value(), cw[x as usize]);
    }
}
