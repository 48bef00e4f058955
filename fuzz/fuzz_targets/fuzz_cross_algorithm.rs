#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseries_core::registry::{CalculatorFactory, DefaultFactory};
use fibseries_core::{FibError, Options, GOLDEN_RATIO_EXACT_LIMIT};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // Any i64, including negatives and values far past the u64 range.
    let n = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    let factory = DefaultFactory::new();
    let opts = Options::default();
    let iterative = factory.get("iterative").unwrap().calculate(n, &opts);
    let matrix = factory.get("matrix").unwrap().calculate(n, &opts);
    let table = factory.get("const").unwrap().calculate(n, &opts);
    let golden = factory.get("golden").unwrap().calculate(n, &opts);

    assert_eq!(iterative, matrix, "Iterative != Matrix at n={n}");
    assert_eq!(iterative, table, "Iterative != ConstTable at n={n}");

    match iterative {
        Ok(value) if n <= GOLDEN_RATIO_EXACT_LIMIT as i64 => {
            assert_eq!(golden, Ok(value), "GoldenRatio inexact at n={n}");
        }
        Ok(_) => assert!(golden.is_ok()),
        Err(FibError::InvalidInput(_) | FibError::Overflow(_, _)) => {
            assert_eq!(golden, iterative);
        }
        Err(e) => panic!("unexpected error at n={n}: {e}"),
    }
});
