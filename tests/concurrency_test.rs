// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The shared cache must never return a wrong value when several threads
//! grow it at once.

use num_bigint::BigUint;
use partition_stats::{exact, PartitionTable};
use std::thread;

#[test]
fn test_concurrent_callers_agree_with_serial_table() {
    let mut serial = PartitionTable::new();
    serial.extend_to(600);
    let expected: Vec<BigUint> = (0..=600).map(|n| serial.exact(n)).collect();

    let handles: Vec<_> = (0..8i64)
        .map(|worker| {
            thread::spawn(move || {
                // Each worker walks the range in a different order.
                let mut results = Vec::new();
                for step in 0..=600i64 {
                    let n = (step * (2 * worker + 1)) % 601;
                    results.push((n, exact(n)));
                }
                results
            })
        })
        .collect();

    for handle in handles {
        for (n, value) in handle.join().unwrap() {
            assert_eq!(value, expected[n as usize], "p({})", n);
        }
    }
}

#[test]
fn test_per_worker_tables() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let mut table = PartitionTable::new();
                table.exact(250)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), exact(250));
    }
}
