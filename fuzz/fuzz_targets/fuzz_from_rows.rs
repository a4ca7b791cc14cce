#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{Element, Matrix};

fuzz_target!(|data: &[u8]| {
    // Each byte is a row length; ragged input must be rejected, never panic
    let rows: Vec<Vec<Element>> = data
        .iter()
        .take(32)
        .map(|&len| vec![1; usize::from(len % 16)])
        .collect();
    let uniform = rows.first().is_some_and(|first| {
        !first.is_empty() && rows.iter().all(|r| r.len() == first.len())
    });
    assert_eq!(Matrix::from_rows(rows).is_ok(), uniform);
});
