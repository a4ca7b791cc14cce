#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{usual_multiply, Element, Matrix, StrassenEngine};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Dimensions capped at 40 to keep each run short
    let rows = usize::from(data[0] % 40) + 1;
    let inner = usize::from(data[1] % 40) + 1;
    let cols = usize::from(data[2] % 40) + 1;
    let threshold = usize::from(data[3] % 8) + 1;
    let body = &data[4..];

    let element = |idx: usize| -> Element {
        if body.is_empty() {
            0
        } else {
            Element::from(i8::from_ne_bytes([body[idx % body.len()]]))
        }
    };
    let a = Matrix::from_fn(rows, inner, |i, j| element(i * inner + j)).unwrap();
    let b = Matrix::from_fn(inner, cols, |i, j| element(rows * inner + i * cols + j)).unwrap();

    let expected = usual_multiply(&a, &b).unwrap();
    let engine = StrassenEngine::new(strassen_core::Options {
        threshold,
        parallel_threshold: threshold * 2,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(engine.multiply(&a, &b).unwrap(), expected);
});
