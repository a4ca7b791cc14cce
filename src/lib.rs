//! Shared fixtures for the workspace integration tests.

use serde::Deserialize;

/// Golden products file shipped under `tests/testdata`.
pub const GOLDEN_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/testdata/golden_products.json"
);

#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One known `a x b = product` triple, rows as nested arrays.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    pub a: Vec<Vec<i64>>,
    pub b: Vec<Vec<i64>>,
    pub product: Vec<Vec<i64>>,
}

/// Read and parse the golden file.
pub fn load_golden_data() -> Result<GoldenData, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(GOLDEN_PATH)?;
    Ok(serde_json::from_str(&data)?)
}
