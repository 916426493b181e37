// File: crates/outlook-core/tests/common/mod.rs
// Purpose: Shared fixture loading for integration tests.

#![allow(dead_code)]

use outlook_core::Table;
use std::path::PathBuf;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/solar_sample.csv")
}

pub fn sample_table() -> Table {
    Table::from_path(fixture_path()).expect("fixture table")
}

pub fn table_from(csv_text: &str) -> Table {
    Table::from_reader(csv_text.as_bytes()).expect("inline table")
}
