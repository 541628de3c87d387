//! Manifest data structures
//!
//! Field names and their order are what the CI workflow indexes by.

use serde::{Deserialize, Serialize};

/// One discovered test and the build target it produces
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    /// Test source name without its extension, e.g. `leds_test`
    pub name: String,
    /// Build target name, e.g. `leds_unit_test`
    pub test_name: String,
    /// Build target inside the scanned directory, e.g. `./tests/leds_unit_test`
    pub path: String,
}

/// The test matrix of one run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    include: Vec<TestRecord>,
}

impl Manifest {
    /// Creates an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manifest holding `records` in the given order
    pub fn from_records(records: Vec<TestRecord>) -> Self {
        Manifest { include: records }
    }

    /// Appends a record; duplicates are kept
    pub fn push(&mut self, record: TestRecord) {
        self.include.push(record);
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.include
    }

    pub fn len(&self) -> usize {
        self.include.len()
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }
}

impl From<Vec<TestRecord>> for Manifest {
    fn from(records: Vec<TestRecord>) -> Self {
        Self::from_records(records)
    }
}
