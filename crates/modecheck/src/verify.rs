//! The extract-then-compare pipeline.
//!
//! A verification run is a pure function of one source-text snapshot: pull
//! the sentinel count out of the enum, measure every configured table, and
//! require all counts to agree. There is no partial pass; any extraction
//! failure or any length disagreement fails the whole run.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enums::extract_enum;
use crate::error::ModeCheckError;
use crate::tables::{TableKind, TableSpec, extract_table};

/// What to look for in a sketch: the enum, its count sentinel, and the
/// parallel tables that must stay in lock-step with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpec {
    /// Name of the mode enum
    pub enum_name: String,
    /// Name of the enum member holding the mode count
    pub sentinel: String,
    /// Tables whose lengths must equal the sentinel count
    pub tables: Vec<TableSpec>,
}

impl Default for CheckSpec {
    /// The stepper sketch convention: `TestMode` / `MODE_COUNT` with a
    /// names table and a speeds table.
    fn default() -> Self {
        Self {
            enum_name: "TestMode".to_string(),
            sentinel: "MODE_COUNT".to_string(),
            tables: vec![
                TableSpec::new("modeNames", TableKind::Text),
                TableSpec::new("modeSpeeds", TableKind::Unsigned),
            ],
        }
    }
}

/// One table whose length disagrees with the sentinel count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDrift {
    /// Name of the drifting table
    pub table: String,
    /// Mode count the enum declares
    pub expected: i64,
    /// Entries the table actually has
    pub actual: usize,
}

/// Every table that drifted from the enum, reported together so one run
/// pinpoints all offenders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchReport {
    /// The enum the tables are measured against
    pub enum_name: String,
    /// The sentinel member the count came from
    pub sentinel: String,
    /// The declared mode count
    pub expected: i64,
    /// All diverging tables
    pub drifts: Vec<TableDrift>,
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode tables out of sync with enum `{}` (`{}` = {}):",
            self.enum_name, self.sentinel, self.expected
        )?;
        for drift in &self.drifts {
            write!(
                f,
                " `{}` has {} entries, expected {};",
                drift.table, drift.actual, drift.expected
            )?;
        }
        Ok(())
    }
}

/// Counts recorded by a passing run, available for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    /// The enum that was checked
    pub enum_name: String,
    /// Mode count declared by the sentinel
    pub mode_count: i64,
    /// Per-table entry counts, in `CheckSpec` order
    pub tables: Vec<TableCount>,
}

/// Entry count of one verified table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    /// Table name
    pub table: String,
    /// Extracted entry count
    pub entries: usize,
}

/// Verify that every configured table's length equals the enum's sentinel
/// count.
///
/// # Errors
///
/// Propagates any extraction error unchanged, and returns
/// [`ModeCheckError::Mismatch`] naming every diverging table when all
/// extractions succeed but the counts disagree.
pub fn verify_source(
    source: &str,
    check: &CheckSpec,
) -> Result<ConsistencyReport, ModeCheckError> {
    let extraction = extract_enum(source, &check.enum_name, &check.sentinel)?;
    let expected = extraction.sentinel_count;

    let mut counts = Vec::new();
    let mut drifts = Vec::new();

    for spec in &check.tables {
        let table = extract_table(source, spec)?;
        let actual = table.len();
        counts.push(TableCount {
            table: spec.name.clone(),
            entries: actual,
        });
        let aligned = i64::try_from(actual).is_ok_and(|a| a == expected);
        if !aligned {
            drifts.push(TableDrift {
                table: spec.name.clone(),
                expected,
                actual,
            });
        }
    }

    if !drifts.is_empty() {
        return Err(ModeCheckError::Mismatch(MismatchReport {
            enum_name: check.enum_name.clone(),
            sentinel: check.sentinel.clone(),
            expected,
            drifts,
        }));
    }

    debug!(
        enum_name = %check.enum_name,
        mode_count = expected,
        tables = counts.len(),
        "mode tables consistent"
    );
    Ok(ConsistencyReport {
        enum_name: check.enum_name.clone(),
        mode_count: expected,
        tables: counts,
    })
}
