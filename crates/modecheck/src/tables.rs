//! Parallel configuration table extraction.
//!
//! A mode table is a flat `const` array whose index is implicitly the mode
//! index, so element order is load-bearing and preserved exactly as
//! declared.
//!
//! String tables follow the quote-only extraction rule: an element's value
//! is whatever sits between the first pair of `"` in that element, and an
//! element without quotes (such as a `NULL` placeholder) is skipped
//! entirely rather than counted. This mirrors the behavior the firmware
//! check has always had. It is a latent source of false passes if a table
//! ever legitimately holds unquoted placeholders, and is kept deliberately
//! rather than fixed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ModeCheckError;
use crate::literal::parse_int;
use crate::scan;

/// The declared element type of a mode table.
///
/// This is what distinguishes a names table from a speeds table in source:
/// `Text` matches `const char *name[]` declarations, `Unsigned` matches
/// `const uint32_t name[]` declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// String-literal elements (`const char *`)
    Text,
    /// Unsigned-integer elements (`const uint32_t`)
    Unsigned,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Text => write!(f, "string"),
            TableKind::Unsigned => write!(f, "uint32"),
        }
    }
}

/// Names one table the verifier must find and measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Array identifier in the source
    pub name: String,
    /// Declared element type to match
    pub kind: TableKind,
}

impl TableSpec {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, kind: TableKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The parsed elements of one table, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralTable {
    /// Elements of a string table
    Text(Vec<String>),
    /// Elements of an unsigned-integer table
    Unsigned(Vec<i64>),
}

impl LiteralTable {
    /// Number of extracted elements.
    pub fn len(&self) -> usize {
        match self {
            LiteralTable::Text(items) => items.len(),
            LiteralTable::Unsigned(items) => items.len(),
        }
    }

    /// True when the table extracted no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the elements of the array described by `spec`, in declaration
/// order.
///
/// # Errors
///
/// - [`ModeCheckError::TableNotFound`] if no array declaration matches both
///   the name and the declared element kind
/// - [`ModeCheckError::Parse`] if an unsigned table element is not a valid
///   integer literal
pub fn extract_table(source: &str, spec: &TableSpec) -> Result<LiteralTable, ModeCheckError> {
    let block = scan::find_array_block(source, &spec.name, spec.kind).ok_or_else(|| {
        ModeCheckError::TableNotFound {
            name: spec.name.clone(),
            kind: spec.kind,
        }
    })?;

    let table = match spec.kind {
        TableKind::Text => {
            let mut names = Vec::new();
            for entry in scan::split_entries(block) {
                // Quote-only rule: unquoted entries are skipped, not counted.
                if let Some(name) = quoted_content(&entry) {
                    names.push(name);
                }
            }
            LiteralTable::Text(names)
        }
        TableKind::Unsigned => {
            let mut values = Vec::new();
            for entry in scan::split_entries(block) {
                values.push(parse_int(&entry)?);
            }
            LiteralTable::Unsigned(values)
        }
    };

    debug!(table = %spec.name, kind = %spec.kind, entries = table.len(), "table extracted");
    Ok(table)
}

/// Content strictly between the first pair of quotes in `entry`.
fn quoted_content(entry: &str) -> Option<String> {
    let start = entry.find('"')?;
    let rest = entry.get(start + 1..)?;
    let end = rest.find('"')?;
    rest.get(..end).map(str::to_string)
}
