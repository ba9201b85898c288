//! Error types for mode-table checking.

use thiserror::Error;

use crate::tables::TableKind;
use crate::verify::MismatchReport;

/// Errors that can occur while extracting or verifying mode tables.
#[derive(Error, Debug)]
pub enum ModeCheckError {
    /// No enum declaration under the requested name exists in the source
    #[error("enum `{name}` not found in source")]
    EnumNotFound {
        /// The enum name that was searched for
        name: String,
    },

    /// No array declaration matching the requested name and element kind
    /// exists in the source
    #[error("{kind} array `{name}` not found in source")]
    TableNotFound {
        /// The array name that was searched for
        name: String,
        /// The declared element kind that was searched for
        kind: TableKind,
    },

    /// The enum block was found but its count sentinel never appears
    #[error("sentinel `{sentinel}` not found in enum `{enum_name}`")]
    SentinelNotFound {
        /// The enum that was scanned
        enum_name: String,
        /// The sentinel member name that never appeared
        sentinel: String,
    },

    /// A token could not be parsed as an integer literal
    #[error("cannot parse `{token}` as an integer literal: {reason}")]
    Parse {
        /// The offending raw token
        token: String,
        /// Why parsing failed
        reason: String,
    },

    /// All extractions succeeded but one or more table lengths disagree
    /// with the enum's sentinel count
    #[error("{0}")]
    Mismatch(MismatchReport),

    /// Reading the source text failed
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}
