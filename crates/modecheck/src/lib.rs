//! Firmware mode-table consistency checking.
//!
//! Stepper firmware sketches enumerate their operating modes once and then
//! repeat that ordering in parallel configuration tables: a display-name
//! array and a speed array, both implicitly keyed by mode index. Nothing in
//! the firmware language enforces that the three definitions stay in
//! lock-step, so adding a mode to the enum without touching the tables (or
//! vice versa) compiles cleanly and misbehaves at runtime.
//!
//! This crate extracts all three definitions from raw source text and
//! asserts that every table has exactly as many entries as the enum's count
//! sentinel declares.
//!
//! # Architecture
//!
//! - [`enums`]: enum block extraction with explicit-value re-basing and
//!   sentinel termination
//! - [`tables`]: parallel array extraction (string and unsigned tables)
//! - [`verify`]: the extract-then-compare pipeline and its drift report
//! - [`source`]: the "give me the text" seam keeping the pipeline pure
//! - [`literal`]: multi-base integer literal parsing shared by the above
//! - [`error`]: error types
//!
//! # Example
//!
//! ```
//! use modecheck::{CheckSpec, verify_source};
//!
//! let sketch = r#"
//!     enum TestMode { SLOW, FAST, MODE_COUNT };
//!     const char *modeNames[] = { "Slow", "Fast" };
//!     const uint32_t modeSpeeds[] = { 100, 500 };
//! "#;
//!
//! let report = verify_source(sketch, &CheckSpec::default())?;
//! assert_eq!(report.mode_count, 2);
//! # Ok::<(), modecheck::ModeCheckError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod enums;
pub mod error;
pub mod literal;
mod scan;
pub mod source;
pub mod tables;
pub mod verify;

pub use enums::{EnumExtraction, EnumMember, extract_enum};
pub use error::ModeCheckError;
pub use source::{FileSource, SourceProvider, verify_path, verify_provider};
pub use tables::{LiteralTable, TableKind, TableSpec, extract_table};
pub use verify::{CheckSpec, ConsistencyReport, MismatchReport, TableDrift, verify_source};

/// A specialized `Result` type for mode-table checking operations.
pub type Result<T> = std::result::Result<T, ModeCheckError>;
