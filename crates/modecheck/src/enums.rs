//! Enum block extraction.
//!
//! Resolves each member of a mode enum to an explicit integer value and
//! stops at the count sentinel. Value assignment follows the firmware
//! language's rules: the first member defaults to 0, an explicit
//! `= <literal>` re-bases the sequence, and every implicit member is the
//! previous member's value plus one. Duplicate explicit values (aliases)
//! are legal and kept as-is.

use tracing::debug;

use crate::error::ModeCheckError;
use crate::literal::parse_int;
use crate::scan;

/// A single enum member resolved to its integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Member identifier as written in the source
    pub name: String,
    /// Resolved integer value (explicit or implicit)
    pub value: i64,
}

/// The result of scanning a mode enum: the real members in declaration
/// order, and the value of the count sentinel that terminated the scan.
///
/// The sentinel itself is not a mode and is not included in `members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumExtraction {
    /// Real mode members, in declaration order
    pub members: Vec<EnumMember>,
    /// Value bound to the sentinel member
    pub sentinel_count: i64,
}

/// Extract the members of `enum <enum_name>` up to the `sentinel` member.
///
/// Members after the sentinel are never parsed; a malformed entry past the
/// sentinel cannot fail the check.
///
/// # Errors
///
/// - [`ModeCheckError::EnumNotFound`] if no enum block under `enum_name`
///   exists in the source
/// - [`ModeCheckError::SentinelNotFound`] if the block exists but the
///   sentinel name never appears
/// - [`ModeCheckError::Parse`] if an explicit member value is not a valid
///   integer literal
pub fn extract_enum(
    source: &str,
    enum_name: &str,
    sentinel: &str,
) -> Result<EnumExtraction, ModeCheckError> {
    let block = scan::find_enum_block(source, enum_name).ok_or_else(|| {
        ModeCheckError::EnumNotFound {
            name: enum_name.to_string(),
        }
    })?;

    let mut members = Vec::new();
    let mut running = 0i64;

    for entry in scan::split_entries(block) {
        let (name, value) = match entry.split_once('=') {
            Some((lhs, rhs)) => (lhs.trim().to_string(), parse_int(rhs)?),
            None => (entry, running),
        };

        if name == sentinel {
            debug!(enum_name, sentinel, count = value, "sentinel reached");
            return Ok(EnumExtraction {
                members,
                sentinel_count: value,
            });
        }

        running = value + 1;
        members.push(EnumMember { name, value });
    }

    Err(ModeCheckError::SentinelNotFound {
        enum_name: enum_name.to_string(),
        sentinel: sentinel.to_string(),
    })
}
