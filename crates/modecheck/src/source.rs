//! Source text loading.
//!
//! The pipeline itself only ever sees a string; everything that knows
//! about files lives behind [`SourceProvider`] so the extraction and
//! verification logic stays testable with in-memory fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ModeCheckError;
use crate::verify::{CheckSpec, ConsistencyReport, verify_source};

/// Supplies the raw source text to verify.
pub trait SourceProvider {
    /// Produce the current source text.
    ///
    /// # Errors
    ///
    /// Implementations surface their read failures as
    /// [`ModeCheckError::Io`].
    fn load(&self) -> Result<String, ModeCheckError>;
}

/// A [`SourceProvider`] reading one file from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Provider for the given sketch path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceProvider for FileSource {
    fn load(&self) -> Result<String, ModeCheckError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Load from `provider` and verify against `check`.
///
/// # Errors
///
/// Propagates the provider's load error or any verification error.
pub fn verify_provider<P: SourceProvider>(
    provider: &P,
    check: &CheckSpec,
) -> Result<ConsistencyReport, ModeCheckError> {
    let source = provider.load()?;
    verify_source(&source, check)
}

/// Read the sketch at `path` and verify against `check`.
///
/// # Errors
///
/// Propagates the read error or any verification error.
pub fn verify_path(
    path: impl AsRef<Path>,
    check: &CheckSpec,
) -> Result<ConsistencyReport, ModeCheckError> {
    verify_provider(&FileSource::new(path.as_ref()), check)
}
