//! Error types for buildbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the pattern substitution primitive.
#[derive(Error, Debug)]
pub enum SubstError {
    #[error("Unable to find pattern '{pattern}'")]
    PatternNotFound { pattern: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("Pattern '{pattern}' must contain exactly one capturing group")]
    MissingCaptureGroup { pattern: String },

    #[error("Replacement count must be at least 1")]
    InvalidCount,
}

/// Errors from the version bump pipeline.
///
/// I/O failures and format mismatches are deliberately distinct variants so a
/// failed build step reports whether the file was unreadable or merely missing
/// the expected field.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to find version declaration in {}", .path.display())]
    VersionNotFound { path: PathBuf },

    #[error("Build number '{value}' in {} is not an integer: {source}", .path.display())]
    BuildNumberParse {
        path: PathBuf,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{}: {source}", .path.display())]
    FieldNotFound {
        path: PathBuf,
        #[source]
        source: SubstError,
    },
}
