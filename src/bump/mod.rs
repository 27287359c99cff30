//! Bump pipeline: propagate a single incremented build number across files.
//!
//! Orchestrates the three steps in order: manifest (the source of truth for
//! the new build number), then the resource script, then the config header.
//! Fail-fast with no rollback: a later step's failure leaves earlier files in
//! their updated state, matching how the tool behaves as a one-shot build
//! step that is simply rerun after the tree is fixed.

pub mod header;
pub mod manifest;
pub mod rc;

use std::path::Path;

use chrono::Local;
use tracing::{debug, info};

use crate::error::BumpError;

use self::header::bump_config_header;
use self::manifest::bump_manifest;
use self::rc::bump_rc_file;

/// Fixed file names, resolved relative to the working directory.
pub const MANIFEST_FILE: &str = "ls.manifest";
pub const RC_FILE: &str = "ls.rc";
pub const CONFIG_HEADER_FILE: &str = "config.h";

/// Result of a successful bump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// The new build number, e.g. "219".
    pub build: String,
    /// The full reconstructed version, e.g. "1.0.219".
    pub full_version: String,
}

/// Run the full bump sequence in `dir`.
///
/// The manifest is read and rewritten first; its incremented build number is
/// then threaded into the rc file and config header updates. Any step's
/// failure halts the sequence without touching later files.
pub fn run_bump(dir: &Path) -> Result<BumpOutcome, BumpError> {
    let bumped = bump_manifest(&dir.join(MANIFEST_FILE))?;
    debug!(build = %bumped.build, "manifest updated");

    bump_rc_file(&dir.join(RC_FILE), &bumped.build)?;
    debug!("rc file updated");

    bump_config_header(&dir.join(CONFIG_HEADER_FILE), &bumped.build, Local::now().date_naive())?;
    debug!("config header updated");

    info!(version = %bumped.full, "bump complete");

    Ok(BumpOutcome {
        build: bumped.build,
        full_version: bumped.full,
    })
}

// --- Shared helpers ---

pub(crate) fn read_file(path: &Path) -> Result<String, BumpError> {
    std::fs::read_to_string(path).map_err(|source| BumpError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), BumpError> {
    std::fs::write(path, content).map_err(|source| BumpError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
