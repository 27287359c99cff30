//! Manifest version extraction and increment.
//!
//! The manifest declares the canonical version string; this step is the only
//! one that decides what the new build number is. The other files are updated
//! from its result.

use std::path::Path;

use regex_lite::Regex;
use tracing::debug;

use crate::error::BumpError;

use super::{read_file, write_file};

/// The version produced by bumping the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpedVersion {
    /// New build number rendered as a string, e.g. "175".
    pub build: String,
    /// Full dotted version with the new build, e.g. "4.3.175".
    pub full: String,
}

/// Increment the BUILD component of `version = "MAJOR.MINOR.BUILD"` in the
/// manifest and write the file back.
///
/// Only the third numeric group is rewritten in place; MAJOR, MINOR, and any
/// trailing component (e.g. the `.1` of `"4.3.174.1"`) are left untouched.
/// The file is persisted before returning, so callers must not run later
/// steps if this fails.
pub fn bump_manifest(path: &Path) -> Result<BumpedVersion, BumpError> {
    let text = read_file(path)?;

    // version = "4.3.174.1"
    let re = Regex::new(r#"version\s*=\s*"([0-9]+)\.([0-9]+)\.([0-9]+)"#)
        .expect("Invalid version regex");

    let caps = re
        .captures(&text)
        .ok_or_else(|| BumpError::VersionNotFound {
            path: path.to_path_buf(),
        })?;

    let major = &caps[1];
    let minor = &caps[2];
    let build_match = caps.get(3).expect("group 3 always participates");

    let build: u64 =
        build_match
            .as_str()
            .parse()
            .map_err(|source| BumpError::BuildNumberParse {
                path: path.to_path_buf(),
                value: build_match.as_str().to_string(),
                source,
            })?;
    let build = (build + 1).to_string();
    let full = format!("{major}.{minor}.{build}");

    debug!(%full, "incremented manifest version");

    let updated = format!(
        "{}{}{}",
        &text[..build_match.start()],
        build,
        &text[build_match.end()..]
    );
    write_file(path, &updated)?;

    Ok(BumpedVersion { build, full })
}
