//! Resource script update.
//!
//! Rewrites the four version fields a Windows .rc file carries: the two
//! numeric VERSIONINFO tuples and the two quoted string values.

use std::path::Path;

use crate::error::BumpError;
use crate::subst::substitute;

use super::{read_file, write_file};

// "1,0,218,1" style numeric tuples
const FILEVERSION_PATTERN: &str = r"FILEVERSION\s+[0-9]+,\s*[0-9]+,\s*([0-9]+)";
const PRODUCTVERSION_PATTERN: &str = r"PRODUCTVERSION\s+[0-9]+,\s*[0-9]+,\s*([0-9]+)";
// "1.0.218.1" style quoted strings
const FILEVERSION_STRING_PATTERN: &str = r#""FileVersion",\s*"[0-9]+\.[0-9]+\.([0-9]+)"#;
const PRODUCTVERSION_STRING_PATTERN: &str = r#""ProductVersion",\s*"[0-9]+\.[0-9]+\.([0-9]+)"#;

/// Replace the third component of all four version fields with `build`.
///
/// All four substitutions run against the in-memory text; the file is written
/// once, only after every field was found. A missing field aborts the whole
/// update and leaves the on-disk file untouched.
pub fn bump_rc_file(path: &Path, build: &str) -> Result<(), BumpError> {
    let mut text = read_file(path)?;

    for pattern in [
        FILEVERSION_PATTERN,
        PRODUCTVERSION_PATTERN,
        FILEVERSION_STRING_PATTERN,
        PRODUCTVERSION_STRING_PATTERN,
    ] {
        text = substitute(&text, pattern, build, 1).map_err(|source| BumpError::FieldNotFound {
            path: path.to_path_buf(),
            source,
        })?;
    }

    write_file(path, &text)
}
