//! Config header update.
//!
//! The header's VERSION macro carries the dotted version plus a `YYYY/MM`
//! stamp of when the build number last moved; both are rewritten together.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::BumpError;
use crate::subst::substitute;

use super::{read_file, write_file};

// #define VERSION "4.3.174 2007/10"
const VERSION_MACRO_PATTERN: &str =
    r#"#define\s+VERSION\s+"[0-9]+\.[0-9]+\.([0-9]+\s+[0-9]+/[0-9]+)""#;

/// Replace the `BUILD YYYY/MM` portion of the VERSION macro with `build` and
/// the year/month of `today`.
///
/// The date is a parameter rather than read from the clock here so the
/// rewrite is deterministic under test; the pipeline passes the local date.
pub fn bump_config_header(path: &Path, build: &str, today: NaiveDate) -> Result<(), BumpError> {
    let text = read_file(path)?;

    let replacement = format!("{} {}", build, today.format("%Y/%m"));
    let updated =
        substitute(&text, VERSION_MACRO_PATTERN, &replacement, 1).map_err(|source| {
            BumpError::FieldNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;

    write_file(path, &updated)
}
