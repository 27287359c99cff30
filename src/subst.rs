//! Pattern substitution primitive.
//!
//! A pure scan-and-replace over text: each match contributes exactly one
//! capturing-group span, and only that span is replaced. Decoupled from file
//! I/O so it stays unit-testable without a filesystem.

use regex_lite::Regex;
use tracing::debug;

use crate::error::SubstError;

/// Replace the capturing-group span of up to `count` matches of `pattern` in
/// `text` with `replacement`.
///
/// Matches are consumed left to right, non-overlapping; each search resumes
/// immediately after the previous capture's end. Text outside the capture
/// spans is preserved verbatim.
///
/// # Errors
///
/// - `PatternNotFound` if the pattern never matches.
/// - `InvalidCount` if `count` is zero (a silent no-op would mask a missed
///   field).
/// - `InvalidPattern` / `MissingCaptureGroup` if the pattern does not compile
///   or does not contain exactly one capturing group.
///
/// Fewer than `count` matches is not an error as long as at least one
/// substitution happened; the file simply has fewer of the field than asked
/// for.
pub fn substitute(
    text: &str,
    pattern: &str,
    replacement: &str,
    count: usize,
) -> Result<String, SubstError> {
    if count == 0 {
        return Err(SubstError::InvalidCount);
    }

    let re = Regex::new(pattern).map_err(|source| SubstError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    // captures_len counts the implicit whole-match group
    if re.captures_len() != 2 {
        return Err(SubstError::MissingCaptureGroup {
            pattern: pattern.to_string(),
        });
    }

    let mut result = String::new();
    let mut remaining = text;
    let mut substitutions = 0;

    for _ in 0..count {
        let Some(caps) = re.captures(remaining) else {
            if substitutions == 0 {
                return Err(SubstError::PatternNotFound {
                    pattern: pattern.to_string(),
                });
            }
            break;
        };

        let Some(group) = caps.get(1) else {
            // A match with an unparticipating group means the pattern made
            // its only group optional; refuse rather than guess a span.
            return Err(SubstError::MissingCaptureGroup {
                pattern: pattern.to_string(),
            });
        };

        result.push_str(&remaining[..group.start()]);
        result.push_str(replacement);
        remaining = &remaining[group.end()..];
        substitutions += 1;
    }

    debug!(pattern, substitutions, "applied substitutions");

    result.push_str(remaining);
    Ok(result)
}
