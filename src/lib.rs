//! buildbump - A CLI tool that bumps the build number across build artifacts.
//!
//! # Overview
//!
//! buildbump increments the BUILD component of the `MAJOR.MINOR.BUILD` version
//! declared in `ls.manifest`, then propagates the new build number into the
//! Windows resource script (`ls.rc`) and the config header (`config.h`) so all
//! three files agree after every build.

pub mod bump;
pub mod error;
pub mod subst;

// Re-export commonly used types
pub use bump::{BumpOutcome, run_bump};
pub use bump::manifest::BumpedVersion;
pub use error::{BumpError, SubstError};
pub use subst::substitute;
