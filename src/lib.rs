// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! msgcheck - commit message format checker
//!
//! Validates a pending commit message against a contribution policy from a
//! server-side pre-commit hook.
//!
//! # Checks
//!
//! - **Contributed-under**: the contribution agreement line must be present
//! - **Signed-off-by**: must be present, correctly spelled and spaced
//! - **Other trailers**: `Reviewed-by`, `Reported-by`, `Tested-by`,
//!   `Suggested-by`, `Acked-by` and `Cc` must be well formed when used
//! - **Email addresses**: trailer values must read `Name <address>`
//! - **Shape**: subject length, blank second line, line lengths and a
//!   blank line before the trailing signature block
//!
//! # Example
//!
//! ```
//! use msgcheck::rules::MessageValidator;
//!
//! let validator = MessageValidator::default();
//! let result = validator.validate_str(
//!     "MdePkg: Fix typo\n\n\
//!      Contributed-under: TianoCore Contribution Agreement 1.0\n\
//!      Signed-off-by: Jane Doe <jane@example.com>\n",
//! );
//! assert!(result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;
pub mod source;

// Re-exports for convenience
pub use config::PolicyConfig;
pub use error::{MsgCheckError, Result};
pub use rules::{MessageValidator, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    use lazy_static::lazy_static;

    /// The current version of msgcheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    lazy_static! {
        /// Text shown by `--version`.
        pub static ref LONG_VERSION: String = version_string();
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
