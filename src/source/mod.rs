// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Where commit messages come from.
//!
//! Validation only needs the message text; fetching it is delegated to a
//! [`MessageSource`] so the checks can run on in-memory strings.

mod svnlook;

pub use svnlook::SvnLook;

use crate::error::Result;

/// Fetches the pending commit message of a transaction.
pub trait MessageSource {
    /// Return the full message text for `transaction` in `repository`.
    fn retrieve_message(&self, repository: &str, transaction: &str) -> Result<String>;
}

impl<F> MessageSource for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn retrieve_message(&self, repository: &str, transaction: &str) -> Result<String> {
        self(repository, transaction)
    }
}
