// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Policy constants for commit message validation.

use std::path::PathBuf;

/// Line every contribution must carry.
pub const CONTRIBUTED_UNDER: &str = "Contributed-under: TianoCore Contribution Agreement 1.0";

/// Where contributors can read about the expected format.
pub const REFERENCE_URL: &str =
    "https://github.com/tianocore/tianocore.github.io/wiki/Commit-Message-Format";

/// Default location of the Subversion inspection tool.
pub const DEFAULT_SVNLOOK: &str = "/usr/bin/svnlook";

/// The policy a commit message is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Contribution agreement line that must appear somewhere in the message.
    pub contributed_under: String,

    /// Maximum length of the subject line, in characters.
    pub max_subject_length: usize,

    /// Maximum length of every line after the blank second line.
    pub max_line_length: usize,

    /// Documentation link printed after every report.
    pub reference_url: String,

    /// Program used to fetch a pending transaction's log message.
    pub svnlook: PathBuf,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            contributed_under: CONTRIBUTED_UNDER.to_string(),
            max_subject_length: 100,
            max_line_length: 180,
            reference_url: REFERENCE_URL.to_string(),
            svnlook: PathBuf::from(DEFAULT_SVNLOOK),
        }
    }
}

impl PolicyConfig {
    /// Use a different retrieval program.
    pub fn with_svnlook(mut self, program: impl Into<PathBuf>) -> Self {
        self.svnlook = program.into();
        self
    }
}
