// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_SVNLOOK;

/// msgcheck - commit message format checker
///
/// Run from a Subversion pre-commit hook as `msgcheck "$REPOS" "$TXN"`.
/// All output goes to stderr; the exit status is 0 when the message is
/// accepted and 1 when it is rejected.
#[derive(Parser, Debug)]
#[command(name = "msgcheck")]
#[command(author = "Eshan Roy")]
#[command(version, long_version = crate::version::LONG_VERSION.as_str())]
#[command(about = "Check a pending commit message against the contribution policy", long_about = None)]
pub struct Cli {
    /// Path of the repository receiving the commit
    #[arg(value_name = "REPOS")]
    pub repository: String,

    /// Identifier of the pending transaction
    #[arg(value_name = "TXN")]
    pub transaction: String,

    /// svnlook executable used to read the log message
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SVNLOOK)]
    pub svnlook: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text report (default)
    #[default]
    Text,
    /// JSON report for machine parsing
    Json,
}
