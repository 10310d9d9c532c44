// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Check execution.

use crate::config::PolicyConfig;
use crate::error::Result;
use crate::rules::MessageValidator;
use crate::source::{MessageSource, SvnLook};

use super::args::{Cli, OutputFormat};

/// Outcome of a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The commit may proceed.
    Accepted,
    /// The commit must be refused.
    Rejected,
}

impl Verdict {
    /// Process exit status for this verdict.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Accepted => 0,
            Verdict::Rejected => 1,
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<Verdict> {
    let config = PolicyConfig::default().with_svnlook(&cli.svnlook);
    let source = SvnLook::new(&config.svnlook);

    run_with_source(&cli, config, &source)
}

/// Run the check against an arbitrary message source.
pub fn run_with_source(
    cli: &Cli,
    config: PolicyConfig,
    source: &dyn MessageSource,
) -> Result<Verdict> {
    tracing::debug!(
        repository = %cli.repository,
        transaction = %cli.transaction,
        "checking commit message"
    );

    let validator = MessageValidator::new(config);
    let result = validator.check_transaction(source, &cli.repository, &cli.transaction)?;

    result.print(cli.format, &validator.config().reference_url)?;

    if result.is_valid() {
        Ok(Verdict::Accepted)
    } else {
        tracing::debug!(errors = result.issue_count(), "commit message rejected");
        Ok(Verdict::Rejected)
    }
}
