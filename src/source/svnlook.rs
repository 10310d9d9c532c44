// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Message retrieval through `svnlook log`.

use crate::error::{MsgCheckError, RetrievalError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::MessageSource;

/// Reads a transaction's log message with `svnlook log -t <TXN> <REPOS>`.
///
/// The tool's stdout and stderr share one pipe, so whatever it prints is
/// taken as the message. A non-zero exit status is only an error when the
/// tool printed nothing at all.
#[derive(Debug, Clone)]
pub struct SvnLook {
    program: PathBuf,
}

impl SvnLook {
    /// Use the given `svnlook` executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable being run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn spawn_failed(&self, e: std::io::Error) -> MsgCheckError {
        MsgCheckError::Retrieval(RetrievalError::SpawnFailed {
            program: self.program.clone(),
            message: e.to_string(),
        })
    }
}

impl MessageSource for SvnLook {
    fn retrieve_message(&self, repository: &str, transaction: &str) -> Result<String> {
        tracing::debug!(
            program = %self.program.display(),
            repository,
            transaction,
            "running svnlook"
        );

        let (mut reader, writer) = std::io::pipe().map_err(|e| self.spawn_failed(e))?;
        let stderr_writer = writer.try_clone().map_err(|e| self.spawn_failed(e))?;

        let mut command = Command::new(&self.program);
        command
            .arg("log")
            .args(["-t", transaction])
            .arg(repository)
            .stdout(writer)
            .stderr(stderr_writer);

        let mut child = command.spawn().map_err(|e| self.spawn_failed(e))?;
        // The command keeps the write ends open until dropped.
        drop(command);

        let mut output = Vec::new();
        reader.read_to_end(&mut output)?;
        let status = child.wait()?;

        if !status.success() {
            if output.is_empty() {
                return Err(RetrievalError::Unavailable {
                    repository: repository.to_string(),
                    transaction: transaction.to_string(),
                    message: format!("{} exited with {}", self.program.display(), status),
                }
                .into());
            }
            tracing::warn!(
                program = %self.program.display(),
                %status,
                "svnlook exited unsuccessfully, using its output as the message"
            );
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}
