// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structural checks: subject, blank separator, line lengths and the
//! trailing signature block.

use lazy_static::lazy_static;
use regex::Regex;

use crate::commit::CommitMessage;
use crate::config::PolicyConfig;

use super::validator::{ValidationIssue, ValidationResult, ViolationKind};

lazy_static! {
    /// A `Tag: value` trailer or an `[Updater: note]` line.
    static ref SIG_BLOCK_REGEX: Regex = Regex::new(
        r"(?x)^
          (?:
              (?:(?P<tag>[^:]+)\s*:\s*(?P<value>\S.*?))
            |
              (?:\[(?P<updater>[^:]+)\s*:\s*(?P<note>.+?)\s*\])
          )
          \s*$"
    )
    .unwrap();
}

/// Whether a single line may belong to the signature block.
pub fn is_sig_block_line(line: &str) -> bool {
    SIG_BLOCK_REGEX.is_match(line)
}

/// Run every structural check.
pub fn check_overall_format(
    message: &CommitMessage,
    config: &PolicyConfig,
    result: &mut ValidationResult,
) {
    let lines = message.lines();

    let Some(subject) = message.subject() else {
        result.push(ValidationIssue::new(
            "message-empty",
            ViolationKind::StructuralDefect,
            "Empty commit message!",
        ));
        return;
    };

    if subject.chars().count() > config.max_subject_length {
        result.push(
            ValidationIssue::new(
                "subject-too-long",
                ViolationKind::StructuralDefect,
                "First line of commit message (subject line) is too long.",
            )
            .at_line(1),
        );
    }

    if subject.trim().is_empty() {
        result.push(
            ValidationIssue::new(
                "subject-empty",
                ViolationKind::StructuralDefect,
                "First line of commit message (subject line) is empty.",
            )
            .at_line(1),
        );
    }

    if lines.get(1).is_some_and(|line| !line.trim().is_empty()) {
        result.push(
            ValidationIssue::new(
                "second-line-not-empty",
                ViolationKind::StructuralDefect,
                "Second line of commit message should be empty.",
            )
            .at_line(2),
        );
    }

    for (i, line) in lines.iter().enumerate().skip(2) {
        if line.chars().count() > config.max_line_length {
            result.push(
                ValidationIssue::new(
                    "line-too-long",
                    ViolationKind::StructuralDefect,
                    format!("Line {} of commit message is too long.", i + 1),
                )
                .at_line(i + 1),
            );
        }
    }

    check_signature_block(lines, result);
}

/// Walk up from the last line to find the blank line that must precede
/// the trailers. The subject line is never part of the walk.
fn check_signature_block(lines: &[String], result: &mut ValidationResult) {
    let mut last_sig_line: Option<&str> = None;

    for (i, line) in lines.iter().enumerate().skip(1).rev() {
        if is_sig_block_line(line) {
            last_sig_line = Some(line.trim());
            continue;
        }

        if line.trim().is_empty() {
            break;
        }

        match last_sig_line {
            Some(sig_line) => result.push(
                ValidationIssue::new(
                    "signature-block-separator",
                    ViolationKind::StructuralDefect,
                    "The line before the signature block should be empty",
                )
                .with_suggestion(format!("Add empty line before \"{}\"?", sig_line))
                .at_line(i + 1),
            ),
            None => result.push(
                ValidationIssue::new(
                    "signature-block-missing",
                    ViolationKind::StructuralDefect,
                    "The signature block was not found",
                )
                .at_line(i + 1),
            ),
        }
        break;
    }
}
