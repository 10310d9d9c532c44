// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types and report rendering.

use crate::cli::args::OutputFormat;
use crate::error::{Result, ResultExt};
use console::Term;
use serde::Serialize;

/// Header printed before the list of violations.
pub const REJECT_HEADER: &str = "The commit message format is not valid:";

/// Line printed when every check passed.
pub const ACCEPT_LINE: &str = "The commit message format passed all checks.";

/// Broad category of a policy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A required line or trailer is missing or unusable.
    Policy,
    /// Case, spacing or email defect inside a trailer line.
    MalformedTrailer,
    /// Subject, blank line, length or signature block problem.
    StructuralDefect,
}

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Error code for programmatic handling.
    pub code: &'static str,
    /// Category of the violation.
    pub kind: ViolationKind,
    /// Human-readable message.
    pub message: String,
    /// Optional remediation hint.
    pub suggestion: Option<String>,
    /// 1-based line number where the issue was found.
    pub line: Option<usize>,
}

impl ValidationIssue {
    /// Create an issue without a hint or line number.
    pub fn new(code: &'static str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            code,
            kind,
            message: message.into(),
            suggestion: None,
            line: None,
        }
    }

    /// Attach a remediation hint.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach a 1-based line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Format the issue as report lines.
    pub fn format(&self) -> String {
        match self.suggestion {
            Some(ref suggestion) => format!(" * {}\n   {}", self.message, suggestion),
            None => format!(" * {}", self.message),
        }
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Validation errors, in the order the checks produced them.
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create an empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        tracing::debug!(code = issue.code, "{}", issue.message);
        self.errors.push(issue);
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether any issue carries the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Render the plain-text report.
    pub fn render_text(&self, reference_url: &str) -> String {
        let mut output = String::new();

        if self.is_valid() {
            output.push_str(ACCEPT_LINE);
            output.push('\n');
        } else {
            output.push_str(REJECT_HEADER);
            output.push('\n');
            for error in &self.errors {
                output.push_str(&error.format());
                output.push('\n');
            }
        }

        output.push_str(reference_url);
        output.push('\n');
        output
    }

    /// Render the JSON report.
    pub fn render_json(&self, reference_url: &str) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "errors": self.errors,
            "reference": reference_url,
        })
    }

    /// Print the report to stderr. Hook infrastructure only relays stderr.
    pub fn print(&self, format: OutputFormat, reference_url: &str) -> Result<()> {
        let rendered = match format {
            OutputFormat::Text => self.render_text(reference_url),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&self.render_json(reference_url))
                    .context("render report")?;
                json.push('\n');
                json
            }
        };

        Term::stderr()
            .write_str(&rendered)
            .context("write report")?;
        Ok(())
    }
}
