// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Runs every check against a commit message, in a fixed order.

use crate::commit::CommitMessage;
use crate::config::PolicyConfig;
use crate::error::Result;
use crate::source::MessageSource;

use super::shape::check_overall_format;
use super::trailer::{find_sigs, MISC_SIGS, SIGNED_OFF_BY};
use super::validator::{ValidationIssue, ValidationResult, ViolationKind};

/// Validates commit messages against the contribution policy.
#[derive(Debug, Clone, Default)]
pub struct MessageValidator {
    config: PolicyConfig,
}

impl MessageValidator {
    /// Create a validator for the given policy.
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// The policy in use.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Validate a commit message. Every violation is collected.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new();

        self.check_contributed_under(message, &mut result);
        check_signed_off_by(message, &mut result);
        check_misc_sigs(message, &mut result);
        check_overall_format(message, &self.config, &mut result);

        tracing::debug!(errors = result.issue_count(), "validation finished");
        result
    }

    /// Validate a commit message string.
    pub fn validate_str(&self, message: &str) -> ValidationResult {
        self.validate(&CommitMessage::new(message))
    }

    /// Fetch the pending message for a transaction and validate it.
    pub fn check_transaction(
        &self,
        source: &dyn MessageSource,
        repository: &str,
        transaction: &str,
    ) -> Result<ValidationResult> {
        let text = source.retrieve_message(repository, transaction)?;
        tracing::debug!(repository, transaction, bytes = text.len(), "message retrieved");
        Ok(self.validate_str(&text))
    }

    fn check_contributed_under(&self, message: &CommitMessage, result: &mut ValidationResult) {
        if !message.contains(&self.config.contributed_under) {
            result.push(ValidationIssue::new(
                "contributed-under-missing",
                ViolationKind::Policy,
                "Missing Contributed-under! (Note: this must be added by the code contributor!)",
            ));
        }
    }
}

/// A literal `Signed-off-by` must appear; only then is its format checked.
fn check_signed_off_by(message: &CommitMessage, result: &mut ValidationResult) {
    if !message.contains(SIGNED_OFF_BY.canonical()) {
        result.push(ValidationIssue::new(
            "signed-off-by-missing",
            ViolationKind::Policy,
            "Missing Signed-off-by! (Note: this must be added by the code contributor!)",
        ));
        return;
    }

    if find_sigs(&SIGNED_OFF_BY, message, result).is_empty() {
        result.push(ValidationIssue::new(
            "signed-off-by-invalid",
            ViolationKind::Policy,
            "Invalid Signed-off-by format!",
        ));
    }
}

fn check_misc_sigs(message: &CommitMessage, result: &mut ValidationResult) {
    for spec in MISC_SIGS.iter() {
        find_sigs(spec, message, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MsgCheckError, RetrievalError};

    const CU: &str = "Contributed-under: TianoCore Contribution Agreement 1.0";

    fn validate(text: &str) -> ValidationResult {
        MessageValidator::default().validate_str(text)
    }

    fn codes(result: &ValidationResult) -> Vec<&'static str> {
        result.errors.iter().map(|e| e.code).collect()
    }

    fn well_formed() -> String {
        format!(
            "MdePkg: Fix buffer overrun in BaseLib\n\
             \n\
             The loop bound was off by one.\n\
             \n\
             Cc: Bob Builder <bob@example.com>\n\
             {}\n\
             Signed-off-by: Jane Doe <jane@example.com>\n\
             Reviewed-by: \"Smith, John\" <john@example.com>\n",
            CU
        )
    }

    #[test]
    fn test_well_formed_message_is_accepted() {
        let result = validate(&well_formed());
        assert!(result.is_valid(), "{:?}", result.errors);
    }

    #[test]
    fn test_missing_contributed_under() {
        let text = well_formed().replace(CU, "Reported-by: Ann <ann@example.com>");
        let result = validate(&text);
        assert_eq!(codes(&result), ["contributed-under-missing"]);
    }

    #[test]
    fn test_contributed_under_may_appear_anywhere() {
        let text = format!(
            "Subject\n\n{}\n\nSigned-off-by: Jane Doe <jane@example.com>",
            CU
        );
        assert!(validate(&text).is_valid());
    }

    #[test]
    fn test_missing_signed_off_by_reported_once() {
        let text = format!("Subject\n\nBody.\n\n{}", CU);
        let result = validate(&text);
        assert_eq!(codes(&result), ["signed-off-by-missing"]);
        assert!(!result.has_code("signed-off-by-invalid"));
    }

    #[test]
    fn test_lowercase_variant_only_counts_as_missing() {
        let text = format!("Subject\n\n{}\nsigned off by: Jane <jane@x.com>", CU);
        let result = validate(&text);
        assert!(result.has_code("signed-off-by-missing"));
        assert!(!result.has_code("trailer-case"));
    }

    #[test]
    fn test_signed_off_by_not_at_line_start_is_invalid() {
        let text = format!(
            "Subject\n\nMention Signed-off-by in the body.\n\n{}",
            CU
        );
        let result = validate(&text);
        assert_eq!(codes(&result), ["signed-off-by-invalid"]);
    }

    #[test]
    fn test_misspelled_trailer_is_corrected() {
        let text = format!(
            "Subject\n\nSigned-off-by appears in body.\n\n{}\nsigned off by: Name <email@x.com>",
            CU
        );
        let result = validate(&text);
        assert_eq!(codes(&result), ["trailer-case"]);
        assert_eq!(
            result.errors[0].message,
            "'signed off by' should be 'Signed-off-by'"
        );
    }

    #[test]
    fn test_errors_accumulate_in_check_order() {
        let text = "Subject\nnot blank\nAcked-by:Ann<ann@x.com>";
        let result = validate(text);
        assert_eq!(
            codes(&result),
            [
                "contributed-under-missing",
                "signed-off-by-missing",
                "trailer-space-after-colon",
                "email-missing-space",
                "second-line-not-empty",
                "signature-block-separator",
            ]
        );
    }

    #[test]
    fn test_empty_message() {
        let result = validate("");
        assert_eq!(
            codes(&result),
            [
                "contributed-under-missing",
                "signed-off-by-missing",
                "message-empty"
            ]
        );
    }

    #[test]
    fn test_check_transaction_uses_source() {
        let validator = MessageValidator::default();
        let message = well_formed();
        let source = |repo: &str, txn: &str| -> Result<String> {
            assert_eq!(repo, "/srv/svn/edk2");
            assert_eq!(txn, "42-1a");
            Ok(message.clone())
        };

        let result = validator
            .check_transaction(&source, "/srv/svn/edk2", "42-1a")
            .unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_check_transaction_propagates_retrieval_failure() {
        let validator = MessageValidator::default();
        let source = |repo: &str, txn: &str| -> Result<String> {
            Err(RetrievalError::Unavailable {
                repository: repo.to_string(),
                transaction: txn.to_string(),
                message: "gone".to_string(),
            }
            .into())
        };

        let err = validator
            .check_transaction(&source, "/srv/svn/edk2", "7")
            .unwrap_err();
        assert!(matches!(err, MsgCheckError::Retrieval(_)));
    }
}
