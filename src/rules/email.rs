// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! `Display Name <address>` validation for trailer values.

use lazy_static::lazy_static;
use regex::Regex;

use super::validator::{ValidationIssue, ValidationResult, ViolationKind};

lazy_static! {
    /// Name, separator and address of a trailer value.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^\s*(.*?)(\s*)<(.+)>\s*$").unwrap();
}

/// Check one trailer value, recording every defect found.
pub fn check_email(value: &str, line: usize, result: &mut ValidationResult) {
    let value = value.trim();

    let Some(captures) = EMAIL_REGEX.captures(value) else {
        result.push(
            ValidationIssue::new(
                "email-invalid",
                ViolationKind::MalformedTrailer,
                format!("Email format is invalid: {}", value),
            )
            .at_line(line),
        );
        return;
    };

    let name = captures.get(1).map_or("", |m| m.as_str()).trim();
    let separator = captures.get(2).map_or("", |m| m.as_str());
    let address = captures.get(3).map_or("", |m| m.as_str());

    if name.is_empty() {
        result.push(
            ValidationIssue::new(
                "email-missing-name",
                ViolationKind::MalformedTrailer,
                format!("Name is not provided with email address: {}", value),
            )
            .at_line(line),
        );
    } else if name.contains(',') && !is_quoted(name) {
        result.push(
            ValidationIssue::new(
                "email-unquoted-comma",
                ViolationKind::MalformedTrailer,
                format!("Add quotes (\") around name with a comma: {}", name),
            )
            .at_line(line),
        );
    }

    if separator.is_empty() {
        result.push(
            ValidationIssue::new(
                "email-missing-space",
                ViolationKind::MalformedTrailer,
                format!(
                    "There should be a space between the name and email address: {}",
                    value
                ),
            )
            .at_line(line),
        );
    }

    if address.contains(' ') {
        result.push(
            ValidationIssue::new(
                "email-address-space",
                ViolationKind::MalformedTrailer,
                format!("The email address cannot contain a space: {}", address),
            )
            .at_line(line),
        );
    }
}

/// `"..."` with something between the quotes.
fn is_quoted(name: &str) -> bool {
    name.chars().count() > 2 && name.starts_with('"') && name.ends_with('"')
}
