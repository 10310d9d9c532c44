// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Trailer grammar: `Tag: Name <address>` lines such as `Signed-off-by`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::commit::CommitMessage;

use super::email::check_email;
use super::validator::{ValidationIssue, ValidationResult, ViolationKind};

/// Trailer kinds checked when present, in report order.
pub const MISC_SIG_TYPES: &[&str] = &["Reviewed", "Reported", "Tested", "Suggested", "Acked", "Cc"];

lazy_static! {
    /// The mandatory `Signed-off-by` trailer.
    pub static ref SIGNED_OFF_BY: SigSpec = SigSpec::new("Signed-off").unwrap();

    /// Optional trailers, built once from [`MISC_SIG_TYPES`].
    pub static ref MISC_SIGS: Vec<SigSpec> = MISC_SIG_TYPES
        .iter()
        .map(|sig| SigSpec::new(sig).unwrap())
        .collect();
}

/// A recognised trailer kind and the pattern that finds it.
#[derive(Debug, Clone)]
pub struct SigSpec {
    canonical: String,
    regex: Regex,
}

impl SigSpec {
    /// Build a spec. Anything other than `Cc` gets a `-by` suffix unless it
    /// already has one.
    pub fn new(sig: &str) -> Result<Self, regex::Error> {
        let canonical = if sig.ends_with("-by") || sig == "Cc" {
            sig.to_string()
        } else {
            format!("{}-by", sig)
        };

        // Dashes may be written as any run of dashes or blanks.
        let tag = canonical
            .split('-')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"(?:-|[^\S\n])+");

        let regex = Regex::new(&format!(
            r"(?im)^(?P<tag>{})([^\S\n]*):([^\S\n]*)(?P<value>\S.*?)[^\S\n]*$",
            tag
        ))?;

        Ok(Self { canonical, regex })
    }

    /// The exact spelling every occurrence must use.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// All occurrences in document order, however they are spelled.
    pub fn find_all(&self, text: &str) -> Vec<TrailerMatch> {
        self.regex
            .captures_iter(text)
            .map(|caps| {
                let start = caps.get(0).map_or(0, |m| m.start());
                TrailerMatch {
                    tag: caps.name("tag").map_or("", |m| m.as_str()).to_string(),
                    before_colon: caps.get(2).map_or("", |m| m.as_str()).to_string(),
                    after_colon: caps.get(3).map_or("", |m| m.as_str()).to_string(),
                    value: caps.name("value").map_or("", |m| m.as_str()).to_string(),
                    line: text[..start].matches('\n').count() + 1,
                }
            })
            .collect()
    }
}

/// One trailer occurrence, kept even when malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerMatch {
    /// Tag as written.
    pub tag: String,
    /// Whitespace between the tag and the colon.
    pub before_colon: String,
    /// Whitespace between the colon and the value.
    pub after_colon: String,
    /// Everything after the whitespace, right-trimmed.
    pub value: String,
    /// 1-based line number.
    pub line: usize,
}

/// Find every occurrence of `spec`, recording spelling, spacing and email
/// defects. Malformed occurrences are still returned.
pub fn find_sigs(
    spec: &SigSpec,
    message: &CommitMessage,
    result: &mut ValidationResult,
) -> Vec<TrailerMatch> {
    let sig = spec.canonical();
    let sigs = spec.find_all(message.text());
    tracing::debug!(sig, count = sigs.len(), "trailer scan");

    for s in sigs.iter().filter(|s| s.tag != sig) {
        result.push(
            ValidationIssue::new(
                "trailer-case",
                ViolationKind::MalformedTrailer,
                format!("'{}' should be '{}'", s.tag, sig),
            )
            .at_line(s.line),
        );
    }

    for s in &sigs {
        if !s.before_colon.is_empty() {
            result.push(
                ValidationIssue::new(
                    "trailer-space-before-colon",
                    ViolationKind::MalformedTrailer,
                    format!("There should be no spaces between {} and the ':'", sig),
                )
                .at_line(s.line),
            );
        }
        if s.after_colon != " " {
            result.push(
                ValidationIssue::new(
                    "trailer-space-after-colon",
                    ViolationKind::MalformedTrailer,
                    format!("There should be a space after '{}:'", sig),
                )
                .at_line(s.line),
            );
        }

        check_email(&s.value, s.line, result);
    }

    sigs
}
