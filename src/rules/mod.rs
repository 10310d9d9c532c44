// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message rules.
//!
//! [`MessageValidator`] runs the contribution checks in a fixed order:
//! the Contributed-under line, the mandatory `Signed-off-by` trailer, the
//! optional trailers, and finally the overall shape of the message.

mod email;
mod engine;
mod shape;
mod trailer;
mod validator;

pub use email::check_email;
pub use engine::MessageValidator;
pub use shape::{check_overall_format, is_sig_block_line};
pub use trailer::{find_sigs, SigSpec, TrailerMatch, MISC_SIGS, MISC_SIG_TYPES, SIGNED_OFF_BY};
pub use validator::{
    ValidationIssue, ValidationResult, ViolationKind, ACCEPT_LINE, REJECT_HEADER,
};
