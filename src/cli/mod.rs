// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for msgcheck.
//!
//! This module handles command-line argument parsing and running the check.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::{run, run_with_source, Verdict};
