// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for msgcheck.
//!
//! The policy is fixed; there is no configuration file. The command line
//! may only override where the message retrieval tool lives.

mod schema;

pub use schema::*;
