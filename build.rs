// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the git SHA and commit date shown by `msgcheck --version`.

use vergen::EmitBuilder;

fn main() {
    // Release tarballs have no .git; the version string falls back to the
    // crate version alone.
    if let Err(e) = EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()
    {
        println!("cargo:warning=git metadata unavailable: {}", e);
    }
}
