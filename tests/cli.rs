// Author: Eshan Roy
// SPDX-License-Identifier: MIT

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const URL: &str = "https://github.com/tianocore/tianocore.github.io/wiki/Commit-Message-Format";

const GOOD: &str = "MdePkg: Fix buffer overrun in BaseLib

The loop bound was off by one.

Contributed-under: TianoCore Contribution Agreement 1.0
Signed-off-by: Jane Doe <jane@example.com>
Reviewed-by: \"Smith, John\" <john@example.com>
";

/// A stand-in svnlook that prints `message` for any transaction.
struct FakeSvnLook {
    dir: TempDir,
}

impl FakeSvnLook {
    fn new(message: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("message.txt"), message).unwrap();
        write_script(
            &dir.path().join("svnlook"),
            &format!("cat '{}'\n", dir.path().join("message.txt").display()),
        );
        Self { dir }
    }

    fn failing() -> Self {
        let dir = tempfile::tempdir().unwrap();
        write_script(&dir.path().join("svnlook"), "exit 1\n");
        Self { dir }
    }

    fn program(&self) -> PathBuf {
        self.dir.path().join("svnlook")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("msgcheck").unwrap();
        cmd.arg("--svnlook").arg(self.program());
        cmd
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{}", body)).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[test]
fn accepts_well_formed_message() {
    FakeSvnLook::new(GOOD)
        .cmd()
        .args(["/srv/svn/edk2", "100-1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(contains("The commit message format passed all checks."))
        .stderr(contains(URL));
}

#[test]
fn rejects_and_lists_every_violation() {
    let message = "MdePkg: Fix typo\nbody on line two\nsigned-off-by:Jane<jane@example.com>\n";

    FakeSvnLook::new(message)
        .cmd()
        .args(["/srv/svn/edk2", "100-2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("The commit message format is not valid:"))
        .stderr(contains(" * Missing Contributed-under!"))
        .stderr(contains(" * Missing Signed-off-by!"))
        .stderr(contains(" * Second line of commit message should be empty."))
        .stderr(contains(" * The line before the signature block should be empty"))
        .stderr(contains(
            "   Add empty line before \"signed-off-by:Jane<jane@example.com>\"?",
        ))
        .stderr(contains(URL));
}

#[test]
fn reports_misspelled_signed_off_by() {
    let message = GOOD.replace(
        "Reviewed-by: \"Smith, John\" <john@example.com>",
        "signed off by: Name <email@x.com>",
    );

    FakeSvnLook::new(&message)
        .cmd()
        .args(["/srv/svn/edk2", "100-3"])
        .assert()
        .code(1)
        .stderr(contains(" * 'signed off by' should be 'Signed-off-by'"));
}

#[test]
fn json_report_goes_to_stderr() {
    FakeSvnLook::new("Subject\n")
        .cmd()
        .args(["--format", "json", "/srv/svn/edk2", "100-4"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("\"valid\": false"))
        .stderr(contains("\"code\": \"contributed-under-missing\""));
}

#[test]
fn retrieval_failure_is_not_a_rejection() {
    FakeSvnLook::failing()
        .cmd()
        .args(["/srv/svn/edk2", "100-5"])
        .assert()
        .code(2)
        .stderr(contains("Error: Retrieval error"))
        .stderr(contains("The commit message format").not());
}

#[test]
fn missing_svnlook_is_a_failure() {
    Command::cargo_bin("msgcheck")
        .unwrap()
        .args(["--svnlook", "/nonexistent/svnlook", "/srv/svn/edk2", "100-6"])
        .assert()
        .code(2)
        .stderr(contains("Failed to run /nonexistent/svnlook"));
}

#[test]
fn requires_both_positionals() {
    Command::cargo_bin("msgcheck")
        .unwrap()
        .arg("/srv/svn/edk2")
        .assert()
        .failure()
        .stderr(contains("TXN"));
}
