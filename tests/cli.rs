//
//  azure-devops-rest
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ado(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ado").unwrap();
    cmd.env("ADO_CONFIG_DIR", config_dir.path())
        .env_remove("ADO_ORGANIZATION")
        .env_remove("ADO_PROJECT")
        .env_remove("ADO_PAT")
        .env_remove("AZURE_DEVOPS_EXT_PAT");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    ado(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("repo"))
        .stdout(predicate::str::contains("release"))
        .stdout(predicate::str::contains("api"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    ado(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    ado(&dir)
        .args(["config", "set", "pager", "less"])
        .assert()
        .success();

    ado(&dir)
        .args(["config", "get", "pager"])
        .assert()
        .success()
        .stdout("less\n");

    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    ado(&dir)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_config_rejects_bad_output_format() {
    let dir = TempDir::new().unwrap();
    ado(&dir)
        .args(["config", "set", "output", "yaml"])
        .assert()
        .failure();
}

#[test]
fn test_repo_list_without_organization_fails() {
    let dir = TempDir::new().unwrap();
    ado(&dir)
        .args(["repo", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No organization configured"));
}
