// Shared helpers for CLI integration tests
//
// Each command gets HOME pointed at its own temp dir, so tests never share an rc file.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Empty HOME with no rc file
pub fn empty_home() -> TempDir {
    TempDir::new().unwrap()
}

/// HOME containing `.etiqueta/rc` with the given content
pub fn home_with_rc(rc: &str) -> TempDir {
    let temp_dir = empty_home();
    let config_dir = temp_dir.path().join(".etiqueta");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), rc).unwrap();
    temp_dir
}

pub fn etiqueta_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("etiqueta").unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run to success and return stdout
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}
