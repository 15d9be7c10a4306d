//! Integration tests driving the kubectx binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ABC: &str = r#"apiVersion: v1
kind: Config
clusters:
- name: shared
  cluster:
    server: https://k8s.example.com
contexts:
- name: a
  context:
    cluster: shared
    user: alice
- name: b
  context:
    cluster: shared
    user: bob
    namespace: team-b
- name: c
  context:
    cluster: shared
    user: carol
current-context: b
preferences: {}
users:
- name: alice
  user:
    token: t-a
"#;

fn kubectx() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kubectx"));
    cmd.env_remove("KUBECONFIG").env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config");
    fs::write(&path, contents).unwrap();
    path
}

fn yaml(path: &Path) -> serde_yaml::Value {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help_flag() {
    kubectx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switch Kubernetes Context"))
        .stdout(predicate::str::contains("ls"));
}

#[test]
fn test_switch_by_name_rewrites_only_current_context() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ABC);
    let before = yaml(&path);

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .arg("c")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to context: c"));

    let after = yaml(&path);
    assert_eq!(after["current-context"], serde_yaml::Value::from("c"));
    for key in ["apiVersion", "kind", "clusters", "contexts", "preferences", "users"] {
        assert_eq!(after[key], before[key], "{key} changed");
    }
}

#[test]
fn test_switch_reads_kubeconfig_env() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ABC);

    kubectx()
        .env("KUBECONFIG", &path)
        .arg("a")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to context: a"));

    assert_eq!(yaml(&path)["current-context"], serde_yaml::Value::from("a"));
}

#[test]
fn test_switch_to_unknown_context_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ABC);

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context 'nope' not found"));

    assert_eq!(fs::read_to_string(&path).unwrap(), ABC);
}

#[test]
fn test_ls_marks_current_and_does_not_write() {
    let dir = TempDir::new().unwrap();
    let contents = "contexts:\n- name: a\n  context: {cluster: x, user: y}\ncurrent-context: a\n";
    let path = write_config(&dir, contents);

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .arg("ls")
        .assert()
        .success()
        .stdout("a <- current context\n");

    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn test_ls_lists_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ABC);

    kubectx()
        .args(["ls", "--kubeconfig"])
        .arg(&path)
        .assert()
        .success()
        .stdout("a\nb <- current context\nc\n");
}

#[test]
fn test_ls_without_contexts() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "apiVersion: v1\n");

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contexts found"));
}

#[test]
fn test_current_shows_namespace() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ABC);

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .arg("current")
        .assert()
        .success()
        .stdout("b (namespace: team-b)\n");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist");

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading kubeconfig"));

    assert!(!path.exists());
}

#[test]
fn test_malformed_file_fails_and_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let contents = "contexts: [broken\n";
    let path = write_config(&dir, contents);

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading kubeconfig"));

    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn test_interactive_without_terminal_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ABC);

    kubectx()
        .arg("--kubeconfig")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt selection failed"));

    assert_eq!(fs::read_to_string(&path).unwrap(), ABC);
}
