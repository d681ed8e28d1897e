use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const PROJECT: &str = "test-app";

fn bundled_templates() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

fn create_vite(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-vite").unwrap();
    cmd.current_dir(cwd)
        .env_remove("npm_config_user_agent")
        .env_remove("CREATE_VITE_TEMPLATE_DIR")
        .env("NO_COLOR", "1")
        .arg("--template-dir")
        .arg(bundled_templates());
    cmd
}

fn read_manifest(root: &Path) -> serde_json::Value {
    let content = fs::read_to_string(root.join("package.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_help_prints_usage() {
    let dir = tempdir().unwrap();

    for flag in ["--help", "-h"] {
        create_vite(dir.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Usage: create-vite [OPTION]... [DIRECTORY]",
            ))
            .stdout(predicate::str::contains("vue-ts"));
    }

    // help has no side effects
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_scaffolds_vue_ts() {
    let dir = tempdir().unwrap();

    create_vite(dir.path())
        .args([PROJECT, "--template", "vue-ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd test-app"))
        .stdout(predicate::str::contains("npm install"))
        .stdout(predicate::str::contains("npm run dev"));

    let root = dir.path().join(PROJECT);
    assert_eq!(read_manifest(&root)["name"], PROJECT);
    assert!(root.join(".gitignore").is_file());
    assert!(!root.join("_gitignore").exists());
    assert!(root.join("src/App.vue").is_file());
    assert!(root.join("vite.config.ts").is_file());
}

#[test]
fn test_react_swc_ts_is_patched() {
    let dir = tempdir().unwrap();

    create_vite(dir.path())
        .args([PROJECT, "-t", "react-swc-ts"])
        .assert()
        .success();

    let root = dir.path().join(PROJECT);
    let manifest = read_manifest(&root);
    let dev = &manifest["devDependencies"];
    assert_eq!(dev["@vitejs/plugin-react-swc"], "^3.5.0");
    assert!(dev.get("@vitejs/plugin-react").is_none());

    let config = fs::read_to_string(root.join("vite.config.ts")).unwrap();
    assert!(config.contains("import react from '@vitejs/plugin-react-swc'"));
}

#[test]
fn test_overwrite_yes_replaces_existing_files() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(PROJECT);
    fs::create_dir(&root).unwrap();
    fs::write(root.join("package.json"), r#"{ "foo": "bar" }"#).unwrap();
    fs::write(root.join("leftover.txt"), "old").unwrap();

    create_vite(dir.path())
        .args([PROJECT, "--template", "vanilla", "--overwrite", "yes"])
        .assert()
        .success();

    let manifest = read_manifest(&root);
    assert_eq!(manifest["name"], PROJECT);
    assert!(manifest.get("foo").is_none());
    assert!(!root.join("leftover.txt").exists());
}

#[test]
fn test_overwrite_no_cancels_without_changes() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(PROJECT);
    fs::create_dir(&root).unwrap();
    fs::write(root.join("package.json"), r#"{ "foo": "bar" }"#).unwrap();

    create_vite(dir.path())
        .args([PROJECT, "--template", "vanilla", "--overwrite", "no"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Operation cancelled"));

    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        r#"{ "foo": "bar" }"#
    );
    assert_eq!(fs::read_dir(&root).unwrap().count(), 1);
}

#[test]
fn test_yarn_next_steps() {
    let dir = tempdir().unwrap();

    create_vite(dir.path())
        .env("npm_config_user_agent", "yarn/1.22.19 npm/? node/v20.11.0 linux x64")
        .args([PROJECT, "--template", "react"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  yarn\n"))
        .stdout(predicate::str::contains("yarn dev"))
        .stdout(predicate::str::contains("npm install").not());
}

#[test]
fn test_missing_template_tree_fails() {
    let dir = tempdir().unwrap();

    // lit is in the catalog but not bundled
    create_vite(dir.path())
        .args([PROJECT, "--template", "lit"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("template-lit"));
}
