mod common;

use common::TestRepo;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(repo: &TestRepo, config: &NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-release-date"))
        .arg("--repo")
        .arg(repo.dir.path())
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute git-release-date")
}

/// master: c1 (1.0) <- c2 <- c3, develop at c3
fn tagged_repo() -> (TestRepo, [git2::Oid; 3]) {
    let t = TestRepo::new();
    let c1 = t.commit_at("master", &[], 1_000, "initial");
    let c2 = t.commit_at("master", &[c1], 2_000, "second");
    let c3 = t.commit_at("master", &[c2], 3_000, "third");
    t.set_branch("develop", c3);
    t.lightweight_tag("1.0", c1);
    (t, [c1, c2, c3])
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_git-release-date"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-release-date"));
    assert!(stdout.contains("--patch"));
}

#[test]
fn test_toml_output_names_origin() {
    let (t, [c1, _, c3]) = tagged_repo();
    let config = config_file("");

    let output = run(&t, &config, &["master", "--patch", "2", "--format", "toml"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&format!("commit_id = \"{}\"", c3)));
    assert!(stdout.contains(&format!("original_commit_id = \"{}\"", c1)));
    assert!(stdout.contains("[version_point]"));
}

#[test]
fn test_zero_patch_output() {
    let (t, [_, _, c3]) = tagged_repo();
    let config = config_file("");

    let output = run(&t, &config, &["master", "--patch", "0", "--format", "toml"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&format!("original_commit_id = \"{}\"", c3)));
    assert!(!stdout.contains("[version_point]"));
}

#[test]
fn test_text_output() {
    let (t, [c1, _, _]) = tagged_repo();
    let config = config_file("");

    let output = run(&t, &config, &["master"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Release date"));
    assert!(stdout.contains(&c1.to_string()));
    assert!(stdout.contains("1.0"));
}

#[test]
fn test_main_branch_from_config() {
    let (t, [_, _, c3]) = tagged_repo();
    let config = config_file("main_branch = \"main\"\n");

    let output = run(&t, &config, &[&c3.to_string()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Branch not found: main"));
}

#[test]
fn test_main_branch_flag_overrides_config() {
    let (t, [c1, _, _]) = tagged_repo();
    let config = config_file("main_branch = \"main\"\n");

    let output = run(
        &t,
        &config,
        &["master", "--main-branch", "master", "--format", "toml"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&format!("original_commit_id = \"{}\"", c1)));
}

#[test]
fn test_trunk_scheme_from_config() {
    let (t, [_, _, c3]) = tagged_repo();
    let config = config_file("scheme = \"trunk\"\n");

    let output = run(&t, &config, &["master", "--format", "toml"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&format!("original_commit_id = \"{}\"", c3)));
}

#[test]
fn test_unknown_commit_fails() {
    let (t, _) = tagged_repo();
    let config = config_file("");

    let output = run(&t, &config, &["does-not-exist"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("ERROR:"));
}
