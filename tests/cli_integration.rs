//! End-to-end tests of the `skill-ops` binary.
//!
//! These run the compiled binary with `--cwd` pointed at a temp project and
//! `HOME` pointed at a temp home, verifying output and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Fixture with separate project and home directories.
struct TestEnv {
    project: TempDir,
    home: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    fn project_path(&self) -> &Path {
        self.project.path()
    }

    /// A command with cwd and home wired to this environment.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("skill-ops").unwrap();
        cmd.arg("--cwd").arg(self.project_path());
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd
    }

    fn write_manifest(&self, json: &str) {
        let agent_dir = self.project_path().join(".agent");
        fs::create_dir_all(&agent_dir).unwrap();
        fs::write(agent_dir.join("skill-ops.json"), json).unwrap();
    }

    /// Register a clone under this environment's home-scoped registry.
    fn register_clone(&self, remote: &str, skills: &[&str]) -> PathBuf {
        let clone = self.home.path().join("clones").join(remote);
        fs::create_dir_all(&clone).unwrap();
        for skill in skills {
            fs::create_dir_all(clone.join(skill)).unwrap();
        }

        let registry_dir = self.home.path().join(".skill-ops");
        fs::create_dir_all(&registry_dir).unwrap();
        fs::write(
            registry_dir.join("registry.json"),
            format!(
                r#"{{ "clones": {{ "{}": "{}" }} }}"#,
                remote,
                clone.display()
            ),
        )
        .unwrap();
        clone
    }
}

// =============================================================================
// init
// =============================================================================

#[test]
fn init_creates_manifest_and_reports_its_path() {
    let env = TestEnv::new();

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("skill-ops.json"));

    let manifest = env.project_path().join(".agent/skill-ops.json");
    let contents = fs::read_to_string(manifest).unwrap();
    assert!(contents.contains(r#""type": "local""#));
    assert!(env.project_path().join(".agent/.gitignore").exists());
}

#[test]
fn init_twice_fails_with_exit_code_one() {
    let env = TestEnv::new();

    env.cmd().arg("init").assert().success();
    env.cmd()
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_honors_custom_path() {
    let env = TestEnv::new();

    env.cmd()
        .args(["init", "--path", "custom-agent"])
        .assert()
        .success();
    assert!(env
        .project_path()
        .join("custom-agent/skill-ops.json")
        .exists());
}

// =============================================================================
// hydrate
// =============================================================================

#[test]
fn hydrate_without_manifest_fails_with_one_line_error() {
    let env = TestEnv::new();

    env.cmd()
        .arg("hydrate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("manifest not found"));
}

#[cfg(unix)]
#[test]
fn hydrate_prints_per_namespace_counts() {
    let env = TestEnv::new();
    env.write_manifest(
        r#"{ "schema_version": "1.0",
             "namespaces": { "org": { "path": ".agent/skills/org",
                                      "type": "remote", "remote": "org-skills" } } }"#,
    );
    env.register_clone("org-skills", &["git-helper", "git-stacking"]);

    env.cmd()
        .arg("hydrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("org: 2 skills linked"));
}

#[test]
fn hydrate_warns_about_unregistered_remote_but_succeeds() {
    let env = TestEnv::new();
    env.write_manifest(
        r#"{ "schema_version": "1.0",
             "namespaces": { "org": { "path": ".agent/skills/org",
                                      "type": "remote", "remote": "nowhere" } } }"#,
    );

    env.cmd()
        .arg("hydrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("no local clone found for remote nowhere"));
}

#[cfg(unix)]
#[test]
fn hydrate_quiet_suppresses_output() {
    let env = TestEnv::new();
    env.write_manifest(
        r#"{ "schema_version": "1.0",
             "namespaces": { "repo": { "path": ".agent/skills/repo", "type": "local" } } }"#,
    );

    env.cmd()
        .args(["--quiet", "hydrate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// list / validate
// =============================================================================

#[test]
fn list_reports_no_skills_on_fresh_project() {
    let env = TestEnv::new();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No skills found."));
}

#[test]
fn list_prints_namespaces_with_sorted_skills() {
    let env = TestEnv::new();
    let org = env.project_path().join(".agent/skills/org");
    fs::create_dir_all(org.join("git-stacking")).unwrap();
    fs::create_dir_all(org.join("git-helper")).unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("org\n  - git-helper\n  - git-stacking"));
}

#[test]
fn validate_reports_missing_skills_directory() {
    let env = TestEnv::new();

    env.cmd()
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No .agent/skills directory found"));
}

#[cfg(unix)]
#[test]
fn validate_fails_on_dangling_symlink() {
    let env = TestEnv::new();
    let skills = env.project_path().join(".agent/skills");
    fs::create_dir_all(&skills).unwrap();
    std::os::unix::fs::symlink(env.project_path().join("gone"), skills.join("org")).unwrap();

    env.cmd()
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("broken symlink"));
}

#[test]
fn validate_passes_on_plain_directories() {
    let env = TestEnv::new();
    fs::create_dir_all(env.project_path().join(".agent/skills/repo")).unwrap();

    env.cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All symlinks are valid!"));
}
