//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_variant").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("KODEGEN_VARIANT_CREDENTIALS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn resolves_dev_debug_as_text() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--flavor", "dev", "--build-type", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devDebug"))
        .stdout(predicate::str::contains("com.udharoo.dev"))
        .stdout(predicate::str::contains("androiddebugkey"));
}

#[test]
fn release_without_credentials_warns_about_fallback() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-f", "prod", "-b", "release", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"origin\": \"DefaultDebug\""))
        .stdout(predicate::str::contains(".android/debug.keystore"))
        .stderr(predicate::str::contains("falling back to the debug keystore"));
}

#[test]
fn release_with_credentials_file() {
    let home = TempDir::new().unwrap();
    let key_file = home.path().join("key.properties");
    std::fs::write(
        &key_file,
        "keyAlias=relkey\nkeyPassword=p1\nstoreFile=/keys/rel.jks\nstorePassword=p2\n",
    )
    .unwrap();

    cmd(&home)
        .args(["-f", "staging", "-b", "release", "--format", "json"])
        .arg("--credentials")
        .arg(&key_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alias\": \"relkey\""))
        .stdout(predicate::str::contains("\"origin\": \"ExternalFile\""));
}

#[test]
fn malformed_credentials_fail() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("key.properties"), "foo=bar\n").unwrap();

    cmd(&home)
        .args(["-f", "dev", "-b", "release"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unrecognized key 'foo'"));
}

#[test]
fn unknown_flavor_fails_with_hint() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-f", "qa", "-b", "debug"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown flavor 'qa'"))
        .stderr(predicate::str::contains("dev, staging, prod"));
}

#[test]
fn all_lists_nine_variants() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("devDebug"))
        .stdout(predicate::str::contains("stagingProfile"))
        .stdout(predicate::str::contains("prodRelease"));
}

#[test]
fn project_settings_file_changes_base_id() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("variant.toml");
    std::fs::write(
        &project,
        "[project]\napplication_id = \"org.example.ledger\"\nversion_name = \"3.0.0\"\n",
    )
    .unwrap();

    cmd(&home)
        .args(["-f", "staging", "-b", "debug", "--project"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("org.example.ledger.staging"))
        .stdout(predicate::str::contains("3.0.0-staging"));
}

#[test]
fn missing_build_type_is_rejected() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--flavor", "dev"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--build-type"));
}
