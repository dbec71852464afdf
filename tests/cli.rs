use assert_cmd::Command;
use predicates::prelude::*;

const FIXED: &str =
    "7196f3f4a1a487cc79c2e51c49d1f5e0f3e9a4798a9750b9d687a585edd947759aa64c0a2953d737";

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("saltpass"))
}

#[test]
fn demo_prints_encoding_and_fixed_match() {
    let output = bin().assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 80);
    assert!(lines[0].chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(lines[1], "true");
}

#[test]
fn encode_then_verify_roundtrip() {
    // encode
    let output = bin()
        .arg("encode")
        .write_stdin("s3cret\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let encoded = String::from_utf8(output).unwrap().trim().to_string();
    assert_eq!(encoded.len(), 80);

    // verify
    bin()
        .arg("verify")
        .arg(&encoded)
        .write_stdin("s3cret\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));

    // wrong password
    bin()
        .arg("verify")
        .arg(&encoded)
        .arg("--password")
        .arg("other")
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
}

#[test]
fn verify_fixed_credential_with_flag() {
    bin()
        .arg("verify")
        .arg(FIXED)
        .arg("--password")
        .arg("hello")
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));
}

#[test]
fn verify_malformed_credential_fails() {
    bin()
        .arg("verify")
        .arg("abc")
        .arg("--password")
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot verify credential"));
}

#[test]
fn encode_empty_stdin_fails() {
    bin()
        .arg("encode")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("password cannot be empty"));
}

#[test]
fn info_shows_salt_and_checksum() {
    bin()
        .arg("info")
        .arg(FIXED)
        .assert()
        .success()
        .stdout(predicate::str::contains("7196f3f4a1a487cc"))
        .stdout(predicate::str::contains(
            "79c2e51c49d1f5e0f3e9a4798a9750b9d687a585edd947759aa64c0a2953d737",
        ))
        .stdout(predicate::str::contains("1024"));
}

#[test]
fn info_rejects_short_credential() {
    bin()
        .arg("info")
        .arg("aa")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid credential"));
}
