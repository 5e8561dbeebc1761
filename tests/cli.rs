//! CLI integration tests for sortable-base64

use assert_cmd::Command;
use predicates::prelude::*;

fn sortable_base64() -> Command {
    Command::cargo_bin("sortable-base64").unwrap()
}

#[test]
fn test_help() {
    sortable_base64()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sortable base64"))
        .stdout(predicate::str::contains("--decode"));
}

#[test]
fn test_version() {
    sortable_base64()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_encode_stdin() {
    sortable_base64()
        .write_stdin(vec![0xa5_u8, 0xa5, 0xa5])
        .assert()
        .success()
        .stdout("dPL_");
}

#[test]
fn test_encode_empty() {
    sortable_base64().write_stdin("").assert().success().stdout("");
}

#[test]
fn test_encode_newline() {
    sortable_base64()
        .arg("-n")
        .write_stdin(vec![0x00_u8])
        .assert()
        .success()
        .stdout("..\n");
}

#[test]
fn test_decode_stdin() {
    sortable_base64()
        .arg("--decode")
        .write_stdin("0000\n")
        .assert()
        .success()
        .stdout(vec![0x04_u8, 0x10, 0x41]);
}

#[test]
fn test_decode_dash_reads_stdin() {
    sortable_base64()
        .args(["-d", "-"])
        .write_stdin("dPJ")
        .assert()
        .success()
        .stdout(vec![0xa5_u8, 0xa5]);
}

#[test]
fn test_round_trip_text() {
    let output = sortable_base64()
        .write_stdin("Hello, World!")
        .output()
        .unwrap();
    assert!(output.status.success());

    sortable_base64()
        .arg("-d")
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout("Hello, World!");
}

#[test]
fn test_encode_file() {
    let expected = sortable_base64::encode(include_bytes!("../Cargo.toml"));
    sortable_base64()
        .arg("Cargo.toml")
        .assert()
        .success()
        .stdout(predicate::eq(expected.as_str()));
}

#[test]
fn test_decode_invalid_digit() {
    sortable_base64()
        .arg("-d")
        .write_stdin("dP?L")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not valid sortable base64"))
        .stderr(predicate::str::contains("bad character 0x3f at byte 2"));
}

#[test]
fn test_missing_file() {
    sortable_base64()
        .arg("does-not-exist.bin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open file"));
}

#[test]
fn test_unknown_option() {
    sortable_base64().arg("--bogus").assert().failure();
}
