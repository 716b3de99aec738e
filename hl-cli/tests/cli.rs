use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("samples")
        .join(name)
}

#[test]
fn tokens_simple_format() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("tokens").arg(sample_path("tour.hl"));

    let output = predicate::str::contains(r#"0: comment:"// Reads a file and logs it""#)
        .and(predicate::str::contains(r#"keyword:"if""#))
        .and(predicate::str::contains(r#"expression:"@.arguments/*/filename""#));

    cmd.assert().success().stdout(output);
}

#[test]
fn tokens_json_format() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("tokens")
        .arg(sample_path("tour.hl"))
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""style": "lambda-block""#));
}

#[test]
fn tokens_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("tokens").arg("-").write_stdin("_x:int:5\n");

    cmd.assert().success().stdout(predicate::str::contains(
        r#"0: variable:"_x" plain:":" type:"int" plain:":" value:"5""#,
    ));
}

#[test]
fn tokens_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("tokens")
        .arg(sample_path("tour.hl"))
        .arg("--format")
        .arg("xml");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format 'xml'"));
}

#[test]
fn check_valid_file() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("check").arg(sample_path("crud-read.hl"));
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn check_reports_first_error() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("check").arg(sample_path("broken.hl"));

    cmd.assert().code(1).stdout(predicate::str::contains(
        "broken.hl:4:1: indentation must be a multiple of 3 spaces",
    ));
}

#[test]
fn check_missing_file() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("check").arg(sample_path("does-not-exist.hl"));

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn complete_from_default_vocabulary() {
    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("complete").arg("   io.file.");

    cmd.assert().success().stdout(
        predicate::str::contains("io.file.load")
            .and(predicate::str::contains("io.file.save"))
            .and(predicate::str::contains("log.info").not()),
    );
}

#[test]
fn complete_with_extra_vocabulary_and_column() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.json");
    std::fs::write(&words, r#"["acme.orders.list", "acme.orders.create"]"#).unwrap();

    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("--vocabulary")
        .arg(&words)
        .arg("complete")
        .arg("acme.orders.cr")
        .arg("--column")
        .arg("12");

    cmd.assert().success().stdout(
        predicate::str::contains("acme.orders.list")
            .and(predicate::str::contains("acme.orders.create")),
    );
}

#[test]
fn config_file_disables_completion() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("hl.toml");
    std::fs::write(&config, "[completion]\nenabled = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("--config").arg(&config).arg("complete").arg("if");

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn config_file_changes_expression_type() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("hl.toml");
    std::fs::write(&config, "[lexer]\nexpression_type = \"expr\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("hl");
    cmd.arg("--config")
        .arg(&config)
        .arg("tokens")
        .arg("-")
        .write_stdin("a:expr:@.b c");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"expression:"@.b c""#));
}
