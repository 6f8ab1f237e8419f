//! End-to-end tests for the stubgen binary.

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// A stub directory with one template seeded.
fn stub_dir(name: &str, content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(name), content).unwrap();
    dir
}

#[test]
fn help_lists_the_subcommands() {
    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("save"))
        .stdout(predicate::str::contains("base-dir"));
}

#[test]
fn version_flag_reports_the_crate_version() {
    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn render_substitutes_and_prints_to_stdout() {
    let stubs = stub_dir("greeting.txt", "Hello $NAME$!\nYour email is: {{EMAIL}}");

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .args(["render", "greeting.txt"])
        .args(["--set", "name=John Doe"])
        .args(["--set", "email=john@example.com"])
        .assert()
        .success()
        .stdout("Hello John Doe!\nYour email is: john@example.com\n");
}

#[test]
fn render_strips_marked_sections() {
    let stubs = stub_dir(
        "sec.txt",
        "Main.\n# SECTION:opt\nOptional $V$.\n# END_SECTION:opt\nEnd.",
    );

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .args(["render", "sec.txt", "--remove-section", "opt", "--set", "v=X"])
        .assert()
        .success()
        .stdout("Main.\nEnd.\n");
}

#[test]
fn missing_template_exits_3_and_names_the_path() {
    let stubs = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .args(["render", "nope.txt"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn malformed_set_entry_exits_2() {
    let stubs = stub_dir("t.txt", "x");

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .args(["render", "t.txt", "--set", "NOEQUALS"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn lossy_render_succeeds_with_an_inline_error_string() {
    let stubs = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .args(["render", "nope.txt", "--lossy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("failed to render"));
}

#[test]
fn save_creates_the_directory_tree_and_writes_the_file() {
    let stubs = stub_dir("t.txt", "v=$V$");
    let out = TempDir::new().unwrap();
    let out_dir = out.path().join("nested/deep");

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .args(["save", "t.txt"])
        .args(["--out-dir", out_dir.to_str().unwrap()])
        .args(["--filename", "out.txt"])
        .args(["--set", "v=1"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(out_dir.join("out.txt")).unwrap(),
        "v=1"
    );
}

#[test]
fn save_overwrites_on_reinvocation() {
    let stubs = stub_dir("t.txt", "v=$V$");
    let out = TempDir::new().unwrap();

    for value in ["old", "new"] {
        let mut cmd = cargo::cargo_bin_cmd!("stubgen");
        cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
            .args(["save", "t.txt"])
            .args(["--out-dir", out.path().to_str().unwrap()])
            .args(["--filename", "out.txt"])
            .args(["--set", &format!("v={value}")])
            .assert()
            .success();
    }

    assert_eq!(
        std::fs::read_to_string(out.path().join("out.txt")).unwrap(),
        "v=new"
    );
}

#[test]
fn base_dir_command_prints_the_flag_value() {
    let stubs = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .arg("base-dir")
        .assert()
        .success()
        .stdout(predicate::str::contains(stubs.path().to_str().unwrap()));
}

#[test]
fn json_output_format_wraps_the_rendered_text() {
    let stubs = stub_dir("t.txt", "hi $WHO$");

    let mut cmd = cargo::cargo_bin_cmd!("stubgen");
    cmd.args(["--base-dir", stubs.path().to_str().unwrap()])
        .args(["--output-format", "json"])
        .args(["render", "t.txt", "--set", "who=there"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""text":"hi there""#));
}
