//! CLI integration tests for the png command
//!
//! These tests run the plotkit binary inside temporary directories and check
//! exit status, standard streams and the files left behind.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const SCATTER_SCRIPT: &str = r##"
title = "Scatter"

[root]
type = "plot"
width = 200
height = 150

[[root.glyphs]]
type = "scatter"
x = [1, 2, 3, 4, 5]
y = [6, 7, 2, 4, 5]
color = "navy"
size = ${size:8}
"##;

/// Run plotkit in `dir` with a clean environment
fn plotkit(dir: &Path, args: &[&str]) -> Output {
    let config_home = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_plotkit"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("PLOTKIT_CONFIG")
        .env("XDG_CONFIG_HOME", config_home.path())
        .output()
        .expect("Failed to execute plotkit")
}

/// Create a temp dir holding the given scripts
fn with_scripts(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), SCATTER_SCRIPT).unwrap();
    }
    dir
}

fn listing(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn assert_quiet_success(output: &Output) {
    assert!(
        output.status.success(),
        "plotkit failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "unexpected stdout");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

#[test]
fn test_no_script() {
    let dir = tempfile::tempdir().unwrap();
    let output = plotkit(dir.path(), &["png"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("the following required arguments were not provided"));
    assert!(stderr.contains("<DIRECTORY-OR-SCRIPT>..."));
    assert!(stderr.contains("Usage: plotkit png"));
    assert!(listing(dir.path()).is_empty());
}

#[test]
fn test_basic_script() {
    let dir = with_scripts(&["scatter.toml"]);
    let output = plotkit(dir.path(), &["png", "scatter.toml"]);

    assert_quiet_success(&output);
    assert_eq!(listing(dir.path()), set(&["scatter.png", "scatter.toml"]));

    let image = image::open(dir.path().join("scatter.png")).unwrap();
    assert_eq!((image.width(), image.height()), (200, 150));
}

#[test]
fn test_basic_script_with_output_after() {
    let dir = with_scripts(&["scatter.toml"]);
    let output = plotkit(dir.path(), &["png", "scatter.toml", "--output", "foo.png"]);

    assert_quiet_success(&output);
    assert_eq!(listing(dir.path()), set(&["foo.png", "scatter.toml"]));
}

#[test]
fn test_basic_script_with_output_before() {
    let dir = with_scripts(&["scatter.toml"]);
    let output = plotkit(dir.path(), &["png", "--output", "foo.png", "scatter.toml"]);

    assert_quiet_success(&output);
    assert_eq!(listing(dir.path()), set(&["foo.png", "scatter.toml"]));
}

#[test]
fn test_basic_script_with_output_stdout() {
    let dir = with_scripts(&["scatter.toml"]);
    let output = plotkit(dir.path(), &["png", "--output", "-", "scatter.toml"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(output.stdout.len() > PNG_SIGNATURE.len());
    assert!(output.stdout.starts_with(&PNG_SIGNATURE));
    assert_eq!(listing(dir.path()), set(&["scatter.toml"]));
}

#[test]
fn test_basic_script_with_multiple_png_plots() {
    let dir = with_scripts(&["scatter1.toml", "scatter2.toml", "scatter3.toml"]);
    let output = plotkit(
        dir.path(),
        &["png", "scatter1.toml", "scatter2.toml", "scatter3.toml"],
    );

    assert_quiet_success(&output);
    assert_eq!(
        listing(dir.path()),
        set(&[
            "scatter1.png",
            "scatter2.png",
            "scatter3.png",
            "scatter1.toml",
            "scatter2.toml",
            "scatter3.toml",
        ])
    );
}

#[test]
fn test_width_height_override() {
    let dir = with_scripts(&["scatter.toml"]);
    let output = plotkit(
        dir.path(),
        &["png", "scatter.toml", "--width", "120", "--height", "90"],
    );

    assert_quiet_success(&output);
    let image = image::open(dir.path().join("scatter.png")).unwrap();
    assert_eq!((image.width(), image.height()), (120, 90));
}

#[test]
fn test_directory_application() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("app")).unwrap();
    fs::write(dir.path().join("app/main.toml"), SCATTER_SCRIPT).unwrap();

    let output = plotkit(dir.path(), &["png", "app", "--args", "size=12"]);

    assert_quiet_success(&output);
    assert_eq!(listing(dir.path()), set(&["app", "app.png"]));
}

#[test]
fn test_too_many_outputs_fails() {
    let dir = with_scripts(&["scatter.toml"]);
    let output = plotkit(dir.path(), &["png", "scatter.toml", "-o", "a.png", "-o", "b.png"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--output/-o was given too many times (2 times for 1 applications)"));
    assert_eq!(listing(dir.path()), set(&["scatter.toml"]));
}

#[test]
fn test_missing_script_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = plotkit(dir.path(), &["png", "nope.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.toml"));
}

#[test]
fn test_svg_to_stdout() {
    let dir = with_scripts(&["scatter.toml"]);
    let output = plotkit(dir.path(), &["svg", "-o", "-", "scatter.toml"]);

    assert!(output.status.success());
    let svg = String::from_utf8(output.stdout).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<title>Scatter</title>"));
}

#[test]
fn test_output_over_input_fails() {
    let dir = with_scripts(&["scatter1.toml", "scatter2.toml"]);
    let output = plotkit(
        dir.path(),
        &["png", "scatter1.toml", "scatter2.toml", "-o", "./scatter2.toml"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("would overwrite an input"));
    assert_eq!(listing(dir.path()), set(&["scatter1.toml", "scatter2.toml"]));
    assert_eq!(
        fs::read_to_string(dir.path().join("scatter2.toml")).unwrap(),
        SCATTER_SCRIPT
    );
}
