//! End-to-end tests for the `captionkit` binary

use std::io::Write;
use std::process::{Command, Stdio};

fn captionkit() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_captionkit"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_paints_plain_caption() {
    let output = captionkit()
        .args(["--no-color", "is \\\ndelicious"])
        .output()
        .expect("failed to run captionkit");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "is delicious\n");
}

#[test]
fn test_no_line_breaks_keeps_following_runs_at_the_margin() {
    let output = captionkit()
        .args(["--no-color", "--no-line-breaks", "AB\n\\c[14]C"])
        .output()
        .expect("failed to run captionkit");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "AB\nC\n");
}

#[test]
fn test_paints_truecolor_runs() {
    let output = captionkit()
        .args(["\\c[#BB2929]delicious"])
        .output()
        .expect("failed to run captionkit");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\x1b[38;2;187;41;41mdelicious\x1b[0m\n"
    );
}

#[test]
fn test_dump_lists_elements() {
    let output = captionkit()
        .args(["--dump", "A\nB"])
        .output()
        .expect("failed to run captionkit");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("\"A\""));
    assert!(lines[1].ends_with("break"));
}

#[test]
fn test_malformed_markup_fails_with_diagnostic() {
    let output = captionkit()
        .args(["\\c[5text"])
        .output()
        .expect("failed to run captionkit");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unterminated escape sequence"));
    assert!(stderr.contains("^^^^^^^^"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_reads_stdin_and_palette_file() {
    let mut palette = tempfile::NamedTempFile::new().unwrap();
    writeln!(palette, "JASC-PAL\n0100\n2\n255 255 255\n1 2 3").unwrap();

    let mut child = captionkit()
        .args(["--file", "-", "--dump", "--palette"])
        .arg(palette.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run captionkit");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\\c[1]x")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("#010203"));
}

#[test]
fn test_missing_input_is_an_error() {
    let output = captionkit().output().expect("failed to run captionkit");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no caption given"));
}
