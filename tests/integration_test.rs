use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time must be after UNIX_EPOCH")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "md2docx_cli_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_single_file_default_output() {
    let dir = temp_dir("single");
    let input = dir.join("notes.md");
    std::fs::write(&input, "# Notes\n\n- one\n- two\n").expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(&input)
        .output()
        .expect("Failed to execute command");

    let docx = dir.join("notes.docx");
    let exists = docx.is_file();
    let _ = std::fs::remove_dir_all(&dir);

    assert!(output.status.success());
    assert!(exists);
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = temp_dir("missing");
    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(dir.join("nope.md"))
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_dir_all(&dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"));
}

#[test]
fn test_cli_directory_mode_reports_summary() {
    let dir = temp_dir("batch");
    std::fs::write(dir.join("a.md"), "# A\n").expect("write a");
    std::fs::write(dir.join("b.MD"), "text\n").expect("write b");
    std::fs::write(dir.join("skip.txt"), "ignored\n").expect("write txt");

    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    let out_dir = dir.join("Word Documents");
    let a = out_dir.join("a.docx").is_file();
    let b = out_dir.join("b.docx").is_file();
    let skipped = !out_dir.join("skip.docx").exists();
    let _ = std::fs::remove_dir_all(&dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successful: 2/2"));
    assert!(stdout.contains("Failed: 0/2"));
    assert!(a && b && skipped);
}
