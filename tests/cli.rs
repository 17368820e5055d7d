//! CLI smoke tests over real files

use std::process::Command;

fn write_sample(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("write sample file");
    path
}

#[test]
fn test_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(
        &dir,
        "square.gcode",
        "G90\nG1 X10 E1\nG1 X10 Y10 E2\nG0 X0 Y0\n",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_gcodeview"))
        .arg(&path)
        .output()
        .expect("run gcodeview");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("3 total, 2 extrusion, 1 travel"), "{stdout}");
    assert!(stdout.contains("34.14 total, 20.00 extruded"), "{stdout}");
    assert!(stdout.contains("Layers:    1"), "{stdout}");
}

#[test]
fn test_json_report_keeps_full_precision() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(
        &dir,
        "square.gcode",
        "G1 X10 E1\nG1 X10 Y10 E2\nG0 X0 Y0\n",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_gcodeview"))
        .arg("--json")
        .arg(&path)
        .output()
        .expect("run gcodeview");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse JSON report");
    assert_eq!(report["statistics"]["total_moves"], 3);
    assert_eq!(report["statistics"]["extrusion_distance"], 20.0);
    let total = report["statistics"]["total_distance"].as_f64().unwrap();
    assert!((total - (20.0 + 200.0f64.sqrt())).abs() < 1e-9);
    assert_eq!(report["bounds"]["max_x"], 10.0);
}

#[test]
fn test_diagnostics_listed_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir, "rough.gcode", "G1 X10 E1\nG1 Xbad E2\n");

    let output = Command::new(env!("CARGO_BIN_EXE_gcodeview"))
        .arg(&path)
        .output()
        .expect("run gcodeview");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("line 2: malformed X word"), "{stdout}");
}

#[test]
fn test_missing_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_gcodeview"))
        .arg("/no/such/file.gcode")
        .output()
        .expect("run gcodeview");
    assert!(!output.status.success());
}

#[test]
fn test_no_arguments_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_gcodeview"))
        .output()
        .expect("run gcodeview");
    assert_eq!(output.status.code(), Some(2));
}
