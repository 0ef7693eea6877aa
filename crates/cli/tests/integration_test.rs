use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run_leeway(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-p", "leeway-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_backend_audit_writes_report() {
    let tree = TempDir::new().unwrap();
    fs::create_dir_all(tree.path().join("models")).unwrap();
    fs::write(tree.path().join("requirements.txt"), "fastapi\nnumpy==1.26\n").unwrap();
    fs::write(
        tree.path().join("main.py"),
        "# LEEWAY HEADER — DO NOT REMOVE\nprint('hi')\n",
    )
    .unwrap();

    let output = run_leeway(&["backend", tree.path().to_str().unwrap()]);
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report_path = tree
        .path()
        .join("run")
        .join("leeway_audit_report.json");
    assert!(report_path.exists(), "report file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("leeway_audit_report.json"),
        "stdout should print the report path: {stdout}"
    );

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["dirs"]["models"], true);
    assert_eq!(report["dirs"]["routes"], false);
    assert_eq!(report["headers_missing"], serde_json::json!([]));
    assert!(report["requirements"]["present"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p == "fastapi"));
    assert!(report["ffmpeg_available"].is_boolean());
}

#[test]
fn test_frontend_audit_finds_duplicates_and_assets() {
    let tree = TempDir::new().unwrap();
    fs::write(
        tree.path().join("index.html"),
        r#"<!-- LEEWAY HEADER --><div id="mic"></div><div id="mic"></div>"#,
    )
    .unwrap();
    fs::create_dir_all(tree.path().join("public").join("image")).unwrap();
    fs::write(
        tree.path()
            .join("public")
            .join("image")
            .join("macmillionmic.png"),
        "png",
    )
    .unwrap();

    let output = run_leeway(&["frontend", tree.path().to_str().unwrap(), "--verbose"]);
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report_path = tree
        .path()
        .join("run")
        .join("leeway_frontend_audit_report.json");
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(report["duplicate_ids"]["index.html"]["mic"], 2);
    assert_eq!(report["required_assets"]["image/macmillionmic.png"], true);
    assert_eq!(report["required_assets"]["image/macmillionmic2.png"], false);
    assert_eq!(report["headers_missing"], serde_json::json!([]));
}

#[test]
fn test_output_flag_overrides_report_path() {
    let tree = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let custom = out_dir.path().join("nested").join("custom_report.json");

    let output = run_leeway(&[
        "frontend",
        tree.path().to_str().unwrap(),
        "--output",
        custom.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(custom.exists(), "custom report path was not created");
}
