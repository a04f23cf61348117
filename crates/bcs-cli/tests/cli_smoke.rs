use std::path::PathBuf;
use std::process::Command;

fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(relative)
}

#[test]
fn synth_exports_the_fixture_case() {
    let out = tempfile::tempdir().expect("tmp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_bcs-cli"))
        .args(["--log-level", "warn", "synth", "--case"])
        .arg(fixture("fixtures/cases/two_region.yaml"))
        .arg("--out")
        .arg(out.path())
        .output()
        .expect("run bcs-cli synth");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let digest = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(digest.trim().len(), 64);
    assert!(out.path().join("manifest.json").is_file());
    assert!(out.path().join("fluid/0/U.json").is_file());
}

#[test]
fn check_reports_a_complete_case() {
    let output = Command::new(env!("CARGO_BIN_EXE_bcs-cli"))
        .args(["check", "--case"])
        .arg(fixture("fixtures/cases/two_region.yaml"))
        .output()
        .expect("run bcs-cli check");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(summary["complete"], true);
    assert_eq!(summary["regions"][0]["region"], "fluid");
}
