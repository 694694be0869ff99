use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"))
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn parity_encode_frames_even_msb() {
    let out = run(env!("CARGO_BIN_EXE_parity-encode"), &["--data", "1011001"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("With parity:      01011001"));
}

#[test]
fn parity_check_exit_status_follows_parity() {
    let ok = run(
        env!("CARGO_BIN_EXE_parity-check"),
        &["--received", "11011001", "--mode", "odd"],
    );
    assert!(ok.status.success());

    let bad = run(env!("CARGO_BIN_EXE_parity-check"), &["--received", "1101"]);
    assert_eq!(bad.status.code(), Some(1));
}

#[test]
fn parity_simulate_reports_detected_flip_as_json() {
    let out = run(
        env!("CARGO_BIN_EXE_parity-simulate"),
        &["--data", "1001101", "--mode", "odd", "--flip", "3", "--json"],
    );
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["received"], "11011101");
    assert_eq!(json["verdict"], "detected");
}

#[test]
fn parity_table_ascii_sweep_and_demo_run() {
    let table = run(env!("CARGO_BIN_EXE_parity-table"), &["--json"]);
    assert!(table.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&table.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(7));

    let ascii = run(env!("CARGO_BIN_EXE_parity-ascii"), &["HI"]);
    assert!(stdout(&ascii).contains("01001000"));

    let sweep = run(env!("CARGO_BIN_EXE_parity-sweep"), &["--data", "10110"]);
    assert!(stdout(&sweep).contains("2 flip(s) over 6 bits: 15 patterns"));

    let demo = run(env!("CARGO_BIN_EXE_parity-demo"), &[]);
    assert!(demo.status.success());
    assert!(stdout(&demo).contains("Two errors:       00000101"));
}
