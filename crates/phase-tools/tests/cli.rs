// File: crates/phase-tools/tests/cli.rs
// Purpose: Exit codes and stderr of the built binaries for usage, data, config and shape failures.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const FAKE_DIAGRAM: &str = env!("CARGO_BIN_EXE_fake-diagram");
const PHASE_DIAGRAM: &str = env!("CARGO_BIN_EXE_phase-diagram");

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(bin: &str, args: &[&str], cwd: &Path) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("PHASE_LOG", "off")
        .output()
        .expect("spawn binary")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn fake_diagram_without_args_prints_usage() {
    let out = run(FAKE_DIAGRAM, &[], &scratch("fake_usage"));
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Usage: fake-diagram <num_phases>"), "stderr: {}", stderr(&out));
}

#[test]
fn fake_diagram_rejects_zero_phases() {
    let out = run(FAKE_DIAGRAM, &["0"], &scratch("fake_zero"));
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("positive integer"));
}

#[test]
fn fake_diagram_writes_table() {
    let dir = scratch("fake_ok");
    let out = run(FAKE_DIAGRAM, &["3"], &dir);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let data = phase_core::read_dataset(dir.join("fake_diagram_with_3_phases.out")).expect("read table");
    assert_eq!(data.len(), 301 * 101);
}

#[test]
fn phase_diagram_without_args_prints_usage() {
    let out = run(PHASE_DIAGRAM, &[], &scratch("builder_usage"));
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Usage: phase-diagram <input_file> [output_file]"), "stderr: {}", stderr(&out));
}

fn run_builder_on(name: &str, table: &str) -> Output {
    let dir = scratch(name);
    std::fs::write(dir.join("input.out"), table).unwrap();
    run(PHASE_DIAGRAM, &["input.out", "diagram.png"], &dir)
}

fn assert_failed_with(out: &Output, needle: &str) {
    assert!(!out.status.success());
    assert_ne!(out.status.code(), Some(2), "not a usage failure");
    assert!(stderr(out).contains(needle), "stderr: {}", stderr(out));
}

#[test]
fn phase_diagram_all_comment_input_is_data_error() {
    let out = run_builder_on("builder_data", "# T P phase G\n\n   # nothing here\n");
    assert_failed_with(&out, "no phase data found");
}

#[test]
fn phase_diagram_too_many_phases_is_config_error() {
    let table: String = (0..11).map(|i| format!("0.0 {}.0 p{:02} -1.0\n", i, i)).collect();
    let out = run_builder_on("builder_config", &table);
    assert_failed_with(&out, "config error");
}

#[test]
fn phase_diagram_ragged_bands_is_shape_error() {
    let out = run_builder_on("builder_shape", "0 0 A -1\n0 1 A -1\n0 2 B -1\n10 0 A -1\n10 1 B -1\n");
    assert_failed_with(&out, "shape error");
}

#[test]
fn phase_diagram_writes_requested_format() {
    let dir = scratch("builder_ok");
    std::fs::write(dir.join("input.out"), "0 0 A -1\n0 1 B -1\n10 0 A -1\n10 1 B -1\n").unwrap();

    let out = run(PHASE_DIAGRAM, &["input.out", "diagram.png"], &dir);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(std::fs::read(dir.join("diagram.png")).unwrap().starts_with(&[137, 80, 78, 71]));

    let out = run(PHASE_DIAGRAM, &["input.out"], &dir);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(std::fs::read(dir.join("AGL_pT_phase_diagram.pdf")).unwrap().starts_with(b"%PDF"));
}
