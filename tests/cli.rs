//! End-to-end tests driving the sortplot binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

/// Fresh working directory for one test case.
fn case_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/cli").join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_sortplot(cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sortplot"))
        .current_dir(cwd)
        .output()
        .expect("failed to spawn sortplot")
}

#[test]
fn well_formed_input_saves_chart_and_confirms() {
    let dir = case_dir("well_formed");
    std::fs::write(dir.join("results.csv"), "s,time_ms\n10,5.2\n20,4.8\n30,6.1\n").unwrap();

    let out = run_sortplot(&dir);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), "Saved hybrid_sort_plot.png");
    assert_eq!(stdout.lines().count(), 1, "exactly one confirmation line");

    let png = std::fs::read(dir.join("hybrid_sort_plot.png")).unwrap();
    assert!(png.starts_with(&PNG_MAGIC));
}

#[test]
fn header_only_input_still_renders_a_chart() {
    let dir = case_dir("header_only");
    std::fs::write(dir.join("results.csv"), "s,time_ms\n").unwrap();

    let out = run_sortplot(&dir);
    assert!(out.status.success());
    assert!(dir.join("hybrid_sort_plot.png").exists());
}

#[test]
fn missing_input_fails_without_producing_a_chart() {
    let dir = case_dir("missing_input");

    let out = run_sortplot(&dir);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "no confirmation line on failure");
    assert!(!dir.join("hybrid_sort_plot.png").exists());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("results.csv"), "stderr names the missing file: {stderr}");
}

#[test]
fn missing_column_fails_without_producing_a_chart() {
    let dir = case_dir("missing_column");
    std::fs::write(dir.join("results.csv"), "threshold,time_ms\n10,5.2\n").unwrap();

    let out = run_sortplot(&dir);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "no confirmation line on failure");
    assert!(!dir.join("hybrid_sort_plot.png").exists());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'s'"), "stderr names the missing column: {stderr}");
}

#[test]
fn non_numeric_cell_fails() {
    let dir = case_dir("non_numeric");
    std::fs::write(dir.join("results.csv"), "s,time_ms\n10,fast\n").unwrap();

    let out = run_sortplot(&dir);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "no confirmation line on failure");
    assert!(!dir.join("hybrid_sort_plot.png").exists());
}

#[test]
fn rerun_overwrites_chart_in_place() {
    let dir = case_dir("rerun");
    std::fs::write(dir.join("results.csv"), "s,time_ms\n10,5.2\n20,4.8\n").unwrap();

    assert!(run_sortplot(&dir).status.success());
    let first = std::fs::read(dir.join("hybrid_sort_plot.png")).unwrap();

    assert!(run_sortplot(&dir).status.success());
    let second = std::fs::read(dir.join("hybrid_sort_plot.png")).unwrap();

    // Fully rewritten, not appended to: same input renders the same image
    assert!(second.starts_with(&PNG_MAGIC));
    assert_eq!(first.len(), second.len());
}

#[test]
fn bench_mode_generates_results_the_plot_run_consumes() {
    let dir = case_dir("bench_mode");

    let out = Command::new(env!("CARGO_BIN_EXE_sortplot"))
        .current_dir(&dir)
        .args(["--bench", "--size", "5000", "--samples", "5"])
        .output()
        .expect("failed to spawn sortplot");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Wrote results.csv");

    let csv = std::fs::read_to_string(dir.join("results.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("s,time_ms"));
    assert_eq!(lines.clone().count(), 5, "one record per sampled threshold");
    assert!(lines.all(|l| l.split(',').count() == 2));

    // The generated file feeds straight into the plot path
    let out = run_sortplot(&dir);
    assert!(out.status.success());
    let png = std::fs::read(dir.join("hybrid_sort_plot.png")).unwrap();
    assert!(png.starts_with(&PNG_MAGIC));
}
