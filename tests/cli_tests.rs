//! Integration tests for the latmap CLI
//!
//! These tests run the latmap binary against the canonical sample graph
//! and verify output, formats, and exit codes.

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for latmap
fn latmap() -> Command {
    cargo_bin_cmd!("latmap")
}

const FIXTURE: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// Write an edge list into a temp dir and return (dir, file path).
/// The dir must stay alive for the path to remain valid.
fn graph_file(edges: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, edges).unwrap();
    (dir, path)
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    latmap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: latmap"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("latency"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("shortest"));
}

#[test]
fn test_version_flag() {
    latmap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("latmap"));
}

// ============================================================================
// Latency command
// ============================================================================

#[test]
fn test_latency_of_existing_trace() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["latency", "A-B-C"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_latency_of_absent_trace() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["latency", "A-E-D"])
        .assert()
        .success()
        .stdout("NO SUCH TRACE\n");
}

#[test]
fn test_latency_json_format() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "latency", "A-D-C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trace\": \"A-D-C\""))
        .stdout(predicate::str::contains("\"latency\": 13"));
}

#[test]
fn test_latency_json_format_absent_trace() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "latency", "A-E-D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": false"))
        .stdout(predicate::str::contains("\"latency\": null"));
}

#[test]
fn test_latency_rejects_malformed_trace() {
    let (_dir, path) = graph_file(FIXTURE);

    // "--" keeps traces like "-A" from parsing as flags
    for malformed in ["-A", "A-", "A--B", "AB"] {
        latmap()
            .arg("--graph")
            .arg(&path)
            .args(["latency", "--", malformed])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("malformed trace"));
    }
}

// ============================================================================
// Paths command
// ============================================================================

#[test]
fn test_paths_max_hops() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--quiet", "paths", "C", "C", "--max-hops", "3"])
        .assert()
        .success()
        .stdout("C-D-C\nC-E-B-C\n");
}

#[test]
fn test_paths_exact_hops() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--quiet", "paths", "A", "C", "--max-hops", "4", "--exact"])
        .assert()
        .success()
        .stdout("A-B-C-D-C\nA-D-C-D-C\nA-D-E-B-C\n");
}

#[test]
fn test_paths_max_latency() {
    let (_dir, path) = graph_file(FIXTURE);

    let expected = "\
C-D-C
C-D-C-E-B-C
C-D-E-B-C
C-E-B-C
C-E-B-C-D-C
C-E-B-C-E-B-C
C-E-B-C-E-B-C-E-B-C
";
    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--quiet", "paths", "C", "C", "--max-latency", "30"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_paths_no_connectivity() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--quiet", "paths", "C", "A", "--max-latency", "30"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_paths_json_format() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "paths", "C", "C", "--max-hops", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"))
        .stdout(predicate::str::contains("\"C-D-C\""))
        .stdout(predicate::str::contains("\"C-E-B-C\""));
}

#[test]
fn test_paths_requires_a_bound() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["paths", "C", "C"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_paths_bounds_are_exclusive() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["paths", "C", "C", "--max-hops", "3", "--max-latency", "30"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_paths_unknown_node() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["paths", "X", "C", "--max-hops", "3"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown node: X"));
}

// ============================================================================
// Shortest command
// ============================================================================

#[test]
fn test_shortest_between_distinct_nodes() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["shortest", "A", "C"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_shortest_cycle() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["shortest", "B", "B"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_shortest_unreachable() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["shortest", "C", "A"])
        .assert()
        .success()
        .stdout("NO SUCH TRACE\n");
}

#[test]
fn test_shortest_json_format() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "shortest", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"latency\": 7"));
}

#[test]
fn test_shortest_unknown_node_json_error() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "shortest", "X", "A"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("\"unknown_node\""));
}

// ============================================================================
// Report command
// ============================================================================

#[test]
fn test_report_answers() {
    let (_dir, path) = graph_file(FIXTURE);

    let expected = "\
1. 9
2. 5
3. 13
4. 22
5. NO SUCH TRACE
6. 2
7. 3
8. 9
9. 9
10. 7
";
    latmap()
        .arg("--graph")
        .arg(&path)
        .arg("report")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_report_json_format() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"answers\""))
        .stdout(predicate::str::contains("\"query\": \"shortest B B\""));
}

// ============================================================================
// Graph loading and construction errors
// ============================================================================

#[test]
fn test_graph_from_env_var() {
    let (_dir, path) = graph_file(FIXTURE);

    latmap()
        .env("LATMAP_GRAPH", &path)
        .args(["latency", "A-D"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_missing_graph_is_usage_error() {
    latmap()
        .env_remove("LATMAP_GRAPH")
        .args(["latency", "A-B"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no graph given"));
}

#[test]
fn test_duplicate_connection_rejected() {
    let (_dir, path) = graph_file("AB5, AB3");

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["latency", "A-B"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("duplicate connection"));
}

#[test]
fn test_self_loop_rejected() {
    let (_dir, path) = graph_file("AA5");

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["latency", "A-B"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("back to itself"));
}

#[test]
fn test_negative_weight_rejected() {
    let (_dir, path) = graph_file("AB-5");

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["latency", "A-B"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("negative weight"));
}

#[test]
fn test_unparseable_weight_rejected_as_json() {
    let (_dir, path) = graph_file("ABx");

    latmap()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "latency", "A-B"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("\"invalid_weight\""));
}
