//! Integration tests for the bfs, dfs and dijkstra commands

mod common;

use common::{mazegraph, write_maze, OPEN_2X2, SEALED_2X2};
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

fn run_json(args: &[&str], maze_contents: &str) -> Value {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", maze_contents);
    let output = mazegraph(dir.path())
        .args(["--format", "json"])
        .args(args)
        .arg(&maze)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn event_names(report: &Value) -> Vec<String> {
    report["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_bfs_human_output() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    mazegraph(dir.path())
        .arg("bfs")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::eq(
            "bfs from (0, 0) to (1, 1)\n\
             began bfs\n\
             visited (0, 0)\n\
             visited (0, 1)\n\
             visited (1, 0)\n\
             visited (1, 1)\n\
             search concluded\n\
             outcome: reached (1, 1)\n",
        ));
}

#[test]
fn test_quiet_prints_only_events() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    mazegraph(dir.path())
        .args(["--quiet", "dfs"])
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::eq(
            "began dfs\n\
             visited (0, 0)\n\
             visited (0, 1)\n\
             visited (1, 1)\n\
             search concluded\n",
        ));
}

#[test]
fn test_bfs_json_report() {
    let report = run_json(&["bfs"], OPEN_2X2);

    assert_eq!(report["algorithm"], "bfs");
    assert_eq!(report["from"], json!({"x": 0, "y": 0}));
    assert_eq!(report["to"], json!({"x": 1, "y": 1}));
    assert_eq!(report["outcome"], "reached");
    assert_eq!(
        event_names(&report),
        vec!["began", "visited", "visited", "visited", "visited", "search_concluded"]
    );
    assert_eq!(report["events"][1]["vertex"], json!({"x": 0, "y": 0}));
}

#[test]
fn test_dfs_explicit_endpoints() {
    let report = run_json(&["dfs", "--from", "1,1", "--to", "0,0"], OPEN_2X2);

    assert_eq!(report["from"], json!({"x": 1, "y": 1}));
    let visited: Vec<&Value> = report["events"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["event"] == "visited")
        .map(|e| &e["vertex"])
        .collect();
    // (1,1) tries above first, then (1,0) tries left to reach (0,0)
    assert_eq!(
        visited,
        vec![
            &json!({"x": 1, "y": 1}),
            &json!({"x": 1, "y": 0}),
            &json!({"x": 0, "y": 0}),
        ]
    );
}

#[test]
fn test_start_equals_end() {
    let report = run_json(&["bfs", "--from", "1,0", "--to", "1,0"], OPEN_2X2);
    assert_eq!(event_names(&report), vec!["began", "visited", "search_concluded"]);
}

#[test]
fn test_bfs_sealed_exit_never_concludes() {
    let report = run_json(&["bfs"], SEALED_2X2);

    assert_eq!(report["outcome"], "exhausted");
    let names = event_names(&report);
    assert!(!names.contains(&"search_concluded".to_string()));
    assert_eq!(names.iter().filter(|n| *n == "visited").count(), 3);
}

#[test]
fn test_dijkstra_json_report() {
    let report = run_json(&["dijkstra"], OPEN_2X2);

    assert_eq!(report["algorithm"], "dijkstra");
    assert!(report.get("outcome").is_none());
    assert_eq!(
        event_names(&report),
        vec![
            "began",
            "vertex_finalized",
            "vertex_finalized",
            "vertex_finalized",
            "vertex_finalized",
            "completed"
        ]
    );
    let completed = report["events"].as_array().unwrap().last().unwrap();
    assert_eq!(completed["path"]["status"], "found");
    assert_eq!(completed["path"]["cost"], 2);
    assert_eq!(
        completed["path"]["vertices"],
        json!([{"x": 0, "y": 0}, {"x": 0, "y": 1}, {"x": 1, "y": 1}])
    );
}

#[test]
fn test_dijkstra_human_unreachable() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", SEALED_2X2);

    mazegraph(dir.path())
        .arg("dijkstra")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("finalized (0, 0) cost 0"))
        .stdout(predicate::str::contains("finalized (1, 1)").not())
        .stdout(predicate::str::ends_with("completed unreachable\n"));
}

#[test]
fn test_dijkstra_follows_weights() {
    let weighted = r#"
width = 2
height = 2

[[weights]]
x = 0
y = 0
side = "below"
weight = 9
"#;
    let report = run_json(&["dijkstra", "--to", "0,1"], weighted);

    let completed = report["events"].as_array().unwrap().last().unwrap();
    assert_eq!(completed["path"]["cost"], 3);
    assert_eq!(
        completed["path"]["vertices"],
        json!([{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}, {"x": 0, "y": 1}])
    );
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    let maze = write_maze(dir.path(), "maze.toml", OPEN_2X2);

    let output = mazegraph(dir.path())
        .args(["--verbose", "--log-json", "--format", "json", "bfs"])
        .arg(&maze)
        .output()
        .unwrap();

    assert!(output.status.success());
    // stdout stays parseable JSON while logs go to stderr
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"], "reached");
    assert!(String::from_utf8_lossy(&output.stderr).contains("algorithm_began"));
}
