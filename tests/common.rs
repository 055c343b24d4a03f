use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for mazegraph, isolated from the user's config and log filters
#[allow(dead_code)]
pub fn mazegraph(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("mazegraph");
    cmd.env("MAZEGRAPH_CONFIG_DIR", dir.join("config"))
        .env_remove("MAZEGRAPH_CONFIG")
        .env_remove("MAZEGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a maze file into `dir` and return its path
#[allow(dead_code)]
pub fn write_maze(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write maze file");
    path
}

/// 2x2 maze with no walls
#[allow(dead_code)]
pub const OPEN_2X2: &str = "width = 2\nheight = 2\n";

/// 2x2 maze whose lower-right cell is walled off from both neighbors
#[allow(dead_code)]
pub const SEALED_2X2: &str = r#"
width = 2
height = 2

[[walls]]
x = 1
y = 1
side = "above"

[[walls]]
x = 1
y = 1
side = "left"
"#;
