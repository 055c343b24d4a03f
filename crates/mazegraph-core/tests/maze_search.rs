//! Integration tests for loading maze files and searching the resulting graph

use std::fs;
use std::rc::Rc;

use mazegraph_core::graph::{EventLog, ShortestPath};
use mazegraph_core::maze::{build_maze_graph, GridMaze, Juncture, Maze, Side};
use tempfile::tempdir;

/// 3x3 maze with a wall between x=0 and x=1 on every row but the bottom one
const CORRIDOR: &str = r#"
width = 3
height = 3

[[walls]]
x = 0
y = 0
side = "right"

[[walls]]
x = 0
y = 1
side = "right"
"#;

fn load(contents: &str, name: &str) -> GridMaze {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    GridMaze::load(&path).unwrap()
}

#[test]
fn test_corridor_forces_detour() {
    let maze = load(CORRIDOR, "corridor.toml");
    let graph = build_maze_graph(&maze).unwrap();

    let result = graph
        .shortest_paths(&Juncture::new(0, 0), &Juncture::new(2, 0))
        .unwrap();

    assert_eq!(
        result.path.vertices(),
        Some(
            &[
                Juncture::new(0, 0),
                Juncture::new(0, 1),
                Juncture::new(0, 2),
                Juncture::new(1, 2),
                Juncture::new(1, 1),
                Juncture::new(1, 0),
                Juncture::new(2, 0),
            ][..]
        )
    );
    assert_eq!(result.path.cost(), Some(6));
}

#[test]
fn test_open_grid_edge_count() {
    let maze = GridMaze::open(4, 3, 1).unwrap();
    let graph = build_maze_graph(&maze).unwrap();

    // (w-1)*h horizontal + w*(h-1) vertical pairs, each in both directions
    assert_eq!(graph.vertex_count(), 12);
    assert_eq!(graph.edge_count(), 2 * (3 * 3 + 4 * 2));
}

#[test]
fn test_walled_off_exit_is_unreachable() {
    let mut maze = GridMaze::open(2, 2, 1).unwrap();
    maze.add_wall(Juncture::new(1, 1), Side::Above).unwrap();
    maze.add_wall(Juncture::new(1, 1), Side::Left).unwrap();

    let mut graph = build_maze_graph(&maze).unwrap();
    let log = Rc::new(EventLog::<Juncture>::new());
    graph.add_observer(log.clone());

    let bfs = graph.search_bfs(&maze.entrance(), &maze.exit()).unwrap();
    assert!(!bfs.is_reached());
    assert_eq!(bfs.visited.len(), 3);
    assert_eq!(log.conclusions(), 0);

    let dijkstra = graph.shortest_paths(&maze.entrance(), &maze.exit()).unwrap();
    assert_eq!(dijkstra.path, ShortestPath::Unreachable);
    assert_eq!(dijkstra.finalized.len(), 3);
}

#[test]
fn test_weights_steer_dijkstra() {
    let json = r#"{
        "width": 2,
        "height": 2,
        "default_weight": 1,
        "weights": [
            {"x": 0, "y": 0, "side": "right", "weight": 10}
        ]
    }"#;
    let maze = load(json, "weighted.json");
    assert_eq!(maze.weight(Juncture::new(0, 0), Side::Right), 10);

    let graph = build_maze_graph(&maze).unwrap();
    let result = graph
        .shortest_paths(&Juncture::new(0, 0), &Juncture::new(1, 0))
        .unwrap();

    assert_eq!(result.path.cost(), Some(3));
    assert_eq!(
        result.path.vertices(),
        Some(
            &[
                Juncture::new(0, 0),
                Juncture::new(0, 1),
                Juncture::new(1, 1),
                Juncture::new(1, 0),
            ][..]
        )
    );
}

#[test]
fn test_dfs_reaches_exit_of_open_maze() {
    let maze = GridMaze::open(5, 5, 1).unwrap();
    let graph = build_maze_graph(&maze).unwrap();

    let run = graph.search_dfs(&maze.entrance(), &maze.exit()).unwrap();

    assert!(run.is_reached());
    assert_eq!(run.visited.first(), Some(&Juncture::new(0, 0)));
    assert_eq!(run.visited.last(), Some(&Juncture::new(4, 4)));
}
