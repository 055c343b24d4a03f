//! Grid mazes and their conversion into weighted graphs
//!
//! A maze is a rectangular grid of [`Juncture`]s. Adjacent cells are joined
//! by a passage in each direction unless a wall blocks it; every passage
//! carries a non-negative weight supplied by the maze.

pub mod adapter;
pub mod grid;
pub mod juncture;

pub use adapter::build_maze_graph;
pub use grid::{GridMaze, MazeFile};
pub use juncture::{Juncture, Side};

/// Source of maze layout consumed by [`build_maze_graph`]
pub trait Maze {
    /// Number of columns
    fn width(&self) -> i32;

    /// Number of rows
    fn height(&self) -> i32;

    /// Whether a wall closes `side` of the cell at `at`
    fn is_wall(&self, at: Juncture, side: Side) -> bool;

    /// Weight of the passage leaving `at` through `side`
    fn weight(&self, at: Juncture, side: Side) -> i64;
}
