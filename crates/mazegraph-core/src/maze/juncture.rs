use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::MazeGraphError;

/// A maze cell, addressed by column `x` and row `y`.
///
/// `(0, 0)` is the upper-left corner. Coordinates are signed so that the
/// neighbor of an edge cell can be named and then rejected as off-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: i32,
    pub y: i32,
}

impl Juncture {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell on `side`, whether or not it lies inside a maze
    pub fn neighbor(self, side: Side) -> Juncture {
        let (dx, dy) = side.offset();
        Juncture::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"`, with optional surrounding parentheses and whitespace
impl FromStr for Juncture {
    type Err = MazeGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<Option<i32>> = trimmed
            .split(',')
            .map(|part| part.trim().parse().ok())
            .collect();
        match parts.as_slice() {
            [Some(x), Some(y)] => Ok(Juncture::new(*x, *y)),
            _ => bail_invalid!("juncture", format!("{s} (expected: x,y)")),
        }
    }
}

/// One of the four sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
}

impl Side {
    /// Order in which the maze adapter checks the sides of each cell
    pub const ALL: [Side; 4] = [Side::Above, Side::Below, Side::Left, Side::Right];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::Above => (0, -1),
            Side::Below => (0, 1),
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Above => Side::Below,
            Side::Below => Side::Above,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
