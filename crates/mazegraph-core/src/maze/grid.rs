//! Rectangular mazes loaded from TOML or JSON files
//!
//! ```toml
//! width = 3
//! height = 2
//! default_weight = 1
//!
//! [[walls]]
//! x = 0
//! y = 0
//! side = "right"
//!
//! [[weights]]
//! x = 1
//! y = 0
//! side = "below"
//! weight = 4
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MazeGraphError, Result};
use crate::maze::{Juncture, Maze, Side};
use crate::{bail_invalid, bail_usage};

fn default_weight() -> i64 {
    1
}

/// A wall on one side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSpec {
    pub x: i32,
    pub y: i32,
    pub side: Side,
}

/// A weight override for the passage leaving a cell through one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightSpec {
    pub x: i32,
    pub y: i32,
    pub side: Side,
    pub weight: i64,
}

/// On-disk maze description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeFile {
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_weight")]
    pub default_weight: i64,
    #[serde(default)]
    pub walls: Vec<WallSpec>,
    #[serde(default)]
    pub weights: Vec<WeightSpec>,
}

impl MazeFile {
    /// Read a `.toml` or `.json` maze file
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let is_json = match extension.as_deref() {
            Some("json") => true,
            Some("toml") => false,
            _ => bail_usage!(format!(
                "unsupported maze file {} (expected .toml or .json)",
                path.display()
            )),
        };

        let content = fs::read_to_string(path).map_err(|e| {
            MazeGraphError::Other(format!(
                "failed to read maze from {}: {}",
                path.display(),
                e
            ))
        })?;

        let file = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(file)
    }
}

/// In-memory maze with shared walls and per-side weight overrides
#[derive(Debug, Clone)]
pub struct GridMaze {
    width: i32,
    height: i32,
    default_weight: i64,
    walls: HashSet<(Juncture, Side)>,
    weights: HashMap<(Juncture, Side), i64>,
}

impl GridMaze {
    /// A maze with no walls where every passage costs `default_weight`
    pub fn open(width: i32, height: i32, default_weight: i64) -> Result<Self> {
        if width <= 0 {
            bail_invalid!("maze width", width);
        }
        if height <= 0 {
            bail_invalid!("maze height", height);
        }
        Ok(Self {
            width,
            height,
            default_weight,
            walls: HashSet::new(),
            weights: HashMap::new(),
        })
    }

    pub fn from_file(file: &MazeFile) -> Result<Self> {
        let mut maze = Self::open(file.width, file.height, file.default_weight)?;
        for wall in &file.walls {
            maze.add_wall(Juncture::new(wall.x, wall.y), wall.side)?;
        }
        for spec in &file.weights {
            maze.set_weight(Juncture::new(spec.x, spec.y), spec.side, spec.weight)?;
        }
        debug!(
            width = maze.width,
            height = maze.height,
            walls = maze.walls.len(),
            overrides = maze.weights.len(),
            "maze_loaded"
        );
        Ok(maze)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_file(&MazeFile::load(path)?)
    }

    pub fn contains(&self, at: Juncture) -> bool {
        (0..self.width).contains(&at.x) && (0..self.height).contains(&at.y)
    }

    /// Upper-left cell
    pub fn entrance(&self) -> Juncture {
        Juncture::new(0, 0)
    }

    /// Lower-right cell
    pub fn exit(&self) -> Juncture {
        Juncture::new(self.width - 1, self.height - 1)
    }

    /// Close `side` of `at`, and the facing side of the neighbor if it exists
    pub fn add_wall(&mut self, at: Juncture, side: Side) -> Result<()> {
        self.require_inside(at, "wall position")?;
        self.walls.insert((at, side));
        let neighbor = at.neighbor(side);
        if self.contains(neighbor) {
            self.walls.insert((neighbor, side.opposite()));
        }
        Ok(())
    }

    /// Override the weight of the passage leaving `at` through `side`
    pub fn set_weight(&mut self, at: Juncture, side: Side, weight: i64) -> Result<()> {
        self.require_inside(at, "weight position")?;
        self.weights.insert((at, side), weight);
        Ok(())
    }

    fn require_inside(&self, at: Juncture, context: &str) -> Result<()> {
        if !self.contains(at) {
            bail_invalid!(
                context,
                format!("{} outside {}x{} maze", at, self.width, self.height)
            );
        }
        Ok(())
    }
}

impl Maze for GridMaze {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_wall(&self, at: Juncture, side: Side) -> bool {
        self.walls.contains(&(at, side))
    }

    fn weight(&self, at: Juncture, side: Side) -> i64 {
        self.weights
            .get(&(at, side))
            .copied()
            .unwrap_or(self.default_weight)
    }
}
