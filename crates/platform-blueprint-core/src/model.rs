use serde::{Deserialize, Serialize};

/// Row-major grid of booleans; `true` marks a cell that receives a foundation tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanMatrix {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl BooleanMatrix {
    /// All-`false` matrix of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Builds a matrix from nested rows. Returns `None` if rows differ in length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if rows.iter().any(|r| r.len() as u32 != width) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at column `x`, row `y`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        let i = self.index(x, y);
        self.cells[i] = value;
    }

    /// Rows from top to bottom.
    /// Always yields `height` rows, empty ones when `width` is 0.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * w..(y + 1) * w])
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// `(x, y)` of every `true` cell in row-major order.
    pub fn true_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, c)| **c)
                .map(move |(x, _)| (x as u32, y as u32))
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Top-level blueprint document as the game imports it: `{ "blueprint": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlueprintDocument {
    pub blueprint: Blueprint,
}

/// Blueprint body. Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blueprint {
    pub label: String,
    pub icons: Vec<Icon>,
    pub item: String,
    pub version: u64,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Icon {
    pub signal: Signal,
    pub index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Signal {
    pub name: String,
}

/// One placed tile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tile {
    pub position: Position,
    pub name: String,
}

/// Tile grid coordinate; `x` grows right, `y` grows down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Summary of a single conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BlueprintStats {
    /// Grid width after preprocessing.
    pub width: u32,
    /// Grid height after preprocessing.
    pub height: u32,
    /// Number of placed tiles.
    pub tiles: usize,
    /// tiles / (width * height), 0.0 for an empty grid.
    pub coverage: f64,
}

impl BlueprintStats {
    pub fn from_matrix(matrix: &BooleanMatrix) -> Self {
        let tiles = matrix.count_true();
        let cells = matrix.width() as u64 * matrix.height() as u64;
        let coverage = if cells > 0 {
            tiles as f64 / cells as f64
        } else {
            0.0
        };
        Self {
            width: matrix.width(),
            height: matrix.height(),
            tiles,
            coverage,
        }
    }
}
