use serde::{Deserialize, Serialize};

/// Linear cell index into the board, in `[0, width * height)`.
pub type Cell = usize;

/// Index ↔ row/column conversion for a fixed grid width.
///
/// Cells are numbered row-major: `row = cell / width`, `col = cell % width`.
/// All other components go through this instead of repeating the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    width: usize,
}

impl GridIndex {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(self) -> usize {
        self.width
    }

    pub fn row(self, cell: Cell) -> usize {
        cell / self.width
    }

    pub fn col(self, cell: Cell) -> usize {
        cell % self.width
    }

    /// The cell at the given column and row.
    pub fn cell_at(self, col: usize, row: usize) -> Cell {
        row * self.width + col
    }

    pub fn same_row(self, a: Cell, b: Cell) -> bool {
        self.row(a) == self.row(b)
    }

    pub fn same_col(self, a: Cell, b: Cell) -> bool {
        self.col(a) == self.col(b)
    }

    /// Manhattan distance between two cells in grid units.
    pub fn manhattan(self, a: Cell, b: Cell) -> usize {
        self.row(a).abs_diff(self.row(b)) + self.col(a).abs_diff(self.col(b))
    }
}

/// A power-producing building that can be the source of a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
    Solar,
    Windmill,
    Water,
}

impl BuildingKind {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Solar => "solar panel",
            Self::Windmill => "windmill",
            Self::Water => "water wheel",
        }
    }

    /// Single-letter board glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Solar => "S",
            Self::Windmill => "W",
            Self::Water => "H",
        }
    }
}

/// What currently occupies a cell.
///
/// `Empty` is a cell nothing has touched; `Cleared` is a cell whose wire was
/// removed. Emptiness queries accept both, so cleared cells are immediately
/// reusable for new wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Empty,
    Cleared,
    Building(BuildingKind),
    Wire,
    Goal,
}

impl TileType {
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty | Self::Cleared)
    }

    pub fn is_building(self) -> bool {
        matches!(self, Self::Building(_))
    }
}

/// Tile-type storage capability consumed by the path engine.
///
/// The engine is the only writer of wire-related transitions
/// (`Wire` ↔ `Cleared`); building and goal placement belong to whoever set
/// the board up.
pub trait GridStore {
    fn width(&self) -> usize;

    fn type_of(&self, cell: Cell) -> TileType;

    fn set_type(&mut self, cell: Cell, tile: TileType);

    fn is_empty(&self, cell: Cell) -> bool {
        self.type_of(cell).is_empty()
    }
}

/// Standard Vec-backed tile store.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: usize,
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// Create a grid of `width * height` empty tiles.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            tiles: vec![TileType::Empty; width * height],
        }
    }

    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.tiles.len() / self.width
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }
}

impl GridStore for TileGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn type_of(&self, cell: Cell) -> TileType {
        self.tiles[cell]
    }

    fn set_type(&mut self, cell: Cell, tile: TileType) {
        self.tiles[cell] = tile;
    }
}
