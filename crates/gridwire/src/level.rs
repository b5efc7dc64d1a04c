use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::wire::{BuildingKind, Cell, GridIndex};

/// A board position in a level file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    pub fn cell(self, index: GridIndex) -> Cell {
        index.cell_at(self.col, self.row)
    }
}

/// A producer building placed by the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub col: usize,
    pub row: usize,
    pub kind: BuildingKind,
}

/// A playable board: dimensions, the goal cell, and the producer buildings
/// the player has to wire up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    #[serde(default = "default_name")]
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub goal: CellPos,
    pub buildings: Vec<BuildingSpec>,
}

fn default_name() -> String {
    "Untitled".to_string()
}

impl Level {
    /// Load and validate a level file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("Level not found: {}", path.display())
            } else {
                anyhow::anyhow!("Failed to read level: {e}")
            }
        })?;
        let level: Level = serde_yaml::from_str(&contents)?;
        level.validate()?;
        Ok(level)
    }

    /// The built-in level used when no file is given.
    pub fn builtin() -> Self {
        Self {
            name: "First Light".to_string(),
            width: 12,
            height: 9,
            goal: CellPos { col: 6, row: 4 },
            buildings: vec![
                BuildingSpec {
                    col: 1,
                    row: 1,
                    kind: BuildingKind::Solar,
                },
                BuildingSpec {
                    col: 10,
                    row: 2,
                    kind: BuildingKind::Windmill,
                },
                BuildingSpec {
                    col: 2,
                    row: 7,
                    kind: BuildingKind::Water,
                },
            ],
        }
    }

    pub fn index(&self) -> GridIndex {
        GridIndex::new(self.width)
    }

    pub fn goal_cell(&self) -> Cell {
        self.goal.cell(self.index())
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            anyhow::bail!(
                "Board must be at least 2x2, got {}x{}",
                self.width,
                self.height
            );
        }
        if self.goal.col >= self.width || self.goal.row >= self.height {
            anyhow::bail!(
                "Goal ({},{}) is outside the {}x{} board",
                self.goal.col,
                self.goal.row,
                self.width,
                self.height
            );
        }
        if self.buildings.is_empty() {
            anyhow::bail!("Level has no buildings to connect");
        }

        let index = self.index();
        let mut taken = vec![self.goal_cell()];
        for b in &self.buildings {
            if b.col >= self.width || b.row >= self.height {
                anyhow::bail!(
                    "{} at ({},{}) is outside the {}x{} board",
                    b.kind.display_name(),
                    b.col,
                    b.row,
                    self.width,
                    self.height
                );
            }
            let cell = index.cell_at(b.col, b.row);
            if taken.contains(&cell) {
                anyhow::bail!("Cell ({},{}) is used twice", b.col, b.row);
            }
            taken.push(cell);
        }
        Ok(())
    }
}
