use super::grid::Cell;

/// Ordered record of the in-progress path.
///
/// The source cell is held separately and never appears in `visited`.
/// Invariant: `visited` has no duplicates, and every consecutive pair in
/// `{source} ∪ visited` is 4-directionally adjacent, except transiently
/// while a diagonal bridge cell is being inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathState {
    source: Option<Cell>,
    visited: Vec<Cell>,
}

impl PathState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a path at `source`, clearing any previous one.
    pub fn begin(&mut self, source: Cell) {
        self.source = Some(source);
        self.visited.clear();
    }

    /// Drop the path entirely.
    pub fn reset(&mut self) {
        self.source = None;
        self.visited.clear();
    }

    pub fn source(&self) -> Option<Cell> {
        self.source
    }

    pub fn in_progress(&self) -> bool {
        self.source.is_some()
    }

    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// The last placed cell, falling back to the source.
    pub fn tail(&self) -> Option<Cell> {
        self.visited.last().copied().or(self.source)
    }

    /// The second-to-last placed cell, falling back to the source.
    pub fn prior_tail(&self) -> Option<Cell> {
        if self.visited.len() >= 2 {
            Some(self.visited[self.visited.len() - 2])
        } else {
            self.source
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.visited.push(cell);
    }

    /// Remove and return the most recent cell, if any.
    pub fn pop(&mut self) -> Option<Cell> {
        self.visited.pop()
    }

    /// Take the visited cells, leaving the path reset.
    pub fn take(&mut self) -> Vec<Cell> {
        self.source = None;
        std::mem::take(&mut self.visited)
    }
}
