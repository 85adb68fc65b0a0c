/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell is either Empty or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip Empty <-> Alive
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Empty,
            Cell::Empty => Cell::Alive,
        }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Empty cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in an empty cell
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Empty, 3) => Cell::Alive,
            _ => Cell::Empty,
        }
    }
}

impl std::ops::Not for Cell {
    type Output = Cell;

    fn not(self) -> Self::Output {
        self.toggle()
    }
}
