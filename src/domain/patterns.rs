use super::{Cell, Grid};

/// A preset pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Build a pattern from the offsets of its alive cells; the bounding box
    /// is derived from the largest offsets.
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0).saturating_add(1);
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0).saturating_add(1);
        Self { name, description, width, height, cells }
    }

    fn from_offsets(name: &'static str, description: &'static str, offsets: &[(usize, usize)]) -> Self {
        Self::new(name, description, offsets.to_vec())
    }

    /// Set the pattern's cells alive with its top-left corner at (x, y).
    /// Cells that land off-grid are clipped. Returns how many were placed.
    pub fn place_on(&self, grid: &mut Grid, x: i32, y: i32) -> usize {
        self.cells
            .iter()
            .filter_map(|&(dx, dy)| {
                let gx = x.checked_add(i32::try_from(dx).ok()?)?;
                let gy = y.checked_add(i32::try_from(dy).ok()?)?;
                grid.set(gx, gy, Cell::Alive).ok()
            })
            .count()
    }

    /// Like `place_on`, but with the pattern's centre at (x, y)
    pub fn place_centered(&self, grid: &mut Grid, x: i32, y: i32) -> usize {
        let half_w = i32::try_from(self.width / 2).unwrap_or(i32::MAX);
        let half_h = i32::try_from(self.height / 2).unwrap_or(i32::MAX);
        self.place_on(grid, x.saturating_sub(half_w), y.saturating_sub(half_h))
    }
}

/// Well-known Life patterns, selectable from the keyboard
pub mod presets {
    use super::*;

    const BLOCK: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

    const BLINKER: &[(usize, usize)] = &[(0, 1), (1, 1), (2, 1)];

    const TOAD: &[(usize, usize)] = &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)];

    const BEACON: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)];

    const GLIDER: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

    const LWSS: &[(usize, usize)] = &[
        (1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3),
    ];

    const R_PENTOMINO: &[(usize, usize)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

    const ACORN: &[(usize, usize)] = &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)];

    // Rows of the Gosper gun, left to right: block, the two "queen bee"
    // halves, the shuttle, then the right-hand block.
    const GOSPER_GUN: &[(usize, usize)] = &[
        (0, 4), (0, 5), (1, 4), (1, 5),
        (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
        (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
        (16, 6), (17, 5),
        (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
        (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
        (34, 2), (34, 3), (35, 2), (35, 3),
    ];

    pub fn block() -> Pattern {
        Pattern::from_offsets("Block", "2x2 still life", BLOCK)
    }

    pub fn blinker() -> Pattern {
        Pattern::from_offsets("Blinker", "Three in a row, flips every generation", BLINKER)
    }

    pub fn toad() -> Pattern {
        Pattern::from_offsets("Toad", "Two offset rows, period 2", TOAD)
    }

    pub fn beacon() -> Pattern {
        Pattern::from_offsets("Beacon", "Two touching blocks, period 2", BEACON)
    }

    /// Travels one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::from_offsets("Glider", "Diagonal spaceship", GLIDER)
    }

    /// Travels two cells horizontally every 4 generations
    pub fn lwss() -> Pattern {
        Pattern::from_offsets("LWSS", "Horizontal spaceship", LWSS)
    }

    /// Period 3 oscillator in a 13x13 box
    pub fn pulsar() -> Pattern {
        let quadrant = [
            (2, 0), (3, 0), (4, 0),
            (0, 2), (5, 2),
            (0, 3), (5, 3),
            (0, 4), (5, 4),
            (2, 5), (3, 5), (4, 5),
        ];
        // Mirror the top-left quadrant across both axes of the 13x13 box.
        let cells = quadrant
            .iter()
            .flat_map(|&(x, y)| [(x, y), (12 - x, y), (x, 12 - y), (12 - x, 12 - y)])
            .collect();
        Pattern::new("Pulsar", "Large period 3 oscillator", cells)
    }

    /// Five cells that take 1103 generations to settle
    pub fn r_pentomino() -> Pattern {
        Pattern::from_offsets("R-pentomino", "Long-lived five-cell seed", R_PENTOMINO)
    }

    /// Seven cells that take 5206 generations to settle
    pub fn acorn() -> Pattern {
        Pattern::from_offsets("Acorn", "Long-lived seven-cell seed", ACORN)
    }

    /// Emits a new glider every 30 generations. Wider than it is tall, so
    /// stamp it with room to the right.
    pub fn glider_gun() -> Pattern {
        Pattern::from_offsets("Gosper Glider Gun", "Glider factory", GOSPER_GUN)
    }

    /// Every preset, in number-key order (1-9 then 0)
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            pulsar(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }
}
