//! Transition engine: one synchronous B3/S23 generation.
//!
//! Every read goes against `current` and every write against `next`, so the
//! order cells are visited in never matters. Edges are hard: positions
//! outside the grid count as absent, not wrapped and not alive.

use super::{Cell, Grid, GridError};

/// Relative offsets of the 8 Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Count alive neighbors of (x, y), skipping off-grid positions
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (w, h) = grid.dimensions();

    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < w && ny < h).then(|| grid.cell_at(nx, ny))
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Compute the generation after `current` into `next`.
///
/// `next` is fully overwritten. On `DimensionMismatch` neither grid is touched.
pub fn step(current: &Grid, next: &mut Grid) -> Result<(), GridError> {
    if current.dimensions() != next.dimensions() {
        return Err(GridError::DimensionMismatch {
            current: current.dimensions(),
            next: next.dimensions(),
        });
    }

    write_generation(current, next);
    Ok(())
}

/// Allocate and return the generation after `current`
pub fn evolve(current: &Grid) -> Grid {
    let mut next = current.clone();
    write_generation(current, &mut next);
    next
}

/// Scan every cell of `current` into `next`; dimensions must already match
fn write_generation(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let (w, h) = current.dimensions();
    for y in 0..h {
        for x in 0..w {
            let neighbors = count_live_neighbors(current, x, y);
            next.put(x, y, current.cell_at(x, y).evolve(neighbors));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        cells.sort();
        cells
    }

    #[test]
    fn test_empty_stays_empty() {
        for (w, h) in [(1, 1), (3, 3), (80, 60)] {
            let current = Grid::new(w, h).unwrap();
            let mut next = Grid::new(w, h).unwrap();
            step(&current, &mut next).unwrap();
            assert_eq!(next.population(), 0);
        }
    }

    #[test]
    fn test_isolated_cell_dies() {
        let current = grid_with(3, 3, &[(1, 1)]);
        let mut next = Grid::new(3, 3).unwrap();
        step(&current, &mut next).unwrap();
        assert_eq!(next.get(1, 1), Ok(Cell::Empty));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let current = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(count_live_neighbors(&current, x, y), 3);
        }
        let mut next = Grid::new(4, 4).unwrap();
        step(&current, &mut next).unwrap();
        assert_eq!(next, current);
    }

    #[test]
    fn test_vertical_blinker_scenario() {
        let original = grid_with(5, 5, &[(1, 1), (1, 2), (1, 3)]);
        let mut next = Grid::new(5, 5).unwrap();

        step(&original, &mut next).unwrap();
        assert_eq!(alive_cells(&next), vec![(0, 2), (1, 2), (2, 2)]);

        let mut again = Grid::new(5, 5).unwrap();
        step(&next, &mut again).unwrap();
        assert_eq!(again, original);
    }

    #[test]
    fn test_horizontal_blinker_has_period_two() {
        let original = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let once = evolve(&original);
        assert_ne!(once, original);
        assert_eq!(evolve(&once), original);
    }

    #[test]
    fn test_next_is_fully_overwritten() {
        let current = Grid::new(4, 4).unwrap();
        let mut next = grid_with(4, 4, &[(0, 0), (3, 3), (2, 1)]);
        step(&current, &mut next).unwrap();
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Would be a stable blinker pair on a torus; here the corner cell sees
        // only on-grid neighbors.
        let grid = grid_with(4, 4, &[(3, 0), (3, 3), (0, 3)]);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);

        let corner = grid_with(3, 3, &[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(count_live_neighbors(&corner, 0, 0), 2);
        assert_eq!(count_live_neighbors(&corner, 1, 1), 3);
        assert_eq!(count_live_neighbors(&corner, 2, 2), 0);
    }

    #[test]
    fn test_blinker_against_edge_shrinks() {
        // Horizontal blinker on the top row loses its upper birth cell.
        let current = grid_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        let next = evolve(&current);
        assert_eq!(alive_cells(&next), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_dimension_mismatch_leaves_grids_untouched() {
        let current = grid_with(5, 5, &[(1, 1), (1, 2), (1, 3)]);
        let mut next = grid_with(4, 5, &[(0, 0)]);
        let (current_before, next_before) = (current.clone(), next.clone());

        assert_eq!(
            step(&current, &mut next),
            Err(GridError::DimensionMismatch {
                current: (5, 5),
                next: (4, 5),
            })
        );
        assert_eq!(current, current_before);
        assert_eq!(next, next_before);
    }

    #[test]
    fn test_evolve_matches_step() {
        let current = grid_with(6, 6, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let mut next = Grid::new(6, 6).unwrap();
        step(&current, &mut next).unwrap();
        assert_eq!(evolve(&current), next);
    }

    #[test]
    fn test_step_is_deterministic() {
        let glider = grid_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(evolve(&glider), evolve(&glider));
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let glider = grid_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let moved = (0..4).fold(glider, |g, _| evolve(&g));
        assert_eq!(
            alive_cells(&moved),
            vec![(1, 3), (2, 1), (2, 3), (3, 2), (3, 3)]
        );
    }
}
