use macroquad::prelude::*;

use crate::application::{Controller, TickClock};
use crate::domain::{Grid, Pattern};

const EMPTY_COLOR: Color = WHITE;
const ALIVE_COLOR: Color = BLACK;
const GRID_LINE_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const PAUSED_BORDER: Color = RED;
const RUNNING_BORDER: Color = GREEN;
const STATUS_COLOR: Color = Color::new(0.45, 0.45, 0.45, 1.0);

/// Draw the grid: light grid lines, black alive cells on white
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    let (grid_width, grid_height) = grid.dimensions();
    let area_width = grid_width as f32 * cell_size;
    let area_height = grid_height as f32 * cell_size;

    clear_background(EMPTY_COLOR);

    for x in 0..grid_width {
        let sx = x as f32 * cell_size;
        draw_line(sx, 0.0, sx, area_height, 1.0, GRID_LINE_COLOR);
    }
    for y in 0..grid_height {
        let sy = y as f32 * cell_size;
        draw_line(0.0, sy, area_width, sy, 1.0, GRID_LINE_COLOR);
    }

    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(x, y, _)| {
            draw_rectangle(
                x as f32 * cell_size,
                y as f32 * cell_size,
                cell_size,
                cell_size,
                ALIVE_COLOR,
            );
        });
}

/// Border around the whole grid: red while paused, green while running
pub fn draw_run_border(grid: &Grid, cell_size: f32, running: bool) {
    let (w, h) = grid.dimensions();
    let color = if running { RUNNING_BORDER } else { PAUSED_BORDER };
    draw_rectangle_lines(0.0, 0.0, w as f32 * cell_size, h as f32 * cell_size, 4.0, color);
}

/// One line of status text in the top-left corner
pub fn draw_status(controller: &Controller, clock: &TickClock, selected: &Pattern) {
    let status = format!(
        "{} | gen {} | pop {} | {:.0} gen/s | stamp: {}",
        if controller.is_running() { "Running" } else { "Paused" },
        controller.generation(),
        controller.grid().population(),
        clock.ticks_per_second(),
        selected.name,
    );
    draw_text(&status, 8.0, 18.0, 18.0, STATUS_COLOR);
}
