use log::{info, warn};
use macroquad::prelude::*;

use crate::application::{Controller, TickClock};
use crate::config::RANDOM_DENSITY;
use crate::domain::Pattern;

/// Number keys selecting a preset, in `presets::all_patterns()` order
pub const PATTERN_KEYS: [KeyCode; 10] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::Key0,
];

/// Convert a pointer position in pixels to grid coordinates.
/// Returns None unless the position falls inside the grid on both axes.
pub fn pixel_to_cell(
    pixel: (f32, f32),
    cell_size: f32,
    dimensions: (usize, usize),
) -> Option<(i32, i32)> {
    let (px, py) = pixel;
    if cell_size <= 0.0 || px < 0.0 || py < 0.0 {
        return None;
    }
    let gx = (px / cell_size) as usize;
    let gy = (py / cell_size) as usize;
    (gx < dimensions.0 && gy < dimensions.1).then_some((gx as i32, gy as i32))
}

/// Index of the preset whose number key is `key`
pub fn pattern_for_key(key: KeyCode) -> Option<usize> {
    PATTERN_KEYS.iter().position(|&k| k == key)
}

/// Left click toggles a cell, right click stamps the selected preset.
/// Both are ignored by the controller while running.
pub fn handle_mouse(controller: &mut Controller, selected: &Pattern, cell_size: f32) {
    let Some((x, y)) = pixel_to_cell(mouse_position(), cell_size, controller.grid().dimensions())
    else {
        return;
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        if let Err(err) = controller.edit(x, y) {
            warn!("edit rejected: {err}");
        }
    } else if is_mouse_button_pressed(MouseButton::Right) {
        controller.stamp(selected, x, y);
    }
}

/// Update the selected preset from the number keys
pub fn handle_pattern_keys(selected: &mut usize, patterns: &[Pattern]) {
    if let Some(idx) = get_last_key_pressed().and_then(pattern_for_key) {
        if let Some(pattern) = patterns.get(idx) {
            *selected = idx;
            info!("selected pattern {}", pattern.name);
        }
    }
}

/// Run the keyboard command table
pub fn process_keyboard_input(controller: &mut Controller, clock: &mut TickClock) {
    type KeyAction = (KeyCode, fn(&mut Controller, &mut TickClock));

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, |c, clock| {
            c.toggle_run();
            clock.reset();
        }),
        (KeyCode::C, |c, _| c.clear()),
        (KeyCode::R, |c, _| c.randomize(&mut ::rand::rng(), RANDOM_DENSITY)),
        (KeyCode::Up, |_, clock| clock.adjust_speed(1.0)),
        (KeyCode::Down, |_, clock| clock.adjust_speed(-1.0)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(controller, clock));
}
