use log::{error, info};
use macroquad::prelude::*;
use life_board::{
    Config, Controller, TickClock, presets,
    input, rendering,
};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::default();
    let (width, height) = config.grid_dimensions();
    let cell_size = config.cell_size as f32;

    let mut controller = match Controller::new(width, height) {
        Ok(controller) => controller,
        Err(err) => {
            error!("cannot create grid: {err}");
            return;
        }
    };
    let mut clock = TickClock::new(config.ticks_per_second);
    let patterns = presets::all_patterns();
    let mut selected = 0;

    info!("{width}x{height} grid ready; Space runs/pauses, click toggles cells");

    loop {
        // Input
        input::process_keyboard_input(&mut controller, &mut clock);
        input::handle_pattern_keys(&mut selected, &patterns);
        input::handle_mouse(&mut controller, &patterns[selected], cell_size);

        // Simulation
        if controller.is_running() && clock.advance(get_frame_time()) {
            if let Err(err) = controller.tick() {
                error!("tick failed: {err}");
            }
        }

        // Render
        rendering::draw_grid(controller.grid(), cell_size);
        rendering::draw_run_border(controller.grid(), cell_size, controller.is_running());
        rendering::draw_status(&controller, &clock, &patterns[selected]);

        next_frame().await;
    }
}
