use std::time::Duration;

use macroquad::prelude::*;
use life_canvas::{
    AppConfig, CellLayout, Controller, FrameRecorder, FrameTimer,
    ui::{self, PANEL_WIDTH},
    rendering, input,
};

/// Panel content needs this much height regardless of canvas size
const MIN_WINDOW_HEIGHT: u32 = 480;

fn window_conf(config: &AppConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: (config.canvas.width as f32 + PANEL_WIDTH) as i32,
        window_height: config.canvas.height.max(MIN_WINDOW_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match loaded.or_else(AppConfig::recover) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return;
        }
    };
    log::info!(
        "Grid {}x{}, {} buffers, step every {}ms ({} compute)",
        config.simulation.width,
        config.simulation.height,
        config.simulation.buffers,
        config.simulation.update_time_ms,
        config.simulation.compute.name()
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: AppConfig) {
    let sim = &config.simulation;
    let layout = CellLayout::fit(config.canvas.width, config.canvas.height, sim.width, sim.height);
    let mut controller = match Controller::new(
        sim,
        layout,
        FrameRecorder::new(config.colors),
        FrameTimer::new(),
        ::rand::rng(),
    ) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    // Start from random noise, drawn immediately
    controller.populate_random();

    let panel_x = config.canvas.width as f32;
    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(panel_x, controller.is_running());

        for action in input::poll_actions(&buttons, mouse_pos, controller.is_running()) {
            input::apply_action(&mut controller, action);
        }

        controller.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(30, 30, 30, 255));
        rendering::present(controller.sink().frame());
        rendering::draw_controls(&controller, panel_x, &buttons, mouse_pos);

        next_frame().await;
    }
}
