//! End-to-end tests driving the controller through the frame timer

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use life_canvas::config::{ColorConfig, SimulationConfig};
use life_canvas::domain::{BufferSet, Cell, Grid, presets, rules, seeder};
use life_canvas::rendering::DrawCommand;
use life_canvas::{CellLayout, Controller, FrameRecorder, FrameTimer};

const TICK: Duration = Duration::from_millis(100);

fn controller(width: usize, height: usize) -> Controller<FrameRecorder, FrameTimer, StdRng> {
    let config = SimulationConfig { width, height, ..SimulationConfig::default() };
    Controller::new(
        &config,
        CellLayout::fit(500, 500, width, height),
        FrameRecorder::new(ColorConfig::default()),
        FrameTimer::new(),
        StdRng::seed_from_u64(2024),
    )
    .unwrap()
}

fn live_rects(frame: &[DrawCommand], colors: &ColorConfig) -> usize {
    frame
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == colors.alive))
        .count()
}

#[test]
fn glider_returns_shifted_after_four_generations() {
    let mut buffers = BufferSet::new(8, 8, 2).unwrap();
    presets::glider().place_on(buffers.current_mut(), 0, 0);

    for _ in 0..4 {
        let (current, next) = buffers.split();
        rules::update(current, next);
        buffers.advance();
    }

    let mut expected = Grid::new(8, 8);
    presets::glider().place_on(&mut expected, 1, 1);
    assert_eq!(buffers.current(), &expected, "\n{}", buffers.current());
}

#[test]
fn glider_first_generation() {
    let mut buffers = BufferSet::new(5, 5, 2).unwrap();
    presets::glider().place_on(buffers.current_mut(), 0, 0);
    let (current, next) = buffers.split();
    rules::update(current, next);
    buffers.advance();

    let expected = Grid::parse(&[
        ".....",
        "#.#..",
        ".##..",
        ".#...",
        ".....",
    ]);
    assert_eq!(buffers.current(), &expected);
}

#[test]
fn running_controller_steps_once_per_period() {
    let mut ctrl = controller(25, 25);
    ctrl.populate_gliders();
    assert_eq!(ctrl.sink().frames_rendered(), 1);

    ctrl.start();
    assert_eq!(ctrl.sink().frames_rendered(), 2);

    for _ in 0..5 {
        ctrl.tick(Duration::from_millis(50));
    }
    // 250ms elapsed -> two timer fires
    assert_eq!(ctrl.sink().frames_rendered(), 4);
    assert_eq!(ctrl.generation(), 4);
}

#[test]
fn stop_prevents_further_steps() {
    let mut ctrl = controller(25, 25);
    ctrl.start();
    ctrl.tick(TICK);
    ctrl.stop();
    let frames = ctrl.sink().frames_rendered();

    for _ in 0..10 {
        ctrl.tick(TICK);
    }
    assert_eq!(ctrl.sink().frames_rendered(), frames);
    assert_eq!(ctrl.timer().active(), 0);
}

#[test]
fn restart_uses_a_single_timer() {
    let mut ctrl = controller(25, 25);
    ctrl.start();
    ctrl.stop();
    ctrl.start();
    ctrl.start();
    assert_eq!(ctrl.timer().active(), 1);

    let before = ctrl.generation();
    ctrl.tick(TICK);
    assert_eq!(ctrl.generation(), before + 1);
}

#[test]
fn rendered_frame_shows_drawn_grid() {
    let mut ctrl = controller(25, 25);
    ctrl.populate_gliders();
    let colors = ColorConfig::default();
    assert_eq!(live_rects(ctrl.sink().frame(), &colors), 15);
    // the frame is the seeded grid, the controller has already moved on
    assert_eq!(ctrl.generation(), 1);
}

#[test]
fn blinker_oscillates_through_controller() {
    let mut ctrl = controller(25, 25);
    for col in 10..13 {
        ctrl.current_grid_mut().set(12, col, Cell::Alive);
    }
    let horizontal = ctrl.current_grid().clone();

    ctrl.step();
    assert_ne!(ctrl.current_grid(), &horizontal);
    ctrl.step();
    assert_eq!(ctrl.current_grid(), &horizontal);
}

#[test]
fn random_seed_marks_exactly_the_drawn_positions() {
    let drawn: Vec<_> =
        seeder::random_positions(31, 17, &mut StdRng::seed_from_u64(5)).collect();
    assert_eq!(drawn.len(), seeder::random_target(31, 17));
    assert!(drawn.iter().all(|&(row, col)| row < 17 && col < 31));

    let mut grid = Grid::new(31, 17);
    let live = seeder::populate_random(&mut grid, &mut StdRng::seed_from_u64(5));

    let mut distinct = drawn.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(live, distinct.len());
    assert!(live <= seeder::random_target(31, 17));
    for (row, col) in distinct {
        assert_eq!(grid.get(row, col), Some(Cell::Alive));
    }
}

#[test]
fn parallel_and_serial_controllers_agree() {
    let make = |compute| {
        let config = SimulationConfig { compute, ..SimulationConfig::default() };
        Controller::new(
            &config,
            CellLayout::fit(500, 500, 25, 25),
            FrameRecorder::new(ColorConfig::default()),
            FrameTimer::new(),
            StdRng::seed_from_u64(77),
        )
        .unwrap()
    };
    let mut serial = make(life_canvas::ComputeMode::Serial);
    let mut parallel = make(life_canvas::ComputeMode::Parallel);
    serial.populate_random();
    parallel.populate_random();
    for _ in 0..10 {
        serial.step();
        parallel.step();
    }
    assert_eq!(serial.current_grid(), parallel.current_grid());
}
