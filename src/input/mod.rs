use macroquad::prelude::*;

use crate::application::{Controller, TimerService};
use crate::rendering::RenderSink;
use crate::ui::{Button, UiAction};

/// Keyboard shortcuts for each action
const KEY_ACTIONS: [(KeyCode, UiAction); 3] = [
    (KeyCode::S, UiAction::Step),
    (KeyCode::R, UiAction::Random),
    (KeyCode::G, UiAction::Gliders),
];

/// Collect the actions requested this frame by clicks and key presses
pub fn poll_actions(buttons: &[Button], mouse_pos: (f32, f32), running: bool) -> Vec<UiAction> {
    let clicked = buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(|btn| btn.action());

    let keyed = KEY_ACTIONS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action);

    // Space toggles between run and stop
    let toggle = is_key_pressed(KeyCode::Space)
        .then_some(if running { UiAction::Stop } else { UiAction::Run });

    clicked.chain(keyed).chain(toggle).collect()
}

/// Apply one action, ignoring it if the current run state disables it
pub fn apply_action<S, T, R>(controller: &mut Controller<S, T, R>, action: UiAction)
where
    S: RenderSink,
    T: TimerService,
    R: ::rand::Rng,
{
    if !action.is_enabled(controller.is_running()) {
        return;
    }
    match action {
        UiAction::Step => controller.step(),
        UiAction::Run => controller.start(),
        UiAction::Stop => controller.stop(),
        UiAction::Random => controller.populate_random(),
        UiAction::Gliders => controller.populate_gliders(),
    }
}
