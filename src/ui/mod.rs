mod button;

pub use button::Button;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_GAP: f32 = 10.0;
const BUTTONS_TOP: f32 = 20.0;

/// The operations a user can trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Step,
    Run,
    Stop,
    Random,
    Gliders,
}

impl UiAction {
    /// Buttons in panel order
    pub const ALL: [UiAction; 5] = [
        UiAction::Step,
        UiAction::Run,
        UiAction::Stop,
        UiAction::Random,
        UiAction::Gliders,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UiAction::Step => "Step",
            UiAction::Run => "Run",
            UiAction::Stop => "Stop",
            UiAction::Random => "Random",
            UiAction::Gliders => "Gliders",
        }
    }

    /// While running only Stop is available; while stopped everything but Stop
    pub fn is_enabled(self, running: bool) -> bool {
        match self {
            UiAction::Stop => running,
            _ => !running,
        }
    }
}

/// Create the panel buttons, enabled according to the run state
pub fn create_buttons(panel_x: f32, running: bool) -> Vec<Button> {
    UiAction::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(panel_x, y, PANEL_WIDTH, BUTTON_HEIGHT, action)
                .with_enabled(action.is_enabled(running))
        })
        .collect()
}
