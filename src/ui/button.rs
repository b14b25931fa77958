use macroquad::prelude::*;

use super::UiAction;

/// Button UI component with hover, click detection and a disabled state
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: UiAction,
    enabled: bool,
    color: Color,
    hover_color: Color,
    disabled_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: UiAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
            enabled: true,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
            disabled_color: Color::from_rgba(60, 60, 60, 255),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn action(&self) -> UiAction {
        self.action
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect, greyed out when disabled
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if !self.enabled {
            self.disabled_color
        } else if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };
        let text_color = if self.enabled { WHITE } else { GRAY };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, text_color);

        let label = self.action.label();
        let text_size = measure_text(label, None, 20, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            text_color,
        );
    }

    /// Check if an enabled button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
