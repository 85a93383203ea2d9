use glam::Vec2;

use crate::controls::{CameraControl, ControlBindings};
use crate::traits::InputSource;

/// Input snapshot consumed by one camera update
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Down state per control, indexed by `CameraControl::index`
    pub controls_down: [bool; CameraControl::COUNT],
    pub mouse_delta: Vec2,
    /// Seconds since the previous frame
    pub elapsed: f32,
    pub focused: bool,
    pub screen_size: (u32, u32),
}

impl FrameInput {
    /// Empty frame with the given timing and focus
    pub fn new(elapsed: f32, focused: bool) -> Self {
        Self {
            elapsed,
            focused,
            ..Default::default()
        }
    }

    /// Poll the input source for every bound control
    pub fn poll(bindings: &ControlBindings, source: &impl InputSource) -> Self {
        let mut controls_down = [false; CameraControl::COUNT];
        for control in CameraControl::ALL {
            controls_down[control.index()] = bindings
                .get(control)
                .is_some_and(|key| source.is_key_down(key));
        }

        Self {
            controls_down,
            mouse_delta: source.mouse_delta(),
            elapsed: source.elapsed_seconds(),
            focused: source.window_has_focus(),
            screen_size: source.screen_size(),
        }
    }

    pub fn is_down(&self, control: CameraControl) -> bool {
        self.controls_down[control.index()]
    }

    pub fn with_control(mut self, control: CameraControl, down: bool) -> Self {
        self.controls_down[control.index()] = down;
        self
    }

    pub fn with_mouse_delta(mut self, delta: Vec2) -> Self {
        self.mouse_delta = delta;
        self
    }

    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_size = (width, height);
        self
    }
}
