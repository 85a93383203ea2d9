use std::collections::HashSet;

use glam::Vec2;

use crate::traits::{InputSource, Key};

/// Plain input state fed by the host, readable as an `InputSource`
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    /// Keys that went down since the last `reset_frame`
    keys_pressed: HashSet<Key>,
    mouse_delta: Vec2,
    elapsed: f32,
    focused: bool,
    screen_size: (u32, u32),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key press
    pub fn press_key(&mut self, key: Key) {
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    /// Handle key release
    pub fn release_key(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    /// Add mouse delta movement
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    pub fn set_elapsed(&mut self, seconds: f32) {
        self.elapsed = seconds;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // releases are not delivered to unfocused windows
            self.keys_down.clear();
        }
    }

    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        self.screen_size = (width, height);
    }

    /// Reset per-frame state (mouse delta, pressed keys)
    pub fn reset_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.keys_pressed.clear();
    }
}

impl InputSource for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    fn elapsed_seconds(&self) -> f32 {
        self.elapsed
    }

    fn window_has_focus(&self) -> bool {
        self.focused
    }

    fn screen_size(&self) -> (u32, u32) {
        self.screen_size
    }
}
