use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use glam::Vec2;

use super::clock::Clock;
use super::input_state::InputState;
use crate::traits::{InputSource, Key};

macro_rules! keycode_map {
    ($($variant:ident),* $(,)?) => {
        /// Map a winit key code to a bindable key
        pub fn key_from_keycode(keycode: KeyCode) -> Option<Key> {
            match keycode {
                $(KeyCode::$variant => Some(Key::$variant),)*
                _ => None,
            }
        }
    };
}

keycode_map! {
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
    KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    ArrowLeft, ArrowRight, ArrowUp, ArrowDown,
    Space, ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft,
    Tab, Enter, Escape, F1, F2,
}

/// Adapter that bridges winit events to `InputSource`
///
/// Feed it every window and device event, call `begin_frame` before the
/// camera update and `end_frame` after it.
#[derive(Debug, Default)]
pub struct WinitController {
    state: InputState,
    clock: Clock,
    /// Last cursor position, for the `CursorMoved` fallback
    cursor_position: Option<Vec2>,
    /// Raw motion arrived at least once; cursor deltas are ignored from then on
    raw_motion: bool,
}

impl WinitController {
    pub fn new(screen_size: (u32, u32), focused: bool) -> Self {
        let mut state = InputState::new();
        state.set_screen_size(screen_size.0, screen_size.1);
        state.set_focused(focused);

        Self {
            state,
            ..Default::default()
        }
    }

    /// Process a winit `WindowEvent` and update internal state
    pub fn process_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    self.process_key(keycode, event.state);
                }
            }
            WindowEvent::Focused(focused) => {
                log::debug!("Window focus: {focused}");
                self.state.set_focused(*focused);
                self.cursor_position = None;
            }
            WindowEvent::Resized(size) => {
                self.state.set_screen_size(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                if let Some(previous) = self.cursor_position {
                    if !self.raw_motion {
                        let delta = position - previous;
                        self.state.add_mouse_delta(delta.x, delta.y);
                    }
                }
                self.cursor_position = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
            }
            _ => {}
        }
    }

    /// Process a winit `DeviceEvent`; raw mouse motion drives mouse look
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.raw_motion = true;
            self.state.add_mouse_delta(delta.0 as f32, delta.1 as f32);
        }
    }

    /// Apply a key transition; unmapped key codes are ignored
    pub fn process_key(&mut self, keycode: KeyCode, state: ElementState) {
        let Some(key) = key_from_keycode(keycode) else {
            return;
        };
        match state {
            ElementState::Pressed => self.state.press_key(key),
            ElementState::Released => self.state.release_key(key),
        }
    }

    /// Advance the frame clock; call once before polling
    pub fn begin_frame(&mut self) -> f32 {
        let elapsed = self.clock.tick();
        self.state.set_elapsed(elapsed);
        elapsed
    }

    /// Drop per-frame state (mouse delta, pressed keys)
    pub fn end_frame(&mut self) {
        self.state.reset_frame();
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }
}

impl InputSource for WinitController {
    fn is_key_down(&self, key: Key) -> bool {
        self.state.is_key_down(key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.state.is_key_pressed(key)
    }

    fn mouse_delta(&self) -> Vec2 {
        self.state.mouse_delta()
    }

    fn elapsed_seconds(&self) -> f32 {
        self.state.elapsed_seconds()
    }

    fn window_has_focus(&self) -> bool {
        self.state.window_has_focus()
    }

    fn screen_size(&self) -> (u32, u32) {
        self.state.screen_size()
    }
}
