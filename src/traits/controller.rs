use std::fmt;
use std::str::FromStr;

use glam::Vec2;

macro_rules! keys {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Input key identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant),*
        }

        impl Key {
            /// Every key the camera can be bound to
            pub const ALL: &'static [Key] = &[$(Key::$variant),*];

            /// Stable lowercase name used in settings files
            pub const fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name),*
                }
            }
        }
    };
}

keys! {
    KeyA => "a", KeyB => "b", KeyC => "c", KeyD => "d", KeyE => "e",
    KeyF => "f", KeyG => "g", KeyH => "h", KeyI => "i", KeyJ => "j",
    KeyK => "k", KeyL => "l", KeyM => "m", KeyN => "n", KeyO => "o",
    KeyP => "p", KeyQ => "q", KeyR => "r", KeyS => "s", KeyT => "t",
    KeyU => "u", KeyV => "v", KeyW => "w", KeyX => "x", KeyY => "y",
    KeyZ => "z",
    ArrowLeft => "left",
    ArrowRight => "right",
    ArrowUp => "up",
    ArrowDown => "down",
    Space => "space",
    ShiftLeft => "left_shift",
    ShiftRight => "right_shift",
    ControlLeft => "left_control",
    ControlRight => "right_control",
    AltLeft => "left_alt",
    Tab => "tab",
    Enter => "enter",
    Escape => "escape",
    F1 => "f1",
    F2 => "f2",
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a key name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key name `{0}`")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownKey(wanted.to_owned()))
    }
}

/// Per-frame input polled by the camera
pub trait InputSource {
    /// Check if key is currently held
    fn is_key_down(&self, key: Key) -> bool;

    /// Check if key went down this frame
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Relative mouse movement since the previous frame, in pixels
    fn mouse_delta(&self) -> Vec2;

    /// Seconds elapsed since the previous frame
    fn elapsed_seconds(&self) -> f32;

    /// Whether the host window currently has input focus
    fn window_has_focus(&self) -> bool;

    /// Window size in physical pixels
    fn screen_size(&self) -> (u32, u32);
}
