//! Named camera actions and the keys bound to them.

use serde::{Deserialize, Serialize};

use crate::traits::Key;

/// Actions the first-person camera responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraControl {
    MoveFront,
    MoveBack,
    MoveRight,
    MoveLeft,
    MoveUp,
    MoveDown,
    TurnLeft,
    TurnRight,
    TurnUp,
    TurnDown,
    Sprint,
}

impl CameraControl {
    pub const COUNT: usize = 11;

    pub const ALL: [CameraControl; Self::COUNT] = [
        CameraControl::MoveFront,
        CameraControl::MoveBack,
        CameraControl::MoveRight,
        CameraControl::MoveLeft,
        CameraControl::MoveUp,
        CameraControl::MoveDown,
        CameraControl::TurnLeft,
        CameraControl::TurnRight,
        CameraControl::TurnUp,
        CameraControl::TurnDown,
        CameraControl::Sprint,
    ];

    /// Position of this control in per-control arrays
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Key bound to each camera action; `None` disables the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlBindings {
    #[serde(with = "binding")]
    pub move_front: Option<Key>,
    #[serde(with = "binding")]
    pub move_back: Option<Key>,
    #[serde(with = "binding")]
    pub move_right: Option<Key>,
    #[serde(with = "binding")]
    pub move_left: Option<Key>,
    #[serde(with = "binding")]
    pub move_up: Option<Key>,
    #[serde(with = "binding")]
    pub move_down: Option<Key>,
    #[serde(with = "binding")]
    pub turn_left: Option<Key>,
    #[serde(with = "binding")]
    pub turn_right: Option<Key>,
    #[serde(with = "binding")]
    pub turn_up: Option<Key>,
    #[serde(with = "binding")]
    pub turn_down: Option<Key>,
    #[serde(with = "binding")]
    pub sprint: Option<Key>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            move_front: Some(Key::KeyW),
            move_back: Some(Key::KeyS),
            move_right: Some(Key::KeyD),
            move_left: Some(Key::KeyA),
            move_up: Some(Key::KeyE),
            move_down: Some(Key::KeyQ),
            turn_left: Some(Key::ArrowLeft),
            turn_right: Some(Key::ArrowRight),
            turn_up: Some(Key::ArrowUp),
            turn_down: Some(Key::ArrowDown),
            sprint: Some(Key::ShiftLeft),
        }
    }
}

impl ControlBindings {
    /// Bindings with every action disabled
    pub const fn unbound() -> Self {
        Self {
            move_front: None,
            move_back: None,
            move_right: None,
            move_left: None,
            move_up: None,
            move_down: None,
            turn_left: None,
            turn_right: None,
            turn_up: None,
            turn_down: None,
            sprint: None,
        }
    }

    pub fn get(&self, control: CameraControl) -> Option<Key> {
        *self.slot(control)
    }

    pub fn set(&mut self, control: CameraControl, key: Option<Key>) {
        *self.slot_mut(control) = key;
    }

    /// First action bound to `key`, if any
    pub fn action_for(&self, key: Key) -> Option<CameraControl> {
        CameraControl::ALL
            .into_iter()
            .find(|control| self.get(*control) == Some(key))
    }

    fn slot(&self, control: CameraControl) -> &Option<Key> {
        match control {
            CameraControl::MoveFront => &self.move_front,
            CameraControl::MoveBack => &self.move_back,
            CameraControl::MoveRight => &self.move_right,
            CameraControl::MoveLeft => &self.move_left,
            CameraControl::MoveUp => &self.move_up,
            CameraControl::MoveDown => &self.move_down,
            CameraControl::TurnLeft => &self.turn_left,
            CameraControl::TurnRight => &self.turn_right,
            CameraControl::TurnUp => &self.turn_up,
            CameraControl::TurnDown => &self.turn_down,
            CameraControl::Sprint => &self.sprint,
        }
    }

    fn slot_mut(&mut self, control: CameraControl) -> &mut Option<Key> {
        match control {
            CameraControl::MoveFront => &mut self.move_front,
            CameraControl::MoveBack => &mut self.move_back,
            CameraControl::MoveRight => &mut self.move_right,
            CameraControl::MoveLeft => &mut self.move_left,
            CameraControl::MoveUp => &mut self.move_up,
            CameraControl::MoveDown => &mut self.move_down,
            CameraControl::TurnLeft => &mut self.turn_left,
            CameraControl::TurnRight => &mut self.turn_right,
            CameraControl::TurnUp => &mut self.turn_up,
            CameraControl::TurnDown => &mut self.turn_down,
            CameraControl::Sprint => &mut self.sprint,
        }
    }
}

/// Serializes a binding as its key name, `"none"` when unbound
mod binding {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::traits::Key;

    const UNBOUND: &str = "none";

    pub fn serialize<S: Serializer>(key: &Option<Key>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(key.map_or(UNBOUND, Key::name))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Key>, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name.trim().eq_ignore_ascii_case(UNBOUND) {
            return Ok(None);
        }
        name.parse::<Key>().map(Some).map_err(D::Error::custom)
    }
}
