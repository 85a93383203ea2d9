//! Tunable camera parameters with TOML persistence.
//!
//! All fields use `#[serde(default)]`, so a settings file only needs the
//! values it overrides:
//!
//! ```toml
//! move_speed = [5.0, 1.0, 10.0]
//! far_plane = 5000.0
//!
//! [controls]
//! move_up = "space"
//! move_down = "none"
//! ```

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::controls::ControlBindings;
use crate::error::{CameraError, Result};

/// Configuration half of the first-person camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Units per second: x = sidestep, y = rise/fall, z = forward
    pub move_speed: Vec3,
    /// Degrees per second for key look: x = yaw, y = pitch
    pub turn_speed: Vec2,
    pub use_mouse: bool,
    /// Mouse pixels per radian of look; larger is slower
    pub mouse_sensitivity: f32,
    /// Pitch clamp in degrees
    pub min_view_y: f32,
    pub max_view_y: f32,
    /// Zero disables view bobble
    pub view_bobble_freq: f32,
    pub view_bobble_magnitude: f32,
    pub view_bobble_waver_magnitude: f32,
    /// Eye height above the base position
    pub eye_height: f32,
    /// Movement follows look pitch when set
    pub allow_flight: bool,
    pub near_plane: f64,
    pub far_plane: f64,
    pub controls: ControlBindings,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: Vec3::ONE,
            turn_speed: Vec2::splat(90.0),
            use_mouse: true,
            mouse_sensitivity: 600.0,
            min_view_y: -89.0,
            max_view_y: 89.0,
            view_bobble_freq: 0.0,
            view_bobble_magnitude: 0.02,
            view_bobble_waver_magnitude: 0.002,
            eye_height: 0.5,
            allow_flight: false,
            near_plane: 0.01,
            far_plane: 1000.0,
            controls: ControlBindings::default(),
        }
    }
}

impl CameraSettings {
    /// Load settings from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CameraError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&content)?;
        log::debug!("Loaded camera settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a TOML file (pretty-printed)
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        let io_err = |source| CameraError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, content).map_err(io_err)
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.near_plane > 0.0) {
            return Err(CameraError::InvalidSettings(format!(
                "near_plane must be positive, got {}",
                self.near_plane
            )));
        }
        if self.near_plane >= self.far_plane {
            return Err(CameraError::InvalidSettings(format!(
                "near_plane ({}) must be less than far_plane ({})",
                self.near_plane, self.far_plane
            )));
        }
        if self.min_view_y > self.max_view_y {
            return Err(CameraError::InvalidSettings(format!(
                "min_view_y ({}) exceeds max_view_y ({})",
                self.min_view_y, self.max_view_y
            )));
        }
        if !(self.mouse_sensitivity > 0.0) {
            return Err(CameraError::InvalidSettings(format!(
                "mouse_sensitivity must be positive, got {}",
                self.mouse_sensitivity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::CameraControl;
    use crate::traits::Key;

    #[test]
    fn default_round_trips_through_toml() {
        let settings = CameraSettings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed = CameraSettings::from_toml(&text).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let text = r#"
move_speed = [5.0, 1.0, 10.0]
far_plane = 5000.0

[controls]
move_down = "none"
"#;
        let settings = CameraSettings::from_toml(text).unwrap();

        assert_eq!(settings.move_speed, Vec3::new(5.0, 1.0, 10.0));
        assert_eq!(settings.far_plane, 5000.0);
        assert_eq!(settings.controls.get(CameraControl::MoveDown), None);
        // Everything else should be default
        assert_eq!(settings.controls.get(CameraControl::MoveUp), Some(Key::KeyE));
        assert_eq!(settings.mouse_sensitivity, 600.0);
        assert_eq!(settings.near_plane, 0.01);
    }

    #[test]
    fn validate_rejects_inverted_planes() {
        let settings = CameraSettings {
            near_plane: 10.0,
            far_plane: 1.0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(CameraError::InvalidSettings(_))));
    }

    #[test]
    fn validate_rejects_non_positive_near() {
        let settings = CameraSettings {
            near_plane: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_view_clamp() {
        let settings = CameraSettings {
            min_view_y: 45.0,
            max_view_y: -45.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_sensitivity() {
        let settings = CameraSettings {
            mouse_sensitivity: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = CameraSettings::from_toml("move_speed = \"fast\"");
        assert!(matches!(result, Err(CameraError::Parse(_))));
    }
}
