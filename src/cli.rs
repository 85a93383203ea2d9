// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::settings::CameraSettings;

#[derive(Parser, Debug, Clone)]
#[command(name = "first-person-camera")]
#[command(about = "First-person camera demo", long_about = None)]
pub struct Cli {
    /// TOML camera settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    pub fov: f32,

    /// Move along the full look direction instead of staying level
    #[arg(long)]
    pub flight: bool,

    /// Disable mouse look
    #[arg(long = "no-mouse")]
    pub no_mouse: bool,

    /// Far clipping plane distance
    #[arg(long = "far-plane")]
    pub far_plane: Option<f64>,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

impl Cli {
    /// Settings from `--config` (or defaults) with command-line overrides
    pub fn settings(&self) -> Result<CameraSettings> {
        let mut settings = match &self.config {
            Some(path) => CameraSettings::load(path)?,
            None => CameraSettings::default(),
        };

        if self.flight {
            settings.allow_flight = true;
        }
        if self.no_mouse {
            settings.use_mouse = false;
        }
        if let Some(far_plane) = self.far_plane {
            settings.far_plane = far_plane;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["first-person-camera"]);
        assert_eq!(cli.fov, 45.0);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert!(cli.config.is_none());

        let settings = cli.settings().unwrap();
        assert_eq!(settings, CameraSettings::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "first-person-camera",
            "--flight",
            "--no-mouse",
            "--far-plane",
            "250",
            "--fov",
            "70",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(cli.fov, 70.0);
        assert!(settings.allow_flight);
        assert!(!settings.use_mouse);
        assert_eq!(settings.far_plane, 250.0);
    }

    #[test]
    fn test_invalid_far_plane_rejected() {
        let cli = Cli::parse_from(["first-person-camera", "--far-plane", "0.001"]);
        assert!(cli.settings().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["first-person-camera", "--config", "/nonexistent/camera.toml"]);
        assert!(cli.settings().is_err());
    }
}
