use first_person_camera::traits::Key;
use first_person_camera::{CameraControl, CameraError, CameraSettings};
use glam::{Vec2, Vec3};

#[cfg(test)]
mod settings_file_tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera.toml");

        let mut settings = CameraSettings::default();
        settings.move_speed = Vec3::new(2.0, 1.0, 8.0);
        settings.turn_speed = Vec2::new(120.0, 60.0);
        settings.view_bobble_freq = 1.5;
        settings.allow_flight = true;
        settings.far_plane = 2500.0;
        settings.controls.set(CameraControl::MoveUp, Some(Key::Space));
        settings.controls.set(CameraControl::Sprint, None);

        settings.save(&path).unwrap();
        let loaded = CameraSettings::load(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("player").join("camera.toml");

        CameraSettings::default().save(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_saved_file_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera.toml");
        let mut settings = CameraSettings::default();
        settings.controls.set(CameraControl::MoveDown, None);

        settings.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.contains("[controls]"));
        assert!(text.contains("move_front = \"w\""));
        assert!(text.contains("move_down = \"none\""));
        assert!(text.contains("sprint = \"left_shift\""));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera.toml");
        std::fs::write(
            &path,
            "mouse_sensitivity = 300.0\n\n[controls]\nturn_left = \"j\"\n",
        )
        .unwrap();

        let settings = CameraSettings::load(&path).unwrap();

        assert_eq!(settings.mouse_sensitivity, 300.0);
        assert_eq!(settings.controls.get(CameraControl::TurnLeft), Some(Key::KeyJ));
        assert_eq!(settings.controls.get(CameraControl::MoveFront), Some(Key::KeyW));
        assert_eq!(settings.eye_height, 0.5);
        assert_eq!(settings.far_plane, 1000.0);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        match CameraSettings::load(&path) {
            Err(CameraError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera.toml");
        std::fs::write(&path, "move_speed = \"fast\"\n").unwrap();

        assert!(matches!(CameraSettings::load(&path), Err(CameraError::Parse(_))));
    }

    #[test]
    fn test_unknown_key_name() {
        let err = CameraSettings::from_toml("[controls]\nmove_front = \"hyper\"\n").unwrap_err();

        assert!(matches!(err, CameraError::Parse(_)));
        assert!(err.to_string().contains("hyper"));
    }

    #[test]
    fn test_inverted_planes_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera.toml");
        std::fs::write(&path, "near_plane = 10.0\nfar_plane = 1.0\n").unwrap();

        assert!(matches!(
            CameraSettings::load(&path),
            Err(CameraError::InvalidSettings(_))
        ));
    }
}
