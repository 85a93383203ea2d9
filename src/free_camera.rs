//! Flight-sim style camera driven by direct method calls.

use glam::{Mat3, Vec3};

use crate::math::{rotate_about_axis, wrap_degrees};
use crate::traits::CameraView;
use crate::types::RenderCamera;

/// Free camera: a position plus a forward/up frame, rotated relative to
/// itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeCamera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

impl FreeCamera {
    /// Camera at `position`; looks along +Y for Z-up worlds, +Z otherwise
    pub fn new(position: Vec3, up: Vec3) -> Self {
        let forward = if up.z.abs() > 0.1 { Vec3::Y } else { Vec3::Z };
        Self {
            position,
            forward,
            up,
        }
    }

    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.forward = (target - self.position).normalize_or_zero();
        self.up = up.normalize_or_zero();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.forward * distance;
    }

    pub fn move_up(&mut self, distance: f32) {
        self.position += self.up * distance;
    }

    /// `forward x up`; not normalized
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up)
    }

    /// Turn left/right around the camera's own up axis
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.forward = rotate_about_axis(self.forward, self.up, degrees.to_radians()).normalize_or_zero();
    }

    /// Tilt around the right axis; positive angles pitch the nose down
    pub fn rotate_pitch(&mut self, degrees: f32) {
        let angle = -wrap_degrees(degrees).to_radians();
        let right = self.right();

        self.up = rotate_about_axis(self.up, right, angle).normalize_or_zero();
        self.forward = rotate_about_axis(self.forward, right, angle).normalize_or_zero();
    }

    pub fn rotate_roll(&mut self, degrees: f32) {
        self.up = rotate_about_axis(self.up, self.forward, degrees.to_radians()).normalize_or_zero();
    }

    /// Rotate the whole frame around world Y (`use_y`) or world Z
    pub fn rotate_heading(&mut self, degrees: f32, use_y: bool) {
        let rotation = if use_y {
            Mat3::from_rotation_y(degrees.to_radians())
        } else {
            Mat3::from_rotation_z(degrees.to_radians())
        };

        self.up = (rotation * self.up).normalize_or_zero();
        self.forward = (rotation * self.forward).normalize_or_zero();
    }

    /// Copy the pose into an existing render camera, keeping its fov and
    /// projection
    pub fn to_camera(&self, camera: &mut RenderCamera) {
        camera.position = self.position;
        camera.target = self.position + self.forward;
        camera.up = self.up;
    }
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y)
    }
}

impl CameraView for FreeCamera {
    fn render_camera(&self) -> RenderCamera {
        let mut camera = RenderCamera::default();
        self.to_camera(&mut camera);
        camera
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}
