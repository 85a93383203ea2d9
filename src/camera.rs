//! First-person camera: state, lifecycle and the per-frame update.

use glam::{Vec2, Vec3};

use crate::controls::CameraControl;
use crate::frame::FrameInput;
use crate::math::{rotate_zyx, Ray};
use crate::settings::CameraSettings;
use crate::traits::{CameraView, CursorControl, InputSource};
use crate::types::{CameraUniform, Projection, RenderCamera};
use crate::view::projection_matrix;

/// Bobble phase is divided by this before taking the sine
const VIEW_BOBBLE_DAMPEN: f32 = 8.0;

/// Distance from the eye to the look target
const TARGET_DISTANCE: f32 = 1.0;

/// First-person camera configuration and runtime pose
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub settings: CameraSettings,
    /// Base of the camera on the floor; the eye sits `eye_height` above it.
    /// Never moved by view bobble.
    pub position: Vec3,
    /// Field of view in degrees: x derived from y and the window aspect
    pub fov: Vec2,
    /// x = yaw, y = pitch, radians
    pub view_angles: Vec2,
    /// Movement direction, level unless flight is allowed
    pub forward: Vec3,
    pub right: Vec3,
    pub current_bobble: f32,
    pub focused: bool,
    pub view_camera: RenderCamera,
}

impl CameraState {
    /// Camera with default settings
    pub fn new(
        fov_y: f32,
        position: Vec3,
        input: &impl InputSource,
        cursor: &impl CursorControl,
    ) -> Self {
        Self::with_settings(CameraSettings::default(), fov_y, position, input, cursor)
    }

    pub fn with_settings(
        settings: CameraSettings,
        fov_y: f32,
        position: Vec3,
        input: &impl InputSource,
        cursor: &impl CursorControl,
    ) -> Self {
        let eye = position + Vec3::Y * settings.eye_height;
        let view_camera = RenderCamera {
            position: eye,
            target: eye + Vec3::Z * TARGET_DISTANCE,
            up: Vec3::Y,
            fovy: fov_y,
            projection: Projection::Perspective,
        };

        let use_mouse = settings.use_mouse;
        let mut camera = Self {
            settings,
            position,
            fov: Vec2::new(0.0, fov_y),
            view_angles: Vec2::ZERO,
            forward: Vec3::Z,
            right: Vec3::NEG_X,
            current_bobble: 0.0,
            focused: input.window_has_focus(),
            view_camera,
        };

        camera.resize_view(input.screen_size());
        camera.set_mouse_capture(use_mouse, input, cursor);
        log::debug!(
            "First-person camera at {:?}, fov {}x{}",
            position,
            camera.fov.x,
            camera.fov.y
        );
        camera
    }

    /// Turn mouse look on or off, capturing the cursor while the window has
    /// focus
    pub fn set_mouse_capture(
        &mut self,
        enabled: bool,
        input: &impl InputSource,
        cursor: &impl CursorControl,
    ) {
        self.settings.use_mouse = enabled;

        if !input.window_has_focus() {
            return;
        }
        if enabled {
            cursor.capture_cursor();
        } else {
            cursor.release_cursor();
        }
    }

    /// Recompute the horizontal field of view for a new window size
    pub fn resize_view(&mut self, (width, height): (u32, u32)) {
        self.fov.y = self.view_camera.fovy;

        if height != 0 {
            self.fov.x = self.fov.y * (width as f32 / height as f32);
        }
    }

    /// Advance the camera by one frame
    pub fn update(&mut self, input: &FrameInput, cursor: &impl CursorControl) {
        self.track_focus(input.focused, cursor);

        let front = self.move_amount(input, CameraControl::MoveFront, self.settings.move_speed.z);
        let back = self.move_amount(input, CameraControl::MoveBack, self.settings.move_speed.z);
        let right = self.move_amount(input, CameraControl::MoveRight, self.settings.move_speed.x);
        let left = self.move_amount(input, CameraControl::MoveLeft, self.settings.move_speed.x);
        let up = self.move_amount(input, CameraControl::MoveUp, self.settings.move_speed.y);
        let down = self.move_amount(input, CameraControl::MoveDown, self.settings.move_speed.y);

        let look = self.apply_rotation(input);
        self.derive_axes(look);

        let forward_amount = front - back;
        let strafe_amount = right - left;
        self.position += self.forward * forward_amount + self.right * strafe_amount;
        self.position.y += up - down;

        let eye_offset = self.apply_bobble(forward_amount.abs().max(strafe_amount.abs()));

        self.view_camera.position = self.position;
        self.view_camera.position.y += eye_offset;
        self.view_camera.target = self.view_camera.position + look;
    }

    /// Move the base position, keeping the current look direction
    pub fn set_position(&mut self, position: Vec3) {
        let look = self.view_camera.target - self.view_camera.position;
        self.position = position;
        self.view_camera.position = position + Vec3::Y * self.settings.eye_height;
        self.view_camera.target = self.view_camera.position + look;
    }

    /// Ray from the eye through the center of the view
    pub fn view_ray(&self) -> Ray {
        Ray::new(self.view_camera.position, self.view_camera.look_direction())
    }

    pub fn view_angles(&self) -> Vec2 {
        self.view_angles
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// GPU uniform for the current pose
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        let camera = &self.view_camera;
        let proj = projection_matrix(camera, self.settings.near_plane, self.settings.far_plane, aspect);

        CameraUniform {
            view_proj: (proj * camera.view_matrix()).to_cols_array_2d(),
            position: camera.position.to_array(),
            _pad1: 0.0,
            forward: camera.look_direction().to_array(),
            _pad2: 0.0,
            right: self.right.to_array(),
            _pad3: 0.0,
            up: camera.up.to_array(),
            fovy: camera.fovy,
        }
    }

    fn track_focus(&mut self, focused: bool, cursor: &impl CursorControl) {
        if focused == self.focused {
            return;
        }
        self.focused = focused;

        if self.settings.use_mouse {
            log::debug!("Window focus changed to {focused}, updating cursor capture");
            if focused {
                cursor.capture_cursor();
            } else {
                cursor.release_cursor();
            }
        }
    }

    /// Unbound controls never count as held
    fn is_held(&self, input: &FrameInput, control: CameraControl) -> bool {
        self.settings.controls.get(control).is_some() && input.is_down(control)
    }

    fn held_time(&self, input: &FrameInput, control: CameraControl) -> f32 {
        if self.is_held(input, control) {
            input.elapsed
        } else {
            0.0
        }
    }

    /// Distance moved along one axis this frame
    fn move_amount(&self, input: &FrameInput, control: CameraControl, speed: f32) -> f32 {
        let factor = if self.is_held(input, CameraControl::Sprint) { 2.0 } else { 1.0 };

        speed * self.held_time(input, control) * factor
    }

    /// Degrees turned by one control this frame; sprint never scales turning
    fn turn_amount(&self, input: &FrameInput, control: CameraControl, speed: f32) -> f32 {
        speed * self.held_time(input, control)
    }

    /// Apply key or mouse look, returning the pitch-including look direction
    fn apply_rotation(&mut self, input: &FrameInput) -> Vec3 {
        let turn_speed = self.settings.turn_speed;
        let turn = self.turn_amount(input, CameraControl::TurnRight, turn_speed.x)
            - self.turn_amount(input, CameraControl::TurnLeft, turn_speed.x);
        let tilt = self.turn_amount(input, CameraControl::TurnUp, turn_speed.y)
            - self.turn_amount(input, CameraControl::TurnDown, turn_speed.y);

        let mouse_look = self.settings.use_mouse && self.focused;
        let mouse = input.mouse_delta / self.settings.mouse_sensitivity;

        if turn != 0.0 {
            self.view_angles.x -= turn.to_radians();
        } else if mouse_look {
            self.view_angles.x += mouse.x;
        }

        if tilt != 0.0 {
            self.view_angles.y += tilt.to_radians();
        } else if mouse_look {
            self.view_angles.y += mouse.y;
        }

        let min = self.settings.min_view_y.to_radians();
        let max = self.settings.max_view_y.to_radians();
        self.view_angles.y = self.view_angles.y.max(min).min(max);

        rotate_zyx(Vec3::new(self.view_angles.y, -self.view_angles.x, 0.0)) * Vec3::Z
    }

    /// Recompute `forward` and `right` from the look direction
    fn derive_axes(&mut self, look: Vec3) {
        let level = rotate_zyx(Vec3::new(0.0, -self.view_angles.x, 0.0)) * Vec3::Z;

        self.forward = if self.settings.allow_flight { look } else { level };
        self.right = Vec3::new(-self.forward.z, 0.0, self.forward.x)
            .try_normalize()
            .unwrap_or(Vec3::new(-level.z, 0.0, level.x));
    }

    /// Advance the bobble phase and return the eye offset above the base
    fn apply_bobble(&mut self, swing: f32) -> f32 {
        let settings = &self.settings;

        if settings.view_bobble_freq <= 0.0 {
            self.current_bobble = 0.0;
            self.view_camera.up.x = 0.0;
            self.view_camera.up.z = 0.0;
            return settings.eye_height;
        }

        self.current_bobble += swing * settings.view_bobble_freq;

        let waver = (self.current_bobble / (VIEW_BOBBLE_DAMPEN * 2.0)).sin()
            * settings.view_bobble_waver_magnitude;
        self.view_camera.up.x = waver;
        self.view_camera.up.z = -waver;

        settings.eye_height - (self.current_bobble / VIEW_BOBBLE_DAMPEN).sin() * settings.view_bobble_magnitude
    }
}

impl CameraView for CameraState {
    fn render_camera(&self) -> RenderCamera {
        self.view_camera
    }

    /// Base position on the floor
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

/// Reset `camera` to defaults at `position`; no-op without a camera
pub fn init(
    camera: Option<&mut CameraState>,
    fov_y: f32,
    position: Vec3,
    input: &impl InputSource,
    cursor: &impl CursorControl,
) {
    if let Some(camera) = camera {
        *camera = CameraState::new(fov_y, position, input, cursor);
    }
}

pub fn set_mouse_capture(
    camera: Option<&mut CameraState>,
    enabled: bool,
    input: &impl InputSource,
    cursor: &impl CursorControl,
) {
    if let Some(camera) = camera {
        camera.set_mouse_capture(enabled, input, cursor);
    }
}

pub fn resize_view(camera: Option<&mut CameraState>, screen_size: (u32, u32)) {
    if let Some(camera) = camera {
        camera.resize_view(screen_size);
    }
}

pub fn update(camera: Option<&mut CameraState>, input: &FrameInput, cursor: &impl CursorControl) {
    if let Some(camera) = camera {
        camera.update(input, cursor);
    }
}
