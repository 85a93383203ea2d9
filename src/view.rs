//! 3D drawing scope with the camera's own near and far planes.
//!
//! The host renderer's stock 3D mode pins the frustum to a fixed near cull
//! distance. `begin_view` installs the projection from the camera's
//! `near_plane`/`far_plane` instead. `end_view` runs the renderer's own
//! teardown and then restores the caller's model-view.

use glam::Mat4;

use crate::camera::CameraState;
use crate::math::{frustum_matrix, ortho_matrix};
use crate::traits::{MatrixMode, MatrixStack};
use crate::types::{Projection, RenderCamera};

/// Near distance the frustum width and height are measured at
pub const NEAR_CULL_DISTANCE: f64 = 0.01;

/// Frustum extents `(half_width, half_height)` for a render camera
fn half_extents(camera: &RenderCamera, aspect: f64) -> (f64, f64) {
    let top = match camera.projection {
        Projection::Perspective => NEAR_CULL_DISTANCE * (f64::from(camera.fovy) * 0.5).to_radians().tan(),
        Projection::Orthographic => f64::from(camera.fovy) / 2.0,
    };
    (top * aspect, top)
}

/// Width over height, treating a zero-height window as one pixel tall
pub fn aspect_ratio((width, height): (u32, u32)) -> f64 {
    f64::from(width) / f64::from(height.max(1))
}

/// Projection `begin_view` installs, as a matrix
pub fn projection_matrix(camera: &RenderCamera, near: f64, far: f64, aspect: f32) -> Mat4 {
    let (right, top) = half_extents(camera, f64::from(aspect));
    match camera.projection {
        Projection::Perspective => frustum_matrix(-right, right, -top, top, near, far),
        Projection::Orthographic => ortho_matrix(-right, right, -top, top, near, far),
    }
}

/// View matrix `begin_view` multiplies onto the model-view stack
pub fn view_matrix(camera: &RenderCamera) -> Mat4 {
    camera.view_matrix()
}

/// Start drawing through `camera`
///
/// Saves the caller's model-view and projection, then installs the
/// camera's. Returns `true` when the scope was opened; only then must it be
/// closed with `end_view` in the same frame. Nothing is changed without a
/// camera or when the stack has no room for both matrices.
pub fn begin_view(camera: Option<&CameraState>, stack: &mut impl MatrixStack, screen_size: (u32, u32)) -> bool {
    let Some(camera) = camera else {
        return false;
    };
    let view = &camera.view_camera;
    let near = camera.settings.near_plane;
    let far = camera.settings.far_plane;

    stack.flush_batch();

    // model-view goes under the projection so `end_mode_3d` pops the projection first
    stack.matrix_mode(MatrixMode::ModelView);
    if !stack.push_matrix() {
        return false;
    }
    stack.matrix_mode(MatrixMode::Projection);
    if !stack.push_matrix() {
        stack.matrix_mode(MatrixMode::ModelView);
        stack.pop_matrix();
        return false;
    }
    stack.load_identity();

    let (right, top) = half_extents(view, aspect_ratio(screen_size));
    match view.projection {
        Projection::Perspective => stack.frustum(-right, right, -top, top, near, far),
        Projection::Orthographic => stack.ortho(-right, right, -top, top, near, far),
    }

    stack.matrix_mode(MatrixMode::ModelView);
    stack.load_identity();
    stack.mult_matrix(view_matrix(view));

    stack.enable_depth_test();
    true
}

/// Close a scope opened by `begin_view`, restoring both saved matrices
pub fn end_view(stack: &mut impl MatrixStack) {
    stack.end_mode_3d();
    stack.pop_matrix();
}

/// Run `draw` inside a `begin_view`/`end_view` pair
///
/// When no scope could be opened `draw` still runs, in whatever state the
/// stack was in.
pub fn draw_in_view<S, R>(
    camera: Option<&CameraState>,
    stack: &mut S,
    screen_size: (u32, u32),
    draw: impl FnOnce(&mut S) -> R,
) -> R
where
    S: MatrixStack,
{
    let scoped = begin_view(camera, stack, screen_size);
    let result = draw(stack);
    if scoped {
        end_view(stack);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_guards_zero_height() {
        assert_eq!(aspect_ratio((800, 400)), 2.0);
        assert_eq!(aspect_ratio((800, 0)), 800.0);
    }

    #[test]
    fn test_perspective_half_extents() {
        let camera = RenderCamera::default();
        let (right, top) = half_extents(&camera, 2.0);

        let expected_top = NEAR_CULL_DISTANCE * 22.5_f64.to_radians().tan();
        assert!((top - expected_top).abs() < 1e-12);
        assert!((right - expected_top * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthographic_half_extents() {
        let camera = RenderCamera {
            fovy: 20.0,
            projection: Projection::Orthographic,
            ..Default::default()
        };
        let (right, top) = half_extents(&camera, 1.5);

        assert_eq!(top, 10.0);
        assert_eq!(right, 15.0);
    }

    #[test]
    fn test_projection_matrix_matches_gl_perspective_at_default_near() {
        let camera = RenderCamera::default();
        let proj = projection_matrix(&camera, NEAR_CULL_DISTANCE, 1000.0, 1.5);
        let expected = Mat4::perspective_rh_gl(45.0_f32.to_radians(), 1.5, 0.01, 1000.0);

        assert!(proj.abs_diff_eq(expected, 1e-3));
    }
}
