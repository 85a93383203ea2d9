use glam::{Mat4, Vec3};

use crate::types::RenderCamera;

/// Anything that can hand a render camera to the renderer
pub trait CameraView {
    /// Eye, target and up the renderer should use this frame
    fn render_camera(&self) -> RenderCamera;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the camera forward direction
    fn forward(&self) -> Vec3;

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4 {
        self.render_camera().view_matrix()
    }
}
