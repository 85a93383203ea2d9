use glam::Mat4;

use crate::math::{frustum_matrix, ortho_matrix};
use crate::traits::{MatrixMode, MatrixStack};

/// Same depth the GL-style host renderer allows. Pushes past it are refused,
/// so `begin_view` reports it could not open a scope.
pub const MAX_MATRIX_STACK_SIZE: usize = 32;

/// In-memory matrix stack for headless hosts and tests
///
/// Tracks the current projection and model-view matrices, one shared push
/// stack, the depth-test flag and how many batches were flushed.
#[derive(Debug, Clone)]
pub struct SoftwareMatrixStack {
    mode: MatrixMode,
    projection: Mat4,
    model_view: Mat4,
    saved: Vec<Mat4>,
    depth_test: bool,
    flushes: usize,
}

impl SoftwareMatrixStack {
    /// Stack in 2D drawing state: an orthographic screen projection and
    /// identity model-view
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (f64::from(width.max(1)), f64::from(height.max(1)));
        Self {
            mode: MatrixMode::ModelView,
            projection: ortho_matrix(0.0, width, height, 0.0, 0.0, 1.0),
            model_view: Mat4::IDENTITY,
            saved: Vec::with_capacity(MAX_MATRIX_STACK_SIZE),
            depth_test: false,
            flushes: 0,
        }
    }

    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn model_view(&self) -> Mat4 {
        self.model_view
    }

    /// Projection times model-view
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.model_view
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn depth_test_enabled(&self) -> bool {
        self.depth_test
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    fn current_mut(&mut self) -> &mut Mat4 {
        match self.mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::ModelView => &mut self.model_view,
        }
    }
}

impl Default for SoftwareMatrixStack {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl MatrixStack for SoftwareMatrixStack {
    fn flush_batch(&mut self) {
        self.flushes += 1;
    }

    fn matrix_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    fn push_matrix(&mut self) -> bool {
        if self.saved.len() >= MAX_MATRIX_STACK_SIZE {
            log::error!("Matrix stack overflow (max {MAX_MATRIX_STACK_SIZE})");
            return false;
        }
        let current = *self.current_mut();
        self.saved.push(current);
        true
    }

    fn pop_matrix(&mut self) {
        match self.saved.pop() {
            Some(matrix) => *self.current_mut() = matrix,
            None => log::warn!("Matrix stack underflow, pop ignored"),
        }
    }

    fn load_identity(&mut self) {
        *self.current_mut() = Mat4::IDENTITY;
    }

    fn mult_matrix(&mut self, matrix: Mat4) {
        let current = self.current_mut();
        *current = *current * matrix;
    }

    fn frustum(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.mult_matrix(frustum_matrix(left, right, bottom, top, near, far));
    }

    fn ortho(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.mult_matrix(ortho_matrix(left, right, bottom, top, near, far));
    }

    fn enable_depth_test(&mut self) {
        self.depth_test = true;
    }

    fn disable_depth_test(&mut self) {
        self.depth_test = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_stack_is_2d() {
        let stack = SoftwareMatrixStack::new(800, 600);
        assert_eq!(stack.mode(), MatrixMode::ModelView);
        assert_eq!(stack.model_view(), Mat4::IDENTITY);
        assert_eq!(stack.depth(), 0);
        assert!(!stack.depth_test_enabled());

        // top-left pixel maps to the top-left NDC corner
        let corner = stack.projection().project_point3(Vec3::ZERO);
        assert!((corner.x + 1.0).abs() < 1e-6);
        assert!((corner.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_push_pop_restores_current_matrix() {
        let mut stack = SoftwareMatrixStack::default();
        stack.matrix_mode(MatrixMode::Projection);
        let before = stack.projection();

        stack.push_matrix();
        stack.load_identity();
        assert_eq!(stack.projection(), Mat4::IDENTITY);
        assert_eq!(stack.depth(), 1);

        stack.pop_matrix();
        assert_eq!(stack.projection(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_operations_target_selected_matrix() {
        let mut stack = SoftwareMatrixStack::default();
        let projection = stack.projection();

        stack.matrix_mode(MatrixMode::ModelView);
        stack.mult_matrix(Mat4::from_translation(Vec3::X));

        assert_eq!(stack.projection(), projection);
        assert_eq!(stack.model_view(), Mat4::from_translation(Vec3::X));
    }

    #[test]
    fn test_mult_matrix_post_multiplies() {
        let mut stack = SoftwareMatrixStack::default();
        let translate = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let scale = Mat4::from_scale(Vec3::splat(2.0));

        stack.mult_matrix(translate);
        stack.mult_matrix(scale);

        assert_eq!(stack.model_view(), translate * scale);
    }

    #[test]
    fn test_underflow_is_ignored() {
        let mut stack = SoftwareMatrixStack::default();
        stack.mult_matrix(Mat4::from_scale(Vec3::splat(3.0)));
        let before = stack.model_view();

        stack.pop_matrix();

        assert_eq!(stack.model_view(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_overflow_is_bounded() {
        let mut stack = SoftwareMatrixStack::default();
        for _ in 0..MAX_MATRIX_STACK_SIZE {
            assert!(stack.push_matrix());
        }
        assert!(!stack.push_matrix());
        assert_eq!(stack.depth(), MAX_MATRIX_STACK_SIZE);
    }

    #[test]
    fn test_end_mode_3d_restores_2d_state() {
        let mut stack = SoftwareMatrixStack::default();
        let projection = stack.projection();

        stack.matrix_mode(MatrixMode::Projection);
        stack.push_matrix();
        stack.load_identity();
        stack.frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        stack.matrix_mode(MatrixMode::ModelView);
        stack.mult_matrix(Mat4::from_translation(Vec3::Z));
        stack.enable_depth_test();

        stack.end_mode_3d();

        assert_eq!(stack.projection(), projection);
        assert_eq!(stack.model_view(), Mat4::IDENTITY);
        assert_eq!(stack.mode(), MatrixMode::ModelView);
        assert!(!stack.depth_test_enabled());
        assert_eq!(stack.flush_count(), 1);
    }
}
