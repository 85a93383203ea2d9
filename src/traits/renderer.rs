use glam::Mat4;

/// Which matrix the stack operations apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    Projection,
    ModelView,
}

/// Immediate-mode matrix stack exposed by the host renderer
///
/// Mirrors a GL 1.x style API: operations act on the matrix selected by
/// `matrix_mode`, and `push_matrix`/`pop_matrix` save and restore it.
pub trait MatrixStack {
    /// Submit any pending batched draw calls
    fn flush_batch(&mut self);

    /// Select the current matrix
    fn matrix_mode(&mut self, mode: MatrixMode);

    /// Save the current matrix; returns `false` and saves nothing when the
    /// stack is full
    fn push_matrix(&mut self) -> bool;

    /// Restore the most recently saved matrix
    fn pop_matrix(&mut self);

    /// Replace the current matrix with identity
    fn load_identity(&mut self);

    /// Post-multiply the current matrix
    fn mult_matrix(&mut self, matrix: Mat4);

    /// Post-multiply by a perspective frustum
    fn frustum(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64);

    /// Post-multiply by an orthographic projection
    fn ortho(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64);

    fn enable_depth_test(&mut self);

    fn disable_depth_test(&mut self);

    /// Standard teardown of a 3D scope: restores the saved projection and
    /// resets model-view for 2D drawing
    fn end_mode_3d(&mut self) {
        self.flush_batch();
        self.matrix_mode(MatrixMode::Projection);
        self.pop_matrix();
        self.matrix_mode(MatrixMode::ModelView);
        self.load_identity();
        self.disable_depth_test();
    }
}
