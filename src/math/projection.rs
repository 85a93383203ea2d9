use glam::{DMat4, DVec4, Mat4};

/// OpenGL-style asymmetric perspective frustum (clip depth -1..1)
///
/// Computed in double precision so tiny near planes keep their accuracy
/// until the final conversion.
pub fn frustum_matrix(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Mat4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    let m = DMat4::from_cols(
        DVec4::new(2.0 * near / width, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 * near / height, 0.0, 0.0),
        DVec4::new((right + left) / width, (top + bottom) / height, -(far + near) / depth, -1.0),
        DVec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
    );
    to_single(m)
}

/// OpenGL-style orthographic projection (clip depth -1..1)
pub fn ortho_matrix(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Mat4 {
    to_single(DMat4::orthographic_rh_gl(left, right, bottom, top, near, far))
}

fn to_single(m: DMat4) -> Mat4 {
    Mat4::from_cols_array(&m.to_cols_array().map(|v| v as f32))
}
