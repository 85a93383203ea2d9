use glam::{Mat3, Vec3};

/// Euler rotation applied X first, then Y, then Z (`Rz * Ry * Rx`)
pub fn rotate_zyx(angles: Vec3) -> Mat3 {
    Mat3::from_rotation_z(angles.z) * Mat3::from_rotation_y(angles.y) * Mat3::from_rotation_x(angles.x)
}

/// Rotate `vector` by `radians` around `axis` (right-handed)
///
/// A zero-length axis leaves the vector unchanged.
pub fn rotate_about_axis(vector: Vec3, axis: Vec3, radians: f32) -> Vec3 {
    match axis.try_normalize() {
        Some(axis) => Mat3::from_axis_angle(axis, radians) * vector,
        None => vector,
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
