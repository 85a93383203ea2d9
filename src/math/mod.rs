mod projection;
mod ray;
mod rotation;

pub use projection::{frustum_matrix, ortho_matrix};
pub use ray::Ray;
pub use rotation::{rotate_about_axis, rotate_zyx, wrap_degrees};
