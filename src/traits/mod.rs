pub mod camera;
pub mod controller;
pub mod renderer;
pub mod window;

pub use camera::*;
pub use controller::*;
pub use renderer::*;
pub use window::*;
