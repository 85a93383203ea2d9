pub mod camera;
pub mod cli;
pub mod controls;
pub mod core;
pub mod error;
pub mod frame;
pub mod free_camera;
pub mod math;
pub mod settings;
pub mod traits;
pub mod types;
pub mod view;

pub use camera::CameraState;
pub use controls::{CameraControl, ControlBindings};
pub use error::{CameraError, Result};
pub use frame::FrameInput;
pub use free_camera::FreeCamera;
pub use settings::CameraSettings;
pub use types::{CameraUniform, Projection, RenderCamera};
pub use view::{begin_view, draw_in_view, end_view, projection_matrix, view_matrix};
