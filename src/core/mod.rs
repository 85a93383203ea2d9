pub mod clock;
pub mod input_adapter;
pub mod input_state;
pub mod matrix_stack;
pub mod window;

pub use clock::{Clock, Interval};
pub use input_adapter::{key_from_keycode, WinitController};
pub use input_state::InputState;
pub use matrix_stack::{SoftwareMatrixStack, MAX_MATRIX_STACK_SIZE};
