use winit::window::{CursorGrabMode, Window};

use crate::traits::CursorControl;

impl CursorControl for Window {
    fn capture_cursor(&self) {
        // Confined is unsupported on macOS, Locked is unsupported on X11
        let grab = self
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| self.set_cursor_grab(CursorGrabMode::Locked));
        if let Err(e) = grab {
            log::warn!("Failed to grab cursor: {e}");
        }
        self.set_cursor_visible(false);
    }

    fn release_cursor(&self) {
        if let Err(e) = self.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor: {e}");
        }
        self.set_cursor_visible(true);
    }
}
