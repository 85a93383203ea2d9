/// Host window cursor handling used for mouse look
///
/// Both calls must be idempotent: capturing an already captured cursor is a
/// no-op for the host.
pub trait CursorControl {
    /// Hide the cursor and constrain it to the window
    fn capture_cursor(&self);

    /// Show the cursor and free it
    fn release_cursor(&self);
}
