// Window plugins - The contract between the emulator host and its window
//
// The host calls, once per frame and in this order: `handle_events`, its own
// emulation step, `post_tick`, `frame_limiter`. `set_title` may be called at
// any time and `stop` exactly once at shutdown.

pub mod display_window;
pub mod null_window;

pub use display_window::DisplayWindow;
pub use null_window::NullWindow;

use crate::config::WindowConfig;
use crate::display::{ScreenBuffer, WinitBackend};
use crate::error::DisplayError;
use crate::input::HostEvent;

/// Window plugin interface implemented by every window backend
pub trait WindowPlugin {
    /// Whether the configuration selected this plugin
    fn enabled(&self) -> bool;

    /// Set the OS window title
    fn set_title(&mut self, title: &str);

    /// Drain OS events and append the translated host events to `events`
    ///
    /// Returns the same list so several plugins can be chained.
    fn handle_events(&mut self, events: Vec<HostEvent>) -> Vec<HostEvent>;

    /// Show the finished frame
    fn post_tick(&mut self, screen: &ScreenBuffer) -> Result<(), DisplayError>;

    /// Sleep out the rest of the frame at `speed` × 60 FPS
    ///
    /// Returns `true` if this plugin paces the host.
    fn frame_limiter(&mut self, speed: f32) -> bool;

    /// Close the window and release the multimedia subsystem
    fn stop(&mut self);
}

/// Construct the window plugin selected by `config`
///
/// With no window type set this opens the native window.
pub fn open_window(config: &WindowConfig) -> Result<Box<dyn WindowPlugin>, DisplayError> {
    match config.window_type() {
        None | Some(display_window::WINDOW_TYPE) => {
            Ok(Box::new(DisplayWindow::<WinitBackend>::new(config)?))
        }
        Some(null_window::WINDOW_TYPE) => Ok(Box::new(NullWindow::new(config))),
        Some(other) => Err(DisplayError::UnknownWindowType(other.to_string())),
    }
}
