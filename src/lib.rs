// Game Boy window plugin library
// Window, input and frame pacing for an emulator host

// Public modules
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod plugin;

// Re-export main types for convenience
pub use config::WindowConfig;
pub use display::{
    DisplayBackend, FrameLimiter, HeadlessBackend, ScreenBuffer, SurfaceSpec, WinitBackend, COLS,
    PITCH, ROWS,
};
pub use error::DisplayError;
pub use input::{HostEvent, MouseEvent, RawEvent};
pub use plugin::{open_window, DisplayWindow, NullWindow, WindowPlugin};
