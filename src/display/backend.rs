// Display backend trait - The multimedia capability surface
//
// A backend owns the window, the renderer and the fixed-size texture. The
// window plugin only talks to it through this trait, which keeps the plugin
// testable without an OS window.

use super::framebuffer::{COLS, ROWS};
use crate::error::DisplayError;
use crate::input::RawEvent;

/// Everything a backend needs to open its window and texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    /// Initial window title
    pub title: String,
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    /// Texture width in pixels (never changes)
    pub texture_width: u32,
    /// Texture height in pixels (never changes)
    pub texture_height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Wait for vertical blank when presenting
    pub vsync: bool,
}

impl SurfaceSpec {
    /// Window of the given size showing the 160×144 screen
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            texture_width: COLS as u32,
            texture_height: ROWS as u32,
            resizable: true,
            vsync: false,
        }
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

/// Window, renderer, texture, event queue and clock of one multimedia stack
///
/// All methods must be called from the thread that opened the backend.
pub trait DisplayBackend: Sized {
    /// Open the window, renderer and texture described by `spec`
    fn open(spec: &SurfaceSpec) -> Result<Self, DisplayError>;

    /// Set the OS window title
    fn set_title(&mut self, title: &str);

    /// Drain every pending OS event into `out`, in delivery order
    fn poll_events(&mut self, out: &mut Vec<RawEvent>);

    /// Copy a frame into the texture
    ///
    /// `pixels` holds `texture_height` rows of `pitch` bytes each.
    fn update_texture(&mut self, pixels: &[u8], pitch: usize) -> Result<(), DisplayError>;

    /// Draw the whole texture scaled to the window, show it, and clear the
    /// back buffer for the next frame
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Milliseconds since the backend was opened
    fn ticks(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds
    fn delay(&mut self, ms: u64);

    /// Destroy the window and release the multimedia subsystem
    fn shutdown(&mut self);
}
