// Display module - Handles window creation and frame presentation
//
// This module provides:
// - Screen buffer (160×144 RGBA8888)
// - The display backend trait (window, texture, event queue, clock)
// - A winit + pixels backend and a headless in-memory backend
// - Frame timing (60 FPS × speed multiplier)

pub mod backend;
pub mod framebuffer;
pub mod headless;
pub mod timing;
pub mod window;

pub use backend::{DisplayBackend, SurfaceSpec};
pub use framebuffer::{ScreenBuffer, BYTES_PER_PIXEL, COLS, PITCH, ROWS, SCREEN_BYTES};
pub use headless::HeadlessBackend;
pub use timing::{frame_delay, FrameLimiter, TARGET_FPS};
pub use window::WinitBackend;
