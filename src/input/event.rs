// Input events
//
// `RawEvent` is what a display backend reports after draining the OS queue.
// `HostEvent` is the vocabulary the emulator host consumes.

use std::fmt;
use winit::event::MouseButton;
use winit::keyboard::PhysicalKey;

/// Window id the backend assigns to the plugin's own window
pub const PRIMARY_WINDOW_ID: u32 = 1;

/// Window id the backend assigns to windows it does not own
pub const FOREIGN_WINDOW_ID: u32 = 0;

/// OS event after the backend has resolved window ids and cursor position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    /// The user asked to close the window
    Quit,
    /// A key went down (auto-repeat included)
    KeyDown(PhysicalKey),
    /// A key went up
    KeyUp(PhysicalKey),
    /// A window gained or lost keyboard focus
    Focus { window_id: u32, focused: bool },
    /// The cursor moved inside a window
    MouseMotion { window_id: u32, x: i32, y: i32 },
    /// A mouse button was released at the last known cursor position
    MouseButtonUp {
        window_id: u32,
        x: i32,
        y: i32,
        button: MouseButton,
    },
}

/// Mouse payload carried by `HostEvent::Mouse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Window the cursor is in
    pub window_id: u32,
    /// Cursor X in window pixels
    pub x: i32,
    /// Cursor Y in window pixels
    pub y: i32,
    /// Released button: `NO_BUTTON`, `LEFT_BUTTON` or `RIGHT_BUTTON`
    pub button: i8,
}

impl MouseEvent {
    pub const NO_BUTTON: i8 = -1;
    pub const LEFT_BUTTON: i8 = 0;
    pub const RIGHT_BUTTON: i8 = 1;
}

/// Logical event handed to the emulator host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Quit,
    PressArrowUp,
    PressArrowDown,
    PressArrowRight,
    PressArrowLeft,
    PressButtonA,
    PressButtonB,
    PressButtonSelect,
    PressButtonStart,
    ReleaseArrowUp,
    ReleaseArrowDown,
    ReleaseArrowRight,
    ReleaseArrowLeft,
    ReleaseButtonA,
    ReleaseButtonB,
    ReleaseButtonSelect,
    ReleaseButtonStart,
    PressSpeedUp,
    ReleaseSpeedUp,
    StateSave,
    StateLoad,
    /// Placeholder emitted for keys without a binding
    Pass,
    ScreenRecordingToggle,
    PauseToggle,
    PressRewindBack,
    PressRewindForward,
    ReleaseRewindBack,
    ReleaseRewindForward,
    WindowFocus,
    WindowUnfocus,
    /// Cursor moved or a mouse button was released
    Mouse(MouseEvent),
}

impl HostEvent {
    /// Upper-case name used by hosts and logs
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::Quit => "QUIT",
            HostEvent::PressArrowUp => "PRESS_ARROW_UP",
            HostEvent::PressArrowDown => "PRESS_ARROW_DOWN",
            HostEvent::PressArrowRight => "PRESS_ARROW_RIGHT",
            HostEvent::PressArrowLeft => "PRESS_ARROW_LEFT",
            HostEvent::PressButtonA => "PRESS_BUTTON_A",
            HostEvent::PressButtonB => "PRESS_BUTTON_B",
            HostEvent::PressButtonSelect => "PRESS_BUTTON_SELECT",
            HostEvent::PressButtonStart => "PRESS_BUTTON_START",
            HostEvent::ReleaseArrowUp => "RELEASE_ARROW_UP",
            HostEvent::ReleaseArrowDown => "RELEASE_ARROW_DOWN",
            HostEvent::ReleaseArrowRight => "RELEASE_ARROW_RIGHT",
            HostEvent::ReleaseArrowLeft => "RELEASE_ARROW_LEFT",
            HostEvent::ReleaseButtonA => "RELEASE_BUTTON_A",
            HostEvent::ReleaseButtonB => "RELEASE_BUTTON_B",
            HostEvent::ReleaseButtonSelect => "RELEASE_BUTTON_SELECT",
            HostEvent::ReleaseButtonStart => "RELEASE_BUTTON_START",
            HostEvent::PressSpeedUp => "PRESS_SPEED_UP",
            HostEvent::ReleaseSpeedUp => "RELEASE_SPEED_UP",
            HostEvent::StateSave => "STATE_SAVE",
            HostEvent::StateLoad => "STATE_LOAD",
            HostEvent::Pass => "PASS",
            HostEvent::ScreenRecordingToggle => "SCREEN_RECORDING_TOGGLE",
            HostEvent::PauseToggle => "PAUSE_TOGGLE",
            HostEvent::PressRewindBack => "PRESS_REWIND_BACK",
            HostEvent::PressRewindForward => "PRESS_REWIND_FORWARD",
            HostEvent::ReleaseRewindBack => "RELEASE_REWIND_BACK",
            HostEvent::ReleaseRewindForward => "RELEASE_REWIND_FORWARD",
            HostEvent::WindowFocus => "WINDOW_FOCUS",
            HostEvent::WindowUnfocus => "WINDOW_UNFOCUS",
            HostEvent::Mouse(_) => "_INTERNAL_MOUSE",
        }
    }
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Mouse(mouse) => write!(
                f,
                "{}(window={}, x={}, y={}, button={})",
                self.name(),
                mouse.window_id,
                mouse.x,
                mouse.y,
                mouse.button
            ),
            _ => f.write_str(self.name()),
        }
    }
}
