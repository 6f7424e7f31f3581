// Common test utilities for window plugin integration tests
//
// This module provides a headless window plus helpers for building raw OS
// events and running host frames against it.

#![allow(dead_code)]

use gb_window::input::PRIMARY_WINDOW_ID;
use gb_window::{
    DisplayWindow, HeadlessBackend, HostEvent, RawEvent, ScreenBuffer, WindowConfig,
    WindowPlugin,
};
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Window plugin running on the in-memory backend
pub type HeadlessWindow = DisplayWindow<HeadlessBackend>;

/// Open a headless window with the default configuration
pub fn open_window() -> HeadlessWindow {
    open_window_with(&WindowConfig::default())
}

/// Open a headless window with a custom configuration
pub fn open_window_with(config: &WindowConfig) -> HeadlessWindow {
    HeadlessWindow::new(config).expect("Failed to open headless window")
}

/// Backend of an open headless window
pub fn backend(window: &mut HeadlessWindow) -> &mut HeadlessBackend {
    window.backend_mut().expect("Window is not open")
}

pub fn key_down(code: KeyCode) -> RawEvent {
    RawEvent::KeyDown(PhysicalKey::Code(code))
}

pub fn key_up(code: KeyCode) -> RawEvent {
    RawEvent::KeyUp(PhysicalKey::Code(code))
}

pub fn focus(window_id: u32, focused: bool) -> RawEvent {
    RawEvent::Focus { window_id, focused }
}

pub fn motion(x: i32, y: i32) -> RawEvent {
    RawEvent::MouseMotion {
        window_id: PRIMARY_WINDOW_ID,
        x,
        y,
    }
}

pub fn release(button: MouseButton, x: i32, y: i32) -> RawEvent {
    RawEvent::MouseButtonUp {
        window_id: PRIMARY_WINDOW_ID,
        x,
        y,
        button,
    }
}

/// Feed raw events to the window and collect what it reports
pub fn pump(window: &mut HeadlessWindow, raw: Vec<RawEvent>) -> Vec<HostEvent> {
    backend(window).push_events(raw);
    window.handle_events(Vec::new())
}

/// Run one host frame in the documented order
///
/// `work_ms` is the simulated time the emulation step takes.
pub fn run_frame(
    window: &mut HeadlessWindow,
    screen: &ScreenBuffer,
    work_ms: u64,
    speed: f32,
) -> Vec<HostEvent> {
    let events = window.handle_events(Vec::new());
    backend(window).advance(work_ms);
    window.post_tick(screen).expect("Failed to present frame");
    assert!(window.frame_limiter(speed));
    events
}
