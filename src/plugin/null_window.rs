// Null window plugin
//
// For hosts running without a display: accepts every call and does nothing.

use super::WindowPlugin;
use crate::config::WindowConfig;
use crate::display::ScreenBuffer;
use crate::error::DisplayError;
use crate::input::HostEvent;

/// `window_type` value selecting this plugin
pub const WINDOW_TYPE: &str = "null";

/// Window plugin that never opens a window and never paces the host
#[derive(Debug, Clone, Copy)]
pub struct NullWindow {
    enabled: bool,
}

impl NullWindow {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            enabled: config.window_type() == Some(WINDOW_TYPE),
        }
    }
}

impl WindowPlugin for NullWindow {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_title(&mut self, _title: &str) {}

    fn handle_events(&mut self, events: Vec<HostEvent>) -> Vec<HostEvent> {
        events
    }

    fn post_tick(&mut self, _screen: &ScreenBuffer) -> Result<(), DisplayError> {
        Ok(())
    }

    fn frame_limiter(&mut self, _speed: f32) -> bool {
        false
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_enabled_by_name() {
        assert!(NullWindow::new(&WindowConfig::new().with_window_type("null")).enabled());
        assert!(!NullWindow::new(&WindowConfig::new()).enabled());
    }

    #[test]
    fn test_events_pass_through() {
        let mut window = NullWindow::new(&WindowConfig::new().with_window_type("null"));
        let events = window.handle_events(vec![HostEvent::Quit]);
        assert_eq!(events, vec![HostEvent::Quit]);
        assert!(window.post_tick(&ScreenBuffer::new()).is_ok());
    }
}
