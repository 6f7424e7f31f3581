// Display errors
//
// Every failure the multimedia layer can report while opening or presenting
// the window.

use std::fmt;

/// Errors that can occur while opening or driving the display
#[derive(Debug)]
pub enum DisplayError {
    /// The OS event loop could not be created or pumped
    EventLoop(winit::error::EventLoopError),

    /// The OS refused to create the window
    Window(winit::error::OsError),

    /// The GPU surface or texture could not be created or presented
    Surface(pixels::Error),

    /// The event loop never resumed, so no window exists
    WindowNotCreated,

    /// No window plugin answers to the configured window type
    UnknownWindowType(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            DisplayError::Window(e) => write!(f, "Window creation failed: {}", e),
            DisplayError::Surface(e) => write!(f, "Surface error: {}", e),
            DisplayError::WindowNotCreated => {
                write!(f, "Event loop did not resume; no window was created")
            }
            DisplayError::UnknownWindowType(name) => write!(f, "Unknown window type: {}", name),
        }
    }
}

impl std::error::Error for DisplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DisplayError::EventLoop(e) => Some(e),
            DisplayError::Window(e) => Some(e),
            DisplayError::Surface(e) => Some(e),
            DisplayError::WindowNotCreated | DisplayError::UnknownWindowType(_) => None,
        }
    }
}

impl From<winit::error::EventLoopError> for DisplayError {
    fn from(e: winit::error::EventLoopError) -> Self {
        DisplayError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for DisplayError {
    fn from(e: winit::error::OsError) -> Self {
        DisplayError::Window(e)
    }
}

impl From<pixels::Error> for DisplayError {
    fn from(e: pixels::Error) -> Self {
        DisplayError::Surface(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_not_created_message() {
        let err = DisplayError::WindowNotCreated;
        assert!(err.to_string().contains("no window was created"));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_unknown_window_type_message() {
        let err = DisplayError::UnknownWindowType("SDL2".to_string());
        assert_eq!(err.to_string(), "Unknown window type: SDL2");
    }
}
