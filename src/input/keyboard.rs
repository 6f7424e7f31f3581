// Keyboard binding tables
//
// Fixed mapping from physical keys to host events. Key-down and key-up use
// separate tables: save/load state, pause, screen recording and quit only
// fire on release and have no key-down binding.
//
// Default bindings:
// - Arrow keys: D-pad
// - A / S: A and B buttons
// - Enter / Backspace: Start and Select
// - Space: speed up (held)
// - Comma / Period: rewind back / forward (held)
// - Z / X: save / load state
// - P: pause, I: screen recording, Escape: quit

use super::HostEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Host event for a key going down, `None` if the key is unbound
pub fn key_down_event(key: PhysicalKey) -> Option<HostEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };

    match code {
        KeyCode::ArrowUp => Some(HostEvent::PressArrowUp),
        KeyCode::ArrowDown => Some(HostEvent::PressArrowDown),
        KeyCode::ArrowRight => Some(HostEvent::PressArrowRight),
        KeyCode::ArrowLeft => Some(HostEvent::PressArrowLeft),
        KeyCode::KeyA => Some(HostEvent::PressButtonA),
        KeyCode::KeyS => Some(HostEvent::PressButtonB),
        KeyCode::Enter => Some(HostEvent::PressButtonStart),
        KeyCode::Backspace => Some(HostEvent::PressButtonSelect),
        KeyCode::Space => Some(HostEvent::PressSpeedUp),
        KeyCode::Comma => Some(HostEvent::PressRewindBack),
        KeyCode::Period => Some(HostEvent::PressRewindForward),
        _ => None,
    }
}

/// Host event for a key going up, `None` if the key is unbound
pub fn key_up_event(key: PhysicalKey) -> Option<HostEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };

    match code {
        KeyCode::ArrowUp => Some(HostEvent::ReleaseArrowUp),
        KeyCode::ArrowDown => Some(HostEvent::ReleaseArrowDown),
        KeyCode::ArrowRight => Some(HostEvent::ReleaseArrowRight),
        KeyCode::ArrowLeft => Some(HostEvent::ReleaseArrowLeft),
        KeyCode::KeyA => Some(HostEvent::ReleaseButtonA),
        KeyCode::KeyS => Some(HostEvent::ReleaseButtonB),
        KeyCode::Enter => Some(HostEvent::ReleaseButtonStart),
        KeyCode::Backspace => Some(HostEvent::ReleaseButtonSelect),
        KeyCode::KeyZ => Some(HostEvent::StateSave),
        KeyCode::KeyX => Some(HostEvent::StateLoad),
        KeyCode::Space => Some(HostEvent::ReleaseSpeedUp),
        KeyCode::KeyP => Some(HostEvent::PauseToggle),
        KeyCode::KeyI => Some(HostEvent::ScreenRecordingToggle),
        KeyCode::Escape => Some(HostEvent::Quit),
        KeyCode::Comma => Some(HostEvent::ReleaseRewindBack),
        KeyCode::Period => Some(HostEvent::ReleaseRewindForward),
        _ => None,
    }
}
