// Event translation
//
// Turns drained backend events into host events, one raw event at a time and
// in delivery order.

use super::event::{HostEvent, MouseEvent, RawEvent, PRIMARY_WINDOW_ID};
use super::keyboard::{key_down_event, key_up_event};
use winit::event::MouseButton;

/// Translate a single raw event, `None` if the host has no use for it
///
/// Key events never return `None`: unbound keys become `HostEvent::Pass`.
pub fn translate(event: &RawEvent) -> Option<HostEvent> {
    match *event {
        RawEvent::Quit => Some(HostEvent::Quit),
        RawEvent::KeyDown(key) => Some(key_down_event(key).unwrap_or(HostEvent::Pass)),
        RawEvent::KeyUp(key) => Some(key_up_event(key).unwrap_or(HostEvent::Pass)),
        RawEvent::Focus { window_id, focused } => {
            if window_id != PRIMARY_WINDOW_ID {
                return None;
            }
            if focused {
                Some(HostEvent::WindowFocus)
            } else {
                Some(HostEvent::WindowUnfocus)
            }
        }
        RawEvent::MouseMotion { window_id, x, y } => Some(HostEvent::Mouse(MouseEvent {
            window_id,
            x,
            y,
            button: MouseEvent::NO_BUTTON,
        })),
        RawEvent::MouseButtonUp {
            window_id,
            x,
            y,
            button,
        } => Some(HostEvent::Mouse(MouseEvent {
            window_id,
            x,
            y,
            button: button_index(button),
        })),
    }
}

/// Translate every raw event and append the results to `events`
pub fn translate_into<I>(raw: I, events: &mut Vec<HostEvent>)
where
    I: IntoIterator<Item = RawEvent>,
{
    for event in raw {
        if let Some(host_event) = translate(&event) {
            log::trace!("{:?} -> {}", event, host_event);
            events.push(host_event);
        }
    }
}

fn button_index(button: MouseButton) -> i8 {
    match button {
        MouseButton::Left => MouseEvent::LEFT_BUTTON,
        MouseButton::Right => MouseEvent::RIGHT_BUTTON,
        _ => MouseEvent::NO_BUTTON,
    }
}
