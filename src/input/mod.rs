// Input module - Translates OS input into host events
//
// This module provides:
// - The host event vocabulary (`HostEvent`, `MouseEvent`)
// - The backend-neutral raw event shape (`RawEvent`)
// - Fixed key-down / key-up binding tables
// - Raw-to-host event translation

pub mod event;
pub mod keyboard;
pub mod translate;

pub use event::{HostEvent, MouseEvent, RawEvent, FOREIGN_WINDOW_ID, PRIMARY_WINDOW_ID};
pub use keyboard::{key_down_event, key_up_event};
pub use translate::{translate, translate_into};
