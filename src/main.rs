// gb-window - Demo host
//
// Drives the window plugin the way an emulator host does, with a scrolling
// test pattern standing in for the emulated screen.

use gb_window::config::CONFIG_FILE;
use gb_window::{open_window, HostEvent, ScreenBuffer, WindowConfig};
use std::time::{Duration, Instant};

/// Speed multiplier while the speed-up key is held
const FAST_FORWARD_SPEED: f32 = 4.0;

/// Frames to run when the plugin does not pace (null window)
const UNPACED_FRAMES: u64 = 600;

/// Demo host state driven by host events
#[derive(Debug, Default)]
struct DemoHost {
    frame: u64,
    paused: bool,
    fast_forward: bool,
    quit: bool,
}

impl DemoHost {
    fn speed(&self) -> f32 {
        if self.fast_forward {
            FAST_FORWARD_SPEED
        } else {
            1.0
        }
    }

    fn apply(&mut self, event: HostEvent) {
        match event {
            HostEvent::Quit => self.quit = true,
            HostEvent::PauseToggle => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            HostEvent::PressSpeedUp => self.fast_forward = true,
            HostEvent::ReleaseSpeedUp => self.fast_forward = false,
            HostEvent::WindowFocus | HostEvent::WindowUnfocus => log::debug!("{}", event),
            HostEvent::StateSave
            | HostEvent::StateLoad
            | HostEvent::ScreenRecordingToggle
            | HostEvent::PressRewindBack
            | HostEvent::PressRewindForward => {
                log::info!("{} is not supported by the demo", event);
            }
            HostEvent::Mouse(_) | HostEvent::Pass => log::trace!("{}", event),
            _ => log::debug!("{}", event),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("gb-window v{}", env!("CARGO_PKG_VERSION"));
    println!("==============================");
    println!();

    // Load or create window configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG_FILE.to_string());
    let config = WindowConfig::load_or_default(&config_path);
    let (width, height) = config.scaled_resolution();
    println!("Window configuration loaded from '{}'", config_path);
    println!(
        "  Window type: {}",
        config.window_type().unwrap_or("(default)")
    );
    println!("  Window size: {}x{}", width, height);
    println!();
    println!("Arrows/A/S/Enter/Backspace: buttons, Space: fast forward, P: pause, Esc: quit");
    println!();

    let mut window = open_window(&config)?;
    let mut screen = ScreenBuffer::new();
    let mut host = DemoHost::default();
    let mut events = Vec::new();

    let mut frames_run = 0u64;
    let mut fps_frames = 0u32;
    let mut fps_started = Instant::now();

    loop {
        events = window.handle_events(std::mem::take(&mut events));
        for event in events.drain(..) {
            host.apply(event);
        }
        if host.quit {
            break;
        }

        if !host.paused {
            screen.test_pattern(host.frame);
            host.frame += 1;
        }
        window.post_tick(&screen)?;

        let paced = window.frame_limiter(host.speed());
        frames_run += 1;
        fps_frames += 1;

        if fps_started.elapsed() >= Duration::from_secs(1) {
            let fps = f64::from(fps_frames) / fps_started.elapsed().as_secs_f64();
            window.set_title(&format!("gb-window - {:.0} fps x{}", fps, host.speed()));
            fps_frames = 0;
            fps_started = Instant::now();
        }

        if !paced && frames_run >= UNPACED_FRAMES {
            println!("Ran {} frames without a window.", frames_run);
            break;
        }
    }

    window.stop();
    println!("Window closed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_follows_speed_up_key() {
        let mut host = DemoHost::default();
        assert_eq!(host.speed(), 1.0);

        host.apply(HostEvent::PressSpeedUp);
        assert_eq!(host.speed(), FAST_FORWARD_SPEED);

        host.apply(HostEvent::ReleaseSpeedUp);
        assert_eq!(host.speed(), 1.0);
    }

    #[test]
    fn test_pause_toggles_and_quit_stops() {
        let mut host = DemoHost::default();
        host.apply(HostEvent::PauseToggle);
        assert!(host.paused);
        host.apply(HostEvent::PauseToggle);
        assert!(!host.paused);

        host.apply(HostEvent::Pass);
        assert!(!host.quit);
        host.apply(HostEvent::Quit);
        assert!(host.quit);
    }
}
