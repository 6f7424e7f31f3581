// Display window plugin
//
// Opens a resizable window showing the 160×144 screen, pumps OS input into
// host events and paces the host to 60 FPS × speed. Generic over the display
// backend; the host uses the winit backend, tests use the headless one.

use super::WindowPlugin;
use crate::config::WindowConfig;
use crate::display::{
    DisplayBackend, FrameLimiter, ScreenBuffer, SurfaceSpec, WinitBackend, PITCH,
};
use crate::error::DisplayError;
use crate::input::{translate_into, HostEvent, RawEvent};

/// `window_type` value selecting this plugin
pub const WINDOW_TYPE: &str = "winit";

/// Title shown until the host sets its own
pub const DEFAULT_TITLE: &str = "gb-window";

/// Window plugin backed by a display backend
///
/// A plugin whose configuration selects another window type is inert: no
/// window is opened and every call is a no-op. After `stop` the plugin is
/// inert as well.
pub struct DisplayWindow<B: DisplayBackend = WinitBackend> {
    enabled: bool,
    active: Option<ActiveWindow<B>>,
    raw_events: Vec<RawEvent>,
}

/// Backend handles plus the pacing baseline of an open window
struct ActiveWindow<B> {
    backend: B,
    limiter: FrameLimiter,
}

impl<B: DisplayBackend> DisplayWindow<B> {
    /// Whether `config` selects this plugin (unset window type included)
    pub fn selected_by(config: &WindowConfig) -> bool {
        matches!(config.window_type(), None | Some(WINDOW_TYPE))
    }

    /// Open the window if `config` selects this plugin
    ///
    /// Any backend failure is fatal and returned as is.
    pub fn new(config: &WindowConfig) -> Result<Self, DisplayError> {
        let enabled = Self::selected_by(config);
        if !enabled {
            log::debug!(
                "Window type {:?} selected; {} window stays closed",
                config.window_type(),
                WINDOW_TYPE
            );
            return Ok(Self {
                enabled,
                active: None,
                raw_events: Vec::new(),
            });
        }

        let (width, height) = config.scaled_resolution();
        let spec = SurfaceSpec::new(DEFAULT_TITLE, width, height).with_vsync(config.vsync);
        let backend = B::open(&spec)?;
        let limiter = FrameLimiter::new(backend.ticks());

        Ok(Self {
            enabled,
            active: Some(ActiveWindow { backend, limiter }),
            raw_events: Vec::new(),
        })
    }

    /// Whether the window is open (enabled and not stopped)
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// The backend of an open window
    pub fn backend(&self) -> Option<&B> {
        self.active.as_ref().map(|active| &active.backend)
    }

    /// Mutable access to the backend of an open window
    pub fn backend_mut(&mut self) -> Option<&mut B> {
        self.active.as_mut().map(|active| &mut active.backend)
    }
}

impl<B: DisplayBackend> WindowPlugin for DisplayWindow<B> {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_title(&mut self, title: &str) {
        if let Some(active) = &mut self.active {
            log::debug!("Window title: {}", title);
            active.backend.set_title(title);
        }
    }

    fn handle_events(&mut self, mut events: Vec<HostEvent>) -> Vec<HostEvent> {
        if let Some(active) = &mut self.active {
            active.backend.poll_events(&mut self.raw_events);
            translate_into(self.raw_events.drain(..), &mut events);
        }
        events
    }

    fn post_tick(&mut self, screen: &ScreenBuffer) -> Result<(), DisplayError> {
        let Some(active) = &mut self.active else {
            return Ok(());
        };
        active.backend.update_texture(screen.as_bytes(), PITCH)?;
        active.backend.present()
    }

    fn frame_limiter(&mut self, speed: f32) -> bool {
        if let Some(active) = &mut self.active {
            let delay = active.limiter.wait(&mut active.backend, speed);
            log::trace!("Frame delay {} ms at speed {}", delay, speed);
        }
        true
    }

    fn stop(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.backend.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HeadlessBackend;
    use crate::input::PRIMARY_WINDOW_ID;
    use winit::keyboard::{KeyCode, PhysicalKey};

    type TestWindow = DisplayWindow<HeadlessBackend>;

    fn open() -> TestWindow {
        TestWindow::new(&WindowConfig::default()).expect("headless window")
    }

    /// Backend whose window can never be created
    struct FailingBackend;

    impl DisplayBackend for FailingBackend {
        fn open(_spec: &SurfaceSpec) -> Result<Self, DisplayError> {
            Err(DisplayError::WindowNotCreated)
        }
        fn set_title(&mut self, _title: &str) {}
        fn poll_events(&mut self, _out: &mut Vec<RawEvent>) {}
        fn update_texture(&mut self, _pixels: &[u8], _pitch: usize) -> Result<(), DisplayError> {
            Ok(())
        }
        fn present(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }
        fn ticks(&self) -> u64 {
            0
        }
        fn delay(&mut self, _ms: u64) {}
        fn shutdown(&mut self) {}
    }

    #[test]
    fn test_enabled_by_default_and_by_name() {
        assert!(TestWindow::selected_by(&WindowConfig::new()));
        assert!(TestWindow::selected_by(
            &WindowConfig::new().with_window_type("winit")
        ));
        assert!(!TestWindow::selected_by(
            &WindowConfig::new().with_window_type("null")
        ));
        assert!(!TestWindow::selected_by(
            &WindowConfig::new().with_window_type("SDL2")
        ));
    }

    #[test]
    fn test_open_uses_scaled_resolution() {
        let window =
            TestWindow::new(&WindowConfig::new().with_scale(2).with_vsync(true)).expect("open");
        let spec = window.backend().and_then(|b| b.spec()).expect("spec");

        assert_eq!((spec.width, spec.height), (320, 288));
        assert_eq!((spec.texture_width, spec.texture_height), (160, 144));
        assert!(spec.resizable);
        assert!(spec.vsync);
        assert_eq!(spec.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_open_failure_is_returned() {
        let result = DisplayWindow::<FailingBackend>::new(&WindowConfig::default());
        assert!(matches!(result, Err(DisplayError::WindowNotCreated)));
    }

    #[test]
    fn test_disabled_window_is_inert() {
        let config = WindowConfig::new().with_window_type("null");
        let mut window = DisplayWindow::<FailingBackend>::new(&config).expect("inert window");

        assert!(!window.enabled());
        assert!(!window.is_open());
        assert!(window.handle_events(Vec::new()).is_empty());
        window.set_title("ignored");
        window.post_tick(&ScreenBuffer::new()).expect("no-op");
        assert!(window.frame_limiter(1.0));
        window.stop();
    }

    #[test]
    fn test_set_title() {
        let mut window = open();
        window.set_title("Tetris - 60 fps");
        assert_eq!(window.backend().map(|b| b.title()), Some("Tetris - 60 fps"));
    }

    #[test]
    fn test_handle_events_translates_in_order() {
        let mut window = open();
        let backend = window.backend_mut().expect("open");
        backend.push_events([
            RawEvent::KeyDown(PhysicalKey::Code(KeyCode::ArrowUp)),
            RawEvent::Focus {
                window_id: 2,
                focused: false,
            },
            RawEvent::KeyUp(PhysicalKey::Code(KeyCode::KeyZ)),
            RawEvent::KeyDown(PhysicalKey::Code(KeyCode::F12)),
            RawEvent::Focus {
                window_id: PRIMARY_WINDOW_ID,
                focused: false,
            },
            RawEvent::Quit,
        ]);

        let events = window.handle_events(Vec::new());
        assert_eq!(
            events,
            vec![
                HostEvent::PressArrowUp,
                HostEvent::StateSave,
                HostEvent::Pass,
                HostEvent::WindowUnfocus,
                HostEvent::Quit,
            ]
        );

        // Drained: the next call appends nothing
        assert!(window.handle_events(Vec::new()).is_empty());
    }

    #[test]
    fn test_handle_events_chains_existing_list() {
        let mut window = open();
        window
            .backend_mut()
            .expect("open")
            .push_event(RawEvent::KeyUp(PhysicalKey::Code(KeyCode::KeyP)));

        let events = window.handle_events(vec![HostEvent::Quit]);
        assert_eq!(events, vec![HostEvent::Quit, HostEvent::PauseToggle]);
    }

    #[test]
    fn test_post_tick_presents_screen() {
        let mut window = open();
        let mut screen = ScreenBuffer::new();
        screen.test_pattern(3);

        window.post_tick(&screen).expect("present");
        window.post_tick(&screen).expect("present");

        let backend = window.backend().expect("open");
        assert_eq!(backend.uploads(), 2);
        assert_eq!(backend.frames_presented(), 2);
        assert_eq!(backend.last_frame(), Some(screen.as_bytes()));
    }

    #[test]
    fn test_frame_limiter_requests_full_budget() {
        let mut window = open();
        assert!(window.frame_limiter(1.0));
        assert!(window.frame_limiter(1.0));

        // No simulated work between frames: whole 16.67 ms budget each time
        assert_eq!(window.backend().map(|b| b.delays()), Some(&[17, 17][..]));
    }

    #[test]
    fn test_frame_limiter_subtracts_work_time() {
        let mut window = open();
        window.backend_mut().expect("open").advance(10);
        window.frame_limiter(1.0);

        window.backend_mut().expect("open").advance(40);
        window.frame_limiter(1.0);

        // Second frame overran: no wait, and no catch-up on the third
        window.frame_limiter(1.0);
        assert_eq!(window.backend().map(|b| b.delays()), Some(&[7, 17][..]));
    }

    #[test]
    fn test_frame_limiter_double_speed() {
        let mut normal = open();
        let mut fast = open();
        normal.frame_limiter(1.0);
        fast.frame_limiter(2.0);

        let normal_delay = normal.backend().map(|b| b.delays()[0]).expect("delay") as i64;
        let fast_delay = fast.backend().map(|b| b.delays()[0]).expect("delay") as i64;
        assert!((normal_delay - 2 * fast_delay).abs() <= 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut window = open();
        window.stop();
        assert!(!window.is_open());
        assert!(window.enabled());

        window.stop();
        assert!(window.handle_events(Vec::new()).is_empty());
    }
}
