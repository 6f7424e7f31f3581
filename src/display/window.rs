// Window module - winit + pixels display backend
//
// The host owns the main loop, so the winit event loop is never run; it is
// pumped once per frame with a zero timeout instead. The window and its
// 160×144 texture are created the first time the loop resumes.

use super::backend::{DisplayBackend, SurfaceSpec};
use crate::error::DisplayError;
use crate::input::{RawEvent, FOREIGN_WINDOW_ID, PRIMARY_WINDOW_ID};
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

/// How many short pumps to allow for the loop to resume during `open`
const OPEN_ATTEMPTS: usize = 16;

/// Per-attempt timeout while waiting for the loop to resume
const OPEN_PUMP_TIMEOUT: Duration = Duration::from_millis(1);

/// Display backend drawing into a native window
///
/// Holds the winit event loop, so it is neither `Send` nor `Sync` and must
/// stay on the thread that opened it.
pub struct WinitBackend {
    app: WindowApp,
    event_loop: Option<EventLoop<()>>,
    opened_at: Instant,
}

/// Event loop handler owning the window and the pixel surface
struct WindowApp {
    spec: SurfaceSpec,
    attributes: Option<WindowAttributes>,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    init_error: Option<DisplayError>,
    cursor: (i32, i32),
    pending: Vec<RawEvent>,
}

impl WindowApp {
    fn new(spec: &SurfaceSpec) -> Self {
        let attributes = Window::default_attributes()
            .with_title(spec.title.as_str())
            .with_inner_size(LogicalSize::new(spec.width, spec.height))
            .with_resizable(spec.resizable)
            .with_visible(true);

        Self {
            spec: spec.clone(),
            attributes: Some(attributes),
            window: None,
            pixels: None,
            init_error: None,
            cursor: (0, 0),
            pending: Vec::new(),
        }
    }

    fn create_surface(
        &mut self,
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
    ) -> Result<(), DisplayError> {
        let attributes = match centered_position(event_loop, &self.spec) {
            Some(position) => attributes.with_position(position),
            None => attributes,
        };

        let window = Arc::new(event_loop.create_window(attributes)?);
        let window_size = window.inner_size();

        // Surface follows the window; the texture stays at the emulated resolution
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = PixelsBuilder::new(
            self.spec.texture_width,
            self.spec.texture_height,
            surface_texture,
        )
        .enable_vsync(self.spec.vsync)
        .clear_color(pixels::wgpu::Color::BLACK)
        .build()?;

        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    /// Window number reported to the host: 1 for our window, 0 otherwise
    fn window_number(&self, window_id: WindowId) -> u32 {
        match &self.window {
            Some(window) if window.id() == window_id => PRIMARY_WINDOW_ID,
            _ => FOREIGN_WINDOW_ID,
        }
    }

    fn resize_surface(&mut self, size: PhysicalSize<u32>) {
        // Minimized windows report a zero size
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Some(pixels) = &mut self.pixels {
            if let Err(err) = pixels.resize_surface(size.width, size.height) {
                log::warn!("Failed to resize surface to {:?}: {}", size, err);
            }
        }
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(attributes) = self.attributes.take() else {
            return;
        };
        if let Err(err) = self.create_surface(event_loop, attributes) {
            self.init_error = Some(err);
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::Resized(size) = event {
            self.resize_surface(size);
            return;
        }

        let window_number = self.window_number(window_id);
        let scale_factor = self
            .window
            .as_ref()
            .map_or(1.0, |window| window.scale_factor());
        if let Some(raw) =
            convert_window_event(&event, window_number, scale_factor, &mut self.cursor)
        {
            self.pending.push(raw);
        }
    }
}

/// Convert a winit window event into a raw event
///
/// Cursor positions are reported in logical pixels (`scale_factor` divides
/// the physical position), the same units as the configured window size.
/// `cursor` tracks the last cursor position, since winit reports button
/// releases without coordinates.
pub(crate) fn convert_window_event(
    event: &WindowEvent,
    window_id: u32,
    scale_factor: f64,
    cursor: &mut (i32, i32),
) -> Option<RawEvent> {
    match event {
        WindowEvent::CloseRequested => Some(RawEvent::Quit),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key,
                    state,
                    ..
                },
            is_synthetic,
            ..
        } => {
            // Keys already held when focus returns; the OS never sent these
            if *is_synthetic {
                return None;
            }
            match state {
                ElementState::Pressed => Some(RawEvent::KeyDown(*physical_key)),
                ElementState::Released => Some(RawEvent::KeyUp(*physical_key)),
            }
        }
        WindowEvent::Focused(focused) => Some(RawEvent::Focus {
            window_id,
            focused: *focused,
        }),
        WindowEvent::CursorMoved { position, .. } => {
            let position: LogicalPosition<f64> = position.to_logical(scale_factor);
            *cursor = (position.x as i32, position.y as i32);
            Some(RawEvent::MouseMotion {
                window_id,
                x: cursor.0,
                y: cursor.1,
            })
        }
        WindowEvent::MouseInput {
            state: ElementState::Released,
            button,
            ..
        } => Some(RawEvent::MouseButtonUp {
            window_id,
            x: cursor.0,
            y: cursor.1,
            button: *button,
        }),
        _ => None,
    }
}

/// Top-left corner that centers the window on the primary monitor
fn centered_position(
    event_loop: &ActiveEventLoop,
    spec: &SurfaceSpec,
) -> Option<PhysicalPosition<i32>> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())?;

    let window_size: PhysicalSize<u32> =
        LogicalSize::new(spec.width, spec.height).to_physical(monitor.scale_factor());
    let monitor_size = monitor.size();
    let origin = monitor.position();

    Some(PhysicalPosition::new(
        origin.x + (monitor_size.width as i32 - window_size.width as i32) / 2,
        origin.y + (monitor_size.height as i32 - window_size.height as i32) / 2,
    ))
}

impl WinitBackend {
    /// Deliver every pending OS event to the window handler
    fn pump(&mut self, timeout: Duration) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(timeout), &mut self.app) {
            log::debug!("Event loop exited with code {}", code);
        }
    }
}

impl DisplayBackend for WinitBackend {
    fn open(spec: &SurfaceSpec) -> Result<Self, DisplayError> {
        let event_loop = EventLoop::new()?;

        let mut backend = Self {
            app: WindowApp::new(spec),
            event_loop: Some(event_loop),
            opened_at: Instant::now(),
        };

        // The window only exists once the loop has resumed
        for _ in 0..OPEN_ATTEMPTS {
            backend.pump(OPEN_PUMP_TIMEOUT);
            if let Some(err) = backend.app.init_error.take() {
                return Err(err);
            }
            if backend.app.window.is_some() {
                break;
            }
        }
        if backend.app.window.is_none() {
            return Err(DisplayError::WindowNotCreated);
        }

        log::info!(
            "Opened {}x{} window with a {}x{} texture (vsync: {})",
            spec.width,
            spec.height,
            spec.texture_width,
            spec.texture_height,
            spec.vsync
        );
        Ok(backend)
    }

    fn set_title(&mut self, title: &str) {
        if let Some(window) = &self.app.window {
            window.set_title(title);
        }
    }

    fn poll_events(&mut self, out: &mut Vec<RawEvent>) {
        self.pump(Duration::ZERO);
        out.append(&mut self.app.pending);
    }

    fn update_texture(&mut self, pixels: &[u8], pitch: usize) -> Result<(), DisplayError> {
        let Some(surface) = &mut self.app.pixels else {
            return Ok(());
        };

        let row_bytes = self.app.spec.texture_width as usize * 4;
        let frame = surface.frame_mut();
        for (row, dst) in frame.chunks_exact_mut(row_bytes).enumerate() {
            let start = row * pitch;
            dst.copy_from_slice(&pixels[start..start + row_bytes]);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        // The render pass clears to the clear color before drawing the texture
        if let Some(surface) = &self.app.pixels {
            surface.render()?;
        }
        Ok(())
    }

    fn ticks(&self) -> u64 {
        self.opened_at.elapsed().as_millis() as u64
    }

    fn delay(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }

    fn shutdown(&mut self) {
        // Surface before window, window before the loop
        self.app.pixels = None;
        self.app.window = None;
        self.app.pending.clear();
        self.event_loop = None;
        log::info!("Window closed");
    }
}
