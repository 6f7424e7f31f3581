// Headless backend - Display backend without an OS window
//
// Events come from a script, time comes from a manual clock and presented
// frames are kept in memory. Used by the test suite and the benchmarks.

use super::backend::{DisplayBackend, SurfaceSpec};
use crate::error::DisplayError;
use crate::input::RawEvent;
use std::collections::VecDeque;

/// In-memory display backend
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    spec: Option<SurfaceSpec>,
    title: String,
    titles: Vec<String>,
    queue: VecDeque<RawEvent>,
    texture: Vec<u8>,
    texture_pitch: usize,
    uploads: usize,
    frames_presented: usize,
    last_frame: Option<Vec<u8>>,
    keep_frames: bool,
    now: u64,
    delays: Vec<u64>,
    shut_down: bool,
}

impl HeadlessBackend {
    /// Queue an OS event for the next `poll_events`
    pub fn push_event(&mut self, event: RawEvent) {
        self.queue.push_back(event);
    }

    /// Queue several OS events, in order
    pub fn push_events<I: IntoIterator<Item = RawEvent>>(&mut self, events: I) {
        self.queue.extend(events);
    }

    /// Number of events still waiting to be polled
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Move the clock forward without sleeping (simulated work)
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// Every delay requested so far, in order
    pub fn delays(&self) -> &[u64] {
        &self.delays
    }

    /// Spec the backend was opened with
    pub fn spec(&self) -> Option<&SurfaceSpec> {
        self.spec.as_ref()
    }

    /// Current window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Every title set after opening, in order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of `update_texture` calls
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    /// Number of frames presented
    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// Texture contents of the most recently presented frame
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.last_frame.as_deref()
    }

    /// Count presented frames without copying their pixels
    pub fn discard_frames(&mut self) {
        self.keep_frames = false;
        self.last_frame = None;
    }

    /// Whether `shutdown` has been called
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl DisplayBackend for HeadlessBackend {
    fn open(spec: &SurfaceSpec) -> Result<Self, DisplayError> {
        let row_bytes = spec.texture_width as usize * 4;
        Ok(Self {
            spec: Some(spec.clone()),
            title: spec.title.clone(),
            texture: vec![0; row_bytes * spec.texture_height as usize],
            texture_pitch: row_bytes,
            keep_frames: true,
            ..Self::default()
        })
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.titles.push(title.to_string());
    }

    fn poll_events(&mut self, out: &mut Vec<RawEvent>) {
        out.extend(self.queue.drain(..));
    }

    fn update_texture(&mut self, pixels: &[u8], pitch: usize) -> Result<(), DisplayError> {
        let row_bytes = self.texture_pitch;
        for (row, dst) in self.texture.chunks_exact_mut(row_bytes).enumerate() {
            let start = row * pitch;
            dst.copy_from_slice(&pixels[start..start + row_bytes]);
        }
        self.uploads += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if self.keep_frames {
            match &mut self.last_frame {
                Some(frame) => frame.copy_from_slice(&self.texture),
                None => self.last_frame = Some(self.texture.clone()),
            }
        }
        self.frames_presented += 1;
        Ok(())
    }

    fn ticks(&self) -> u64 {
        self.now
    }

    fn delay(&mut self, ms: u64) {
        self.delays.push(ms);
        self.now += ms;
    }

    fn shutdown(&mut self) {
        self.queue.clear();
        self.shut_down = true;
    }
}
