// Frame timing
//
// Sleeps away whatever is left of the frame budget. The budget is
// 1000 / (60 × speed) ms; frames that overrun get no delay and nothing is
// carried over to the next frame.

use super::backend::DisplayBackend;

/// Base frame rate of the emulated screen in Hz
pub const TARGET_FPS: f64 = 60.0;

/// Milliseconds left to wait this frame
///
/// Returns 0 when the frame already ran over budget, or when `speed` is not a
/// positive finite number (unlimited).
pub fn frame_delay(speed: f32, elapsed_ms: u64) -> u64 {
    let speed = f64::from(speed);
    if !speed.is_finite() || speed <= 0.0 {
        return 0;
    }

    let delay = (1000.0 / (TARGET_FPS * speed) - elapsed_ms as f64).round();
    if delay > 0.0 {
        delay as u64
    } else {
        0
    }
}

/// Frame limiter tracking the tick count of the previous frame
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    last_tick: u64,
}

impl FrameLimiter {
    /// Start measuring from `now` (backend ticks)
    pub fn new(now: u64) -> Self {
        Self { last_tick: now }
    }

    /// Tick count recorded at the end of the previous frame
    pub fn last_tick(&self) -> u64 {
        self.last_tick
    }

    /// Wait out the rest of the frame on `backend`'s clock
    ///
    /// Returns the delay that was requested.
    pub fn wait<B: DisplayBackend>(&mut self, backend: &mut B, speed: f32) -> u64 {
        let now = backend.ticks();
        let delay = frame_delay(speed, now.saturating_sub(self.last_tick));
        if delay > 0 {
            backend.delay(delay);
        }
        self.last_tick = backend.ticks();
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HeadlessBackend;

    #[test]
    fn test_full_budget_at_normal_speed() {
        // 1000 / 60 = 16.67 ms
        assert_eq!(frame_delay(1.0, 0), 17);
    }

    #[test]
    fn test_elapsed_time_is_subtracted() {
        assert_eq!(frame_delay(1.0, 10), 7);
        assert_eq!(frame_delay(1.0, 16), 1);
    }

    #[test]
    fn test_overrun_clamps_to_zero() {
        assert_eq!(frame_delay(1.0, 17), 0);
        assert_eq!(frame_delay(1.0, 500), 0);
    }

    #[test]
    fn test_double_speed_halves_the_budget() {
        let normal = frame_delay(1.0, 0) as i64;
        let double = frame_delay(2.0, 0) as i64;
        assert!((normal - 2 * double).abs() <= 1, "{} vs {}", normal, double);
    }

    #[test]
    fn test_slow_motion() {
        assert_eq!(frame_delay(0.5, 0), 33);
    }

    #[test]
    fn test_invalid_speed_is_unlimited() {
        assert_eq!(frame_delay(0.0, 0), 0);
        assert_eq!(frame_delay(-1.0, 0), 0);
        assert_eq!(frame_delay(f32::NAN, 0), 0);
        assert_eq!(frame_delay(f32::INFINITY, 0), 0);
    }

    #[test]
    fn test_limiter_restarts_from_clock_after_wait() {
        let mut clock = HeadlessBackend::default();
        clock.advance(100);
        let mut limiter = FrameLimiter::new(clock.ticks());
        assert_eq!(limiter.last_tick(), 100);

        clock.advance(5);
        assert_eq!(limiter.wait(&mut clock, 1.0), 12);
        assert_eq!(limiter.last_tick(), 117);

        // Overrun: no sleep, baseline moves to the current tick
        clock.advance(40);
        assert_eq!(limiter.wait(&mut clock, 1.0), 0);
        assert_eq!(limiter.last_tick(), 157);
        assert_eq!(clock.delays(), &[12]);
    }
}
