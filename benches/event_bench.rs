// Window plugin benchmarks
// Per-frame cost of event translation and frame upload on the headless backend

use criterion::{criterion_group, criterion_main, Criterion};
use gb_window::input::{translate_into, PRIMARY_WINDOW_ID};
use gb_window::{DisplayWindow, HeadlessBackend, RawEvent, ScreenBuffer, WindowConfig, WindowPlugin};
use std::hint::black_box;
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, PhysicalKey};

/// A busy frame's worth of input: key mashing plus cursor movement
fn busy_frame_events() -> Vec<RawEvent> {
    let mut events = Vec::new();
    for code in [
        KeyCode::ArrowUp,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::Space,
        KeyCode::KeyQ,
    ] {
        events.push(RawEvent::KeyDown(PhysicalKey::Code(code)));
        events.push(RawEvent::KeyUp(PhysicalKey::Code(code)));
    }
    for x in 0..20 {
        events.push(RawEvent::MouseMotion {
            window_id: PRIMARY_WINDOW_ID,
            x,
            y: x * 2,
        });
    }
    events.push(RawEvent::MouseButtonUp {
        window_id: PRIMARY_WINDOW_ID,
        x: 19,
        y: 38,
        button: MouseButton::Left,
    });
    events
}

/// Benchmark raw-to-host event translation
fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_translation");
    let raw = busy_frame_events();

    group.bench_function("busy_frame", |b| {
        let mut events = Vec::with_capacity(raw.len());
        b.iter(|| {
            events.clear();
            translate_into(black_box(raw.iter().copied()), &mut events);
            black_box(&events);
        });
    });

    group.finish();
}

/// Benchmark one full host frame through the plugin
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("plugin_frame");

    group.bench_function("post_tick", |b| {
        let mut window = DisplayWindow::<HeadlessBackend>::new(&WindowConfig::default())
            .expect("headless window");
        if let Some(backend) = window.backend_mut() {
            backend.discard_frames();
        }
        let mut screen = ScreenBuffer::new();
        screen.test_pattern(0);

        b.iter(|| {
            window.post_tick(black_box(&screen)).expect("present");
        });
    });

    group.bench_function("handle_events", |b| {
        let mut window = DisplayWindow::<HeadlessBackend>::new(&WindowConfig::default())
            .expect("headless window");
        let raw = busy_frame_events();

        b.iter(|| {
            if let Some(backend) = window.backend_mut() {
                backend.push_events(raw.iter().copied());
            }
            black_box(window.handle_events(Vec::new()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_translation, bench_frame);
criterion_main!(benches);
