use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{DVec2, DVec3};
use scene_nav::camera::{Camera, LookAt, NavigationBounds, WorldFrame};
use scene_nav::input::{GestureEvent, KeyEvent, Modifiers, MouseButtons};
use scene_nav::navigation::{
    classify, AllowedModes, KeyNavigation, LookAnimation, NavigationMode,
};
use scene_nav::options::NavigationOptions;

fn bounds() -> NavigationBounds {
    NavigationBounds::new(
        DVec3::splat(-1_000.0),
        DVec3::splat(1_000.0),
        WorldFrame::Flat,
    )
}

fn classify_benchmark(c: &mut Criterion) {
    let events = [
        GestureEvent::drag(DVec2::new(10.0, 20.0), MouseButtons::LEFT),
        GestureEvent::drag(DVec2::new(10.0, 20.0), MouseButtons::RIGHT)
            .with_modifiers(Modifiers::CTRL),
        GestureEvent::scroll(DVec2::ZERO, 1.0),
        GestureEvent::click_up(DVec2::ZERO),
    ];
    let allowed = AllowedModes::standard().with(NavigationMode::ZoomOnClick);
    c.bench_function("classify_gesture", |b| {
        b.iter(|| {
            for event in &events {
                let _ = black_box(classify(
                    black_box(event),
                    NavigationMode::Zoom,
                    allowed,
                    true,
                    false,
                ));
            }
        });
    });
}

fn key_update_benchmark(c: &mut Criterion) {
    let options = NavigationOptions::default();
    let mut keys = KeyNavigation::new(options.keys, options.keybindings);
    for code in ["KeyW", "KeyD", "KeyE"] {
        let _ = keys.on_key_event(&KeyEvent::down(code));
    }
    let bounds = bounds();
    let mut camera = Camera::new(DVec3::ZERO, DVec3::Y, DVec3::Z);
    c.bench_function("key_update_three_held", |b| {
        b.iter(|| {
            camera.eye = DVec3::ZERO;
            black_box(keys.update(&mut camera, &bounds, Duration::from_millis(16)))
        });
    });
}

fn look_animation_benchmark(c: &mut Criterion) {
    let target = LookAt {
        reference: DVec3::new(10.0, 20.0, 0.0),
        yaw: 270.0,
        pitch: -45.0,
        distance: 80.0,
    };
    c.bench_function("look_animation_30_frames", |b| {
        b.iter(|| {
            let mut camera = Camera::new(DVec3::ZERO, DVec3::Y, DVec3::Z);
            let mut animation =
                LookAnimation::new(target, 50.0, Duration::from_millis(500));
            for _ in 0..30 {
                let _ = animation.step(&mut camera, Duration::from_millis(17));
            }
            black_box(camera.eye)
        });
    });
}

criterion_group!(
    benches,
    classify_benchmark,
    key_update_benchmark,
    look_animation_benchmark
);
criterion_main!(benches);
