//! Headless demo: drives a scripted navigation session and logs the camera
//! pose as it goes.
//!
//! Usage: `scene-nav-demo [options.toml]`. Run with `RUST_LOG=debug` to see
//! mode changes and animation events.

use std::path::Path;

use glam::{DVec2, DVec3};
use scene_nav::camera::{Camera, NavigationBounds, WorldFrame};
use scene_nav::input::{FocusEvent, GestureEvent, KeyEvent, MouseButtons};
use scene_nav::navigation::{JoystickVector, SceneNavigationController};
use scene_nav::options::NavigationOptions;
use scene_nav::util::frame_timing::FrameClock;
use web_time::Duration;

/// One scripted input, fired at a given frame.
enum Step {
    Gesture(GestureEvent),
    Key(KeyEvent),
    Focus(FocusEvent),
    PanStick(JoystickVector),
    MoveUp(bool),
    TopView,
    Turn(i32),
    FitBounds,
}

fn script() -> Vec<(u32, Step)> {
    let center = DVec2::new(640.0, 360.0);
    let mut steps = vec![(5, Step::Key(KeyEvent::down("KeyW")))];
    steps.push((65, Step::Key(KeyEvent::up("KeyW"))));

    for i in 0..20 {
        let p = center + DVec2::new(f64::from(i) * 6.0, 0.0);
        steps.push((70 + i, Step::Gesture(GestureEvent::drag(p, MouseButtons::LEFT))));
    }
    steps.push((90, Step::Gesture(GestureEvent::drag_end(center))));

    for i in 0..5 {
        steps.push((95 + i * 2, Step::Gesture(GestureEvent::scroll(center, 1.0))));
    }
    steps.push((110, Step::Gesture(GestureEvent::pointer_move(center))));

    steps.push((120, Step::TopView));
    steps.push((160, Step::Turn(1)));
    steps.push((200, Step::Key(KeyEvent::down("KeyD"))));
    steps.push((205, Step::PanStick(JoystickVector::new(0.0, 0.8))));
    steps.push((210, Step::MoveUp(true)));
    steps.push((220, Step::Focus(FocusEvent::WindowBlur)));
    steps.push((230, Step::FitBounds));
    steps
}

fn load_options() -> NavigationOptions {
    let Some(path) = std::env::args().nth(1) else {
        return NavigationOptions::default();
    };
    match NavigationOptions::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("loaded navigation options from {path}");
            options
        }
        Err(e) => {
            log::error!("{e}; falling back to defaults");
            NavigationOptions::default()
        }
    }
}

fn log_pose(frame: u32, nav: &SceneNavigationController) {
    let Some(camera) = nav.camera() else {
        return;
    };
    let look = camera.as_look_from();
    log::info!(
        "frame {frame:>3}: eye {:.2} yaw {:.1} pitch {:.1} mode {:?}{}",
        look.eye,
        look.yaw,
        look.pitch,
        nav.navigation_mode(),
        if nav.is_animating() { " (animating)" } else { "" },
    );
}

fn main() {
    env_logger::init();

    let options = load_options();
    let bounds = NavigationBounds::new(
        DVec3::new(-500.0, -500.0, 0.0),
        DVec3::new(500.0, 500.0, 300.0),
        WorldFrame::Flat,
    );
    let mut nav = SceneNavigationController::new(bounds, options);
    let camera = Camera::new(DVec3::new(0.0, -200.0, 50.0), DVec3::Y, DVec3::Z);
    if let Err(e) = nav.activate(camera) {
        log::error!("{e}");
        std::process::exit(1);
    }

    let mut steps = script().into_iter().peekable();
    let mut clock = FrameClock::new(60);
    let mut frame = 0;
    while frame < 280 {
        if !clock.should_tick() {
            std::thread::sleep(Duration::from_millis(1));
            continue;
        }
        let dt = clock.tick();

        while let Some((_, step)) = steps.next_if(|(at, _)| *at == frame) {
            match step {
                Step::Gesture(event) => {
                    let _ = nav.on_gesture_event(&event);
                }
                Step::Key(event) => {
                    let _ = nav.on_key_event(&event);
                }
                Step::Focus(event) => nav.on_focus_event(event),
                Step::PanStick(stick) => nav.set_pan_stick(stick),
                Step::MoveUp(active) => nav.set_move_up(active),
                Step::TopView => {
                    let _ = nav.show_top_view();
                }
                Step::Turn(quadrants) => {
                    let _ = nav.turn(quadrants);
                }
                Step::FitBounds => {
                    let _ = nav.fit_bounds();
                }
            }
        }

        if nav.tick(dt) && frame % 10 == 0 {
            log_pose(frame, &nav);
        }
        if let Some(orientation) = nav.take_orientation_change() {
            log::debug!(
                "heading {:.1} tilt {:.1}",
                orientation.yaw,
                orientation.pitch
            );
        }
        frame += 1;
    }

    log_pose(frame, &nav);
    log::info!("average {:.0} fps", clock.fps());
    let _ = nav.deactivate();
}
