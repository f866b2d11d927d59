//! Walk Simulation - Headless Controller Run
//!
//! Drives the character controller through a scripted key timeline at 60 Hz
//! over a floor with a wall ahead, logging position, mode and ground contact
//! once per simulated second. Useful for tuning config values without a
//! renderer.
//!
//! Run with: `cargo run --bin walk_sim [-- path/to/controller.json]`
//!
//! Timeline:
//! - 0.5 s: W (walk toward the wall)
//! - 3.0 s: Shift (run)
//! - 6.0 s: release W, hold A (strafe left along the wall)
//! - 8.0 s: release everything
//! - 9.0 s: S + D (back off diagonally)
//! - 11.0 s: release everything

use std::path::Path;

use glam::Vec3;
use winit::keyboard::{Key, NamedKey};

use stride_engine::camera::AutoOrbit;
use stride_engine::config::ControllerConfig;
use stride_engine::input::winit_keys::key_name;
use stride_engine::{MovementApp, TriangleWorld};

// ============================================================================
// SCENE
// ============================================================================

/// Character bounding box, centimetres.
const MODEL_SIZE: Vec3 = Vec3::new(60.0, 180.0, 50.0);

/// Distance from the spawn point to the wall.
const WALL_DISTANCE: f32 = 1500.0;

/// Slow camera orbit so "forward" drifts during the run, radians per second.
const ORBIT_RATE: f32 = 0.1;

const SIMULATED_SECONDS: u32 = 12;
const FRAMES_PER_SECOND: u32 = 60;

fn build_world() -> TriangleWorld {
    let mut world = TriangleWorld::new();
    world.push_floor((-5000.0, -5000.0), (5000.0, 5000.0), 0.0);

    let z = -WALL_DISTANCE;
    let p00 = Vec3::new(-3000.0, 0.0, z);
    let p10 = Vec3::new(3000.0, 0.0, z);
    let p11 = Vec3::new(3000.0, 1000.0, z);
    let p01 = Vec3::new(-3000.0, 1000.0, z);
    world.push_triangle(p00, p10, p11);
    world.push_triangle(p00, p11, p01);
    world
}

// ============================================================================
// SCRIPT
// ============================================================================

/// `(time in ms, key, pressed)`
fn timeline() -> Vec<(f64, Key, bool)> {
    let w = Key::Character("w".into());
    let a = Key::Character("a".into());
    let s = Key::Character("s".into());
    let d = Key::Character("d".into());
    let shift = Key::Named(NamedKey::Shift);

    vec![
        (500.0, w.clone(), true),
        (3000.0, shift.clone(), true),
        (6000.0, w, false),
        (6000.0, a.clone(), true),
        (8000.0, a, false),
        (8000.0, shift, false),
        (9000.0, s.clone(), true),
        (9000.0, d.clone(), true),
        (11000.0, s, false),
        (11000.0, d, false),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    stride_engine::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ControllerConfig::load(Path::new(&path))?,
        None => ControllerConfig::default(),
    };
    let mut app = MovementApp::new(config);
    app.set_orbit(Box::new(AutoOrbit::new(ORBIT_RATE)));
    app.character_loaded(MODEL_SIZE, ["Idle", "Walk", "Run"])?;
    app.world_loaded(build_world());

    let mut script = timeline().into_iter().peekable();
    let frame_ms = 1000.0 / f64::from(FRAMES_PER_SECOND);

    for frame in 0..=SIMULATED_SECONDS * FRAMES_PER_SECOND {
        let time = f64::from(frame) * frame_ms;

        while let Some((_, key, pressed)) = script.next_if(|(at, _, _)| *at <= time) {
            let Some(name) = key_name(&key) else {
                continue;
            };
            if pressed {
                app.key_down(&name);
            } else {
                app.key_up(&name);
            }
        }

        let report = app.update(time);

        if frame % FRAMES_PER_SECOND == 0 {
            if let Some(report) = report {
                tracing::info!(
                    second = frame / FRAMES_PER_SECOND,
                    mode = ?report.mode,
                    speed = report.speed,
                    grounded = report.grounded,
                    x = report.position.x,
                    y = report.position.y,
                    z = report.position.z,
                    "tick"
                );
            }
        }
    }

    if let Some(character) = app.character() {
        let camera = app.camera();
        tracing::info!(
            position = ?character.transform().position,
            yaw_degrees = character.transform().yaw().to_degrees(),
            camera = ?camera.position,
            "simulation finished"
        );
    }
    Ok(())
}
