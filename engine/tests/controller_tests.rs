//! Controller Tests - Direction Table, Speed Blending, Falling, Orchestration
//!
//! Exercises the player module through its public API: key combinations to
//! heading offsets, mode-driven speed changes, fall integration and the
//! per-frame character tick against a reference triangle world.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::Vec3;
use stride_engine::animation::Animator;
use stride_engine::camera::CameraState;
use stride_engine::config::ControllerConfig;
use stride_engine::input::MovementKeys;
use stride_engine::physics::{Capsule, TriangleWorld};
use stride_engine::player::{
    CharacterController, DirectionResolver, FallController, FallState, LocomotionModel,
    LocomotionState, MovementMode,
};

const DT: f32 = 1.0 / 60.0;

fn keys(w: bool, a: bool, s: bool, d: bool) -> MovementKeys {
    MovementKeys {
        forward: w,
        left: a,
        backward: s,
        right: d,
        run: false,
    }
}

fn floor_world() -> TriangleWorld {
    let mut world = TriangleWorld::new();
    world.push_floor((-100.0, -100.0), (100.0, 100.0), 0.0);
    world
}

// ============================================================================
// DirectionResolver
// ============================================================================

/// Heading table keyed on the highest-priority held keys.
fn expected_offset(k: &MovementKeys) -> Option<f32> {
    match (k.forward, k.backward, k.left, k.right) {
        (true, _, true, _) => Some(FRAC_PI_4),
        (true, _, false, true) => Some(-FRAC_PI_4),
        (true, _, false, false) => Some(0.0),
        (false, true, true, _) => Some(3.0 * FRAC_PI_4),
        (false, true, false, true) => Some(-3.0 * FRAC_PI_4),
        (false, true, false, false) => Some(PI),
        (false, false, true, _) => Some(FRAC_PI_2),
        (false, false, false, true) => Some(-FRAC_PI_2),
        (false, false, false, false) => None,
    }
}

#[test]
fn test_direction_all_sixteen_combinations() {
    for bits in 0u8..16 {
        let k = keys(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        let actual = DirectionResolver::offset_for(&k);
        match (actual, expected_offset(&k)) {
            (Some(a), Some(e)) => assert!((a - e).abs() < 1e-6, "{k:?}: {a} != {e}"),
            (None, None) => {}
            (a, e) => panic!("{k:?}: {a:?} != {e:?}"),
        }
    }
}

#[test]
fn test_direction_release_returns_last_heading() {
    let mut state = LocomotionState::default();
    DirectionResolver::resolve(&keys(false, true, true, false), &mut state);
    let released = DirectionResolver::resolve(&MovementKeys::default(), &mut state);
    assert!((released - 3.0 * FRAC_PI_4).abs() < 1e-6);
}

// ============================================================================
// LocomotionModel
// ============================================================================

#[test]
fn test_idle_drives_mode_and_speed_down() {
    let mut model = LocomotionModel::default();
    let mut state = LocomotionState::default();
    let run = MovementKeys {
        forward: true,
        run: true,
        ..Default::default()
    };
    for _ in 0..40 {
        model.update(&run, &mut state);
    }
    assert!(state.current_speed > 100.0);

    let (mode, speed) = model.update(&MovementKeys::default(), &mut state);
    assert_eq!(mode, MovementMode::Idle);
    assert_eq!(speed, 0.0);

    for _ in 0..10 {
        let (mode, speed) = model.update(&MovementKeys::default(), &mut state);
        assert_eq!(mode, MovementMode::Idle);
        assert!(speed >= 0.0);
    }
}

#[test]
fn test_run_speed_exceeds_walk_cap() {
    let mut model = LocomotionModel::default();
    let mut state = LocomotionState::default();
    let run = MovementKeys {
        right: true,
        run: true,
        ..Default::default()
    };
    for _ in 0..100 {
        model.update(&run, &mut state);
    }
    assert_eq!(state.current_speed, 300.0);
    assert_eq!(model.params().max_speed, 500.0);
}

// ============================================================================
// FallController
// ============================================================================

#[test]
fn test_fall_three_ticks_then_ground() {
    let mut state = FallState::default();
    for _ in 0..3 {
        FallController::update(&mut state);
    }
    assert_eq!(state.falling_acceleration, 3.0);
    assert_eq!(state.falling_speed, 1.0 + 4.0 + 9.0);

    state.grounded = true;
    FallController::update(&mut state);
    assert_eq!(state.falling_acceleration, 0.0);
    assert_eq!(state.falling_speed, 0.0);
}

// ============================================================================
// CharacterController
// ============================================================================

fn raised_character(height: f32) -> CharacterController {
    let capsule = Capsule::new(
        Vec3::new(0.0, height, 0.0),
        Vec3::new(0.0, height + 8.0, 0.0),
        0.5,
    )
    .unwrap();
    CharacterController::new(
        capsule,
        Animator::new(["Idle", "Walk", "Run"]),
        ControllerConfig::default(),
    )
}

#[test]
fn test_character_falls_and_lands() {
    let mut character = raised_character(3.0);
    let mut camera = CameraState::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 5.0, 0.0));
    let world = floor_world();
    let idle = MovementKeys::default();

    for _ in 0..3 {
        let report = character.tick(&idle, DT, &mut camera, Some(&world)).unwrap();
        assert!(!report.grounded);
    }
    assert_eq!(character.fall_state().falling_acceleration, 3.0);
    assert_eq!(character.fall_state().falling_speed, 14.0);

    let mut landed = false;
    for _ in 0..20 {
        let report = character.tick(&idle, DT, &mut camera, Some(&world)).unwrap();
        if report.grounded {
            landed = true;
            break;
        }
    }
    assert!(landed, "character never touched the floor");

    character.tick(&idle, DT, &mut camera, Some(&world));
    assert_eq!(character.fall_state().falling_acceleration, 0.0);
    assert_eq!(character.fall_state().falling_speed, 0.0);
    assert!((character.capsule().start.y - 0.5).abs() < 1e-3);
}

#[test]
fn test_strafe_moves_sideways_relative_to_camera() {
    let mut character = raised_character(0.5);
    let mut camera = CameraState::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 5.0, 0.0));
    let world = floor_world();
    let right = keys(false, false, false, true);
    character.on_input_changed(&right);

    let start = character.transform().position;
    for _ in 0..40 {
        character.tick(&right, DT, &mut camera, Some(&world));
    }
    let moved = character.transform().position - start;

    // Camera looks down -Z, so D walks toward +X
    assert!(moved.x > 1.0, "moved {moved:?}");
    assert!(moved.z.abs() < 1e-2);
}

#[test]
fn test_facing_converges_on_camera_heading() {
    let mut character = raised_character(0.5);
    let mut camera = CameraState::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 5.0, 0.0));
    let world = floor_world();
    let idle = MovementKeys::default();

    // Target yaw is atan2(0, 10) + PI = PI; 36 steps of 5 degrees cover it
    for _ in 0..40 {
        character.tick(&idle, DT, &mut camera, Some(&world));
    }
    let yaw = character.transform().yaw();
    assert!((yaw.abs() - PI).abs() < 1e-3, "yaw {yaw}");
}

#[test]
fn test_camera_keeps_offset_after_walking() {
    let mut character = raised_character(0.5);
    let mut camera = CameraState::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 5.0, 0.0));
    let world = floor_world();
    let forward = keys(true, false, false, false);
    character.on_input_changed(&forward);

    // Settle so the model position reflects the resting capsule
    character.tick(&forward, 0.0, &mut camera, Some(&world));
    let offset = camera.position - character.transform().position;

    for _ in 0..60 {
        character.tick(&forward, DT, &mut camera, Some(&world));
    }
    let new_offset = camera.position - character.transform().position;

    assert!((new_offset.x - offset.x).abs() < 1e-3);
    assert!((new_offset.z - offset.z).abs() < 1e-3);
    assert_eq!(camera.target, character.transform().position);
}
