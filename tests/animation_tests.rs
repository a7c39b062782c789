// Host-side tests for the frame updater and scroll-section trigger.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use crate::core::scene::SceneConfig;
use crate::core::state::*;

const EPS: f32 = 1e-4;

fn make_state() -> AnimationState {
    AnimationState::new(SceneConfig::default(), Viewport::new(800.0, 600.0), 0.0)
}

fn scroll(state: &mut AnimationState, y: f32, now: f64) -> Option<SectionChange> {
    state.handle_event(HostEvent::Scroll { y }, now)
}

#[test]
fn section_objects_are_stacked_by_objects_distance() {
    let state = make_state();
    assert_eq!(state.objects.len(), 3);
    let ys: Vec<f32> = state.objects.iter().map(|o| o.position.y).collect();
    assert_eq!(ys, vec![0.0, -4.0, -8.0]);
    let xs: Vec<f32> = state.objects.iter().map(|o| o.position.x).collect();
    assert_eq!(xs, vec![2.0, -2.0, 2.0]);
}

#[test]
fn delta_time_is_difference_between_frames() {
    let mut state = make_state();
    let first = state.advance(0.25);
    assert!((first.delta - 0.25).abs() < 1e-12);
    let second = state.advance(0.3);
    assert!((second.delta - 0.05).abs() < 1e-12);
}

#[test]
fn parallax_moves_rig_by_delta_fraction() {
    let mut state = make_state();
    // Cursor at x = 0.5 of the way right of centre: client_x = width.
    state.handle_event(
        HostEvent::PointerMove {
            client_x: 800.0,
            client_y: 300.0,
        },
        0.0,
    );
    assert!((state.cursor.x - 0.5).abs() < EPS);
    assert!(state.cursor.y.abs() < EPS);

    state.advance(0.1);
    assert!((state.rig.group.x - 0.05).abs() < EPS);
    assert!(state.rig.group.y.abs() < EPS);
}

#[test]
fn parallax_y_is_inverted() {
    let mut state = make_state();
    state.on_pointer_move(400.0, 0.0); // top edge: cursor.y = -0.5
    state.advance(0.5);
    // target y = +0.5, rig moves halfway
    assert!((state.rig.group.y - 0.25).abs() < EPS);
}

#[test]
fn parallax_never_passes_target_for_small_deltas() {
    let mut state = make_state();
    state.on_pointer_move(800.0, 600.0);
    let mut t = 0.0;
    for _ in 0..200 {
        t += 1.0 / 60.0;
        state.advance(t);
        assert!(state.rig.group.x <= 0.5 + EPS);
        assert!(state.rig.group.y >= -0.5 - EPS);
    }
    assert!(state.rig.group.x > 0.4);
}

#[test]
fn parallax_overshoots_for_delta_above_one_second() {
    let mut state = make_state();
    state.on_pointer_move(800.0, 300.0);
    state.advance(1.5);
    // 0 + (0.5 - 0) * 1.5
    assert!((state.rig.group.x - 0.75).abs() < EPS);
}

#[test]
fn spin_accumulates_per_object() {
    let mut state = make_state();
    let d = 0.016;
    let n = 50;
    for i in 1..=n {
        state.advance(i as f64 * d);
    }
    for object in &state.objects {
        assert!((object.rotation.x - n as f32 * d as f32 * 0.1).abs() < EPS);
        assert!((object.rotation.y - n as f32 * d as f32 * 0.12).abs() < EPS);
        assert_eq!(object.rotation.z, 0.0);
    }
}

#[test]
fn camera_y_tracks_scroll_absolutely() {
    let mut state = make_state();
    state.advance(0.016);
    assert_eq!(state.rig.camera_y, 0.0);

    scroll(&mut state, 600.0, 0.016);
    state.advance(0.032);
    assert!((state.rig.camera_y + 4.0).abs() < EPS);

    scroll(&mut state, 300.0, 0.032);
    state.advance(0.048);
    assert!((state.rig.camera_y + 2.0).abs() < EPS);
}

#[test]
fn camera_y_for_scroll_is_pure() {
    assert_eq!(camera_y_for_scroll(0.0, 600.0, 4.0), 0.0);
    assert!((camera_y_for_scroll(600.0, 600.0, 4.0) + 4.0).abs() < EPS);
    assert!((camera_y_for_scroll(1200.0, 600.0, 4.0) + 8.0).abs() < EPS);
}

#[test]
fn scroll_maps_to_sections_with_round_half_up() {
    assert_eq!(section_for_scroll(0.0, 600.0), 0);
    assert_eq!(section_for_scroll(299.0, 600.0), 0);
    assert_eq!(section_for_scroll(300.0, 600.0), 1);
    assert_eq!(section_for_scroll(600.0, 600.0), 1);
    assert_eq!(section_for_scroll(1200.0, 600.0), 2);
}

#[test]
fn out_of_range_sections_are_clamped() {
    assert_eq!(section_for_scroll(10_000.0, 600.0), 2);
    assert_eq!(section_for_scroll(-500.0, 600.0), 0);
    assert_eq!(section_for_scroll(100.0, 0.0), 2);
}

#[test]
fn scrolling_into_new_section_starts_one_tween() {
    let mut state = make_state();
    let change = scroll(&mut state, 650.0, 1.0);
    assert_eq!(change, Some(SectionChange { from: 0, to: 1 }));
    assert_eq!(state.current_section, 1);
    assert_eq!(state.active_tweens(), 1);
    assert_eq!(state.tweens_on(1), 1);

    // Same section again: no further tween.
    assert_eq!(scroll(&mut state, 650.0, 1.1), None);
    assert_eq!(scroll(&mut state, 700.0, 1.2), None);
    assert_eq!(state.active_tweens(), 1);
}

#[test]
fn scrolling_past_last_section_triggers_nothing_extra() {
    let mut state = make_state();
    assert!(scroll(&mut state, 1200.0, 0.0).is_some());
    assert_eq!(state.current_section, 2);
    assert_eq!(scroll(&mut state, 5000.0, 0.1), None);
    assert_eq!(state.current_section, 2);
    assert_eq!(state.active_tweens(), 1);
}

#[test]
fn section_tween_adds_rotation_on_top_of_spin() {
    let mut state = make_state();
    state.advance(1.0);
    let before = state.objects[1].rotation;
    scroll(&mut state, 650.0, 1.0);

    // Run well past the 1.5 s tween at 60 fps.
    let mut t = 1.0;
    let frames = 150;
    for _ in 0..frames {
        t += 1.0 / 60.0;
        state.advance(t);
    }
    assert_eq!(state.active_tweens(), 0);

    let spun = (t - 1.0) as f32;
    let after = state.objects[1].rotation;
    assert!((after.x - before.x - (6.0 + spun * 0.1)).abs() < 1e-3);
    assert!((after.y - before.y - (3.0 + spun * 0.12)).abs() < 1e-3);
    assert!((after.z - before.z - 1.5).abs() < 1e-3);

    // Neighbours only spin.
    assert_eq!(state.objects[0].rotation.z, 0.0);
    assert_eq!(state.objects[2].rotation.z, 0.0);
}

#[test]
fn overlapping_tweens_on_one_section_add_up() {
    let mut state = make_state();
    scroll(&mut state, 600.0, 0.0); // -> 1
    scroll(&mut state, 0.0, 0.2); // -> 0
    scroll(&mut state, 600.0, 0.4); // -> 1 again, first tween still running
    assert_eq!(state.tweens_on(1), 2);
    state.advance(5.0);
    assert_eq!(state.active_tweens(), 0);
    assert!((state.objects[1].rotation.z - 3.0).abs() < 1e-3);
    assert!((state.objects[0].rotation.z - 1.5).abs() < 1e-3);
}

#[test]
fn resize_changes_section_normalisation() {
    let mut state = make_state();
    state.handle_event(
        HostEvent::Resize {
            width: 800.0,
            height: 1000.0,
        },
        0.0,
    );
    assert_eq!(scroll(&mut state, 650.0, 0.0), Some(SectionChange { from: 0, to: 1 }));
    assert_eq!(scroll(&mut state, 1400.0, 0.1), None);
    assert_eq!(scroll(&mut state, 1600.0, 0.2), Some(SectionChange { from: 1, to: 2 }));
}

#[test]
fn initial_scroll_positions_camera_without_tween() {
    let mut state = AnimationState::new(SceneConfig::default(), Viewport::new(800.0, 600.0), 1200.0);
    assert_eq!(state.current_section, 0);
    assert_eq!(state.active_tweens(), 0);
    state.advance(0.016);
    assert!((state.rig.camera_y + 8.0).abs() < EPS);
}

#[test]
fn cursor_is_centred_offset() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(Cursor::from_client(400.0, 300.0, vp), Cursor { x: 0.0, y: 0.0 });
    let c = Cursor::from_client(0.0, 600.0, vp);
    assert!((c.x + 0.5).abs() < EPS);
    assert!((c.y - 0.5).abs() < EPS);
}

#[test]
fn camera_eye_combines_group_and_scroll() {
    let mut state = make_state();
    state.on_pointer_move(800.0, 300.0);
    scroll(&mut state, 600.0, 0.0);
    state.advance(0.5);
    let eye = state.rig.eye();
    assert!((eye.x - 0.25).abs() < EPS);
    assert!((eye.y + 4.0).abs() < EPS);
    assert_eq!(eye.z, 6.0);
    let view = state.view_matrix();
    let origin_in_view = view.transform_point3(eye);
    assert!(origin_in_view.length() < EPS);
}
