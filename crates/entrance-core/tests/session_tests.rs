// Host-side tests for the alignment interaction state machine.
// Time is driven explicitly at 60 fps so every scenario is deterministic.

use entrance_core::{Cue, InteractionSession, Params, Placement, Side, Viewport};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

struct Clock {
    now: f64,
}

impl Clock {
    fn new() -> Self {
        // away from sin/cos zeros so the idle float always moves something
        Self { now: 1.0 }
    }

    fn run(&mut self, s: &mut InteractionSession, seconds: f32) -> Vec<Cue> {
        let frames = (seconds / DT).round() as usize;
        let mut fired = Vec::new();
        for _ in 0..frames {
            self.now += DT as f64;
            fired.extend(s.tick(self.now, DT));
            assert_invariants(s);
        }
        fired
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn session_at(left: Vec2, right: Vec2) -> InteractionSession {
    init_logging();
    InteractionSession::new(
        Params::default(),
        Viewport::new(1280.0, 800.0),
        Placement {
            left,
            right,
            attempts: 1,
            fallback: false,
        },
    )
}

fn spread_session() -> InteractionSession {
    session_at(Vec2::new(-300.0, 0.0), Vec2::new(300.0, 0.0))
}

fn assert_invariants(s: &InteractionSession) {
    for side in Side::BOTH {
        assert_eq!(s.drag_enabled(side), !s.is_aligned(), "drag enabled iff not aligned");
    }
    if s.affordance_interactive() {
        assert!(s.is_aligned(), "interactive affordance while not aligned");
    }
}

/// Drag the left element next to the right one and let the snap finish.
fn align(s: &mut InteractionSession, clock: &mut Clock) {
    assert!(s.press(Side::Left));
    let gap = s.scene().right.offset - s.scene().left.offset;
    s.drag(Side::Left, gap - Vec2::new(80.0, -30.0));
    s.release(Side::Left, Vec2::ZERO);
    clock.run(s, 1.0);
}

#[test]
fn close_release_snaps_then_aligns() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    align(&mut s, &mut clock);

    assert!(s.is_aligned());
    assert!(!s.drag_enabled(Side::Left));
    assert!(!s.drag_enabled(Side::Right));
    assert!(s.affordance_active());
    assert!(s.affordance_interactive());

    let scene = s.scene();
    assert!((scene.left.offset - scene.right.offset).length() < 1e-3);
    for node in [&scene.left, &scene.right] {
        assert!((node.scale - 0.8).abs() < 1e-5);
        assert!((node.blur - 1.0).abs() < 1e-5);
        assert!(!node.interactive);
    }
    // affordance sits exactly on the shared midpoint
    assert!((scene.affordance.offset - scene.left.offset).length() < 1e-3);
    assert!(scene.affordance.displayed);
    assert!((scene.affordance.opacity - 1.0).abs() < 1e-5);
    assert!((scene.affordance.scale - 1.0).abs() < 1e-5);
}

#[test]
fn aligned_flips_only_after_the_snap_completes() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    s.drag(Side::Left, Vec2::new(500.0, 0.0));
    s.release(Side::Left, Vec2::ZERO);

    let mut aligned_at = None;
    let mut interactive_at = None;
    let mut snap_seen = false;
    for frame in 1..=90 {
        clock.run(&mut s, DT);
        snap_seen |= s.is_snapping();
        let t = frame as f32 * DT;
        if s.is_aligned() && aligned_at.is_none() {
            aligned_at = Some(t);
            assert!(!s.is_snapping());
            assert!(!s.affordance_interactive());
        }
        if s.affordance_interactive() && interactive_at.is_none() {
            interactive_at = Some(t);
        }
    }
    assert!(snap_seen);
    // settle 0.2s, then snap 0.4s, then entrance 0.3s
    let aligned_at = aligned_at.expect("never aligned");
    let interactive_at = interactive_at.expect("never interactive");
    assert!(aligned_at >= 0.6 - 1e-3, "aligned at {aligned_at}");
    assert!(interactive_at >= aligned_at + 0.3 - 1e-3, "interactive at {interactive_at}");
}

#[test]
fn distance_at_threshold_does_not_snap() {
    let mut s = session_at(Vec2::new(-60.0, 0.0), Vec2::new(60.0, 0.0));
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    s.release(Side::Left, Vec2::ZERO);
    clock.run(&mut s, 1.0);
    assert!(!s.is_aligned());
    assert!(!s.is_snapping());
    assert!(!s.scene().affordance.displayed);
}

#[test]
fn pressing_shrinks_and_settling_restores_rest_scale() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Right));
    clock.run(&mut s, 0.3);
    assert!((s.scene().right.scale - 0.85).abs() < 1e-5);
    assert!(!s.press(Side::Right), "second press on a held element");
    s.release(Side::Right, Vec2::ZERO);
    clock.run(&mut s, 0.3);
    assert!((s.scene().right.scale - 0.8).abs() < 1e-5);
}

#[test]
fn press_is_refused_while_aligned() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    align(&mut s, &mut clock);
    assert!(!s.press(Side::Left));
    assert!(!s.press(Side::Right));
    let before = s.scene().left.offset;
    s.drag(Side::Left, Vec2::new(400.0, 0.0));
    assert_eq!(s.scene().left.offset, before);
}

#[test]
fn live_drag_beyond_threshold_reverts_alignment() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    // the right element is held for the whole scenario
    assert!(s.press(Side::Right));
    align(&mut s, &mut clock);
    assert!(s.is_aligned());
    assert!(s.is_dragging(Side::Right));

    // still inside the threshold: nothing changes
    s.drag(Side::Right, Vec2::new(100.0, 0.0));
    assert!(s.is_aligned());

    s.drag(Side::Right, Vec2::new(40.0, 0.0));
    assert!(!s.is_aligned());
    assert!(s.drag_enabled(Side::Left));
    assert!(s.drag_enabled(Side::Right));
    assert!(!s.affordance_active());
    assert!(!s.affordance_interactive());

    clock.run(&mut s, 0.5);
    let scene = s.scene();
    for node in [&scene.left, &scene.right] {
        assert!((node.scale - 0.8).abs() < 1e-5);
        assert!(node.blur.abs() < 1e-5);
        assert!(node.interactive);
    }
    assert!(!scene.affordance.displayed);
    assert_eq!(scene.affordance.opacity, 0.0);
    assert_eq!(scene.affordance.scale, 0.0);
    assert!(!s.animation_in_progress());
    assert!(!s.commit(), "no reveal from a diverged pair");
}

#[test]
fn new_drag_supersedes_an_inflight_snap() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    s.drag(Side::Left, Vec2::new(520.0, 0.0));
    s.release(Side::Left, Vec2::ZERO);
    clock.run(&mut s, 0.3);
    assert!(s.is_snapping());

    assert!(s.press(Side::Right));
    assert!(!s.is_snapping());
    assert!(!s.scene().affordance.displayed);
    clock.run(&mut s, 1.0);
    assert!(!s.is_aligned());
    assert!(s.scene().left.blur.abs() < 1e-5);
    assert!(s.scene().right.blur.abs() < 1e-5);
}

#[test]
fn held_element_pulled_away_mid_snap_cancels_it() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    s.drag(Side::Left, Vec2::new(520.0, 0.0));
    s.release(Side::Left, Vec2::ZERO);
    clock.run(&mut s, 0.1);

    // grab the right element before the left one has settled
    assert!(s.press(Side::Right));
    clock.run(&mut s, 0.15);
    assert!(s.is_snapping());

    s.drag(Side::Right, Vec2::new(600.0, 0.0));
    assert!(!s.is_snapping());
    assert!(!s.scene().affordance.displayed);
    s.release(Side::Right, Vec2::ZERO);
    clock.run(&mut s, 2.0);

    assert!(!s.is_aligned());
    assert!(s.separation() > 120.0);
    assert!(s.drag_enabled(Side::Left));
    assert!(s.drag_enabled(Side::Right));
    assert!(!s.affordance_interactive());
    assert!(!s.affordance_active());
    for node in [&s.scene().left, &s.scene().right] {
        assert!((node.scale - 0.8).abs() < 1e-5);
        assert!(node.blur.abs() < 1e-5);
        assert!(node.interactive);
    }
}

#[test]
fn held_element_kept_close_lets_the_snap_finish() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    s.drag(Side::Left, Vec2::new(520.0, 0.0));
    s.release(Side::Left, Vec2::ZERO);
    clock.run(&mut s, 0.1);

    assert!(s.press(Side::Right));
    clock.run(&mut s, 0.15);
    assert!(s.is_snapping());
    // small jitter stays inside the threshold
    s.drag(Side::Right, Vec2::new(10.0, 5.0));
    assert!(s.is_snapping());
    clock.run(&mut s, 1.0);

    assert!(s.is_aligned());
    assert!(s.separation() <= 120.0);
    assert!(s.affordance_interactive());
    // the watchdog still sees the held element
    s.drag(Side::Right, Vec2::new(400.0, 0.0));
    assert!(!s.is_aligned());
    assert!(!s.affordance_interactive());
}

#[test]
fn snap_ending_apart_does_not_align() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Right));
    assert!(s.press(Side::Left));
    s.drag(Side::Left, Vec2::new(520.0, 0.0));
    s.release(Side::Left, Vec2::ZERO);
    clock.run(&mut s, 0.25);
    assert!(s.is_snapping());

    // crossing over: close while the snap runs, too far once it lands
    s.drag(Side::Right, Vec2::new(-140.0, 0.0));
    assert!(s.is_snapping());
    assert!(s.separation() <= 120.0);
    clock.run(&mut s, 1.0);

    assert!(!s.is_snapping());
    assert!(!s.is_aligned());
    assert!((s.separation() - 140.0).abs() < 1e-3);
    assert!(s.drag_enabled(Side::Left));
    assert!(!s.scene().affordance.displayed);
    assert!(!s.affordance_interactive());
}

#[test]
fn detached_surfaces_make_evaluation_a_noop() {
    let mut s = session_at(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0));
    s.set_surfaces_attached(false);
    assert!(!s.evaluate_alignment());
    s.set_surfaces_attached(true);
    assert!(s.evaluate_alignment());
    assert!(!s.evaluate_alignment(), "snap already running");
}

#[test]
fn fast_release_throws_then_settles() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    s.release(Side::Left, Vec2::new(1.0e6, 0.0));
    let v = s.drag_state(Side::Left).throw_velocity.expect("no throw");
    assert!((v.length() - s.params().throw_max_speed).abs() < 1e-2);

    let start = s.scene().left.offset.x;
    clock.run(&mut s, 0.2);
    assert!(s.is_throwing(Side::Left));
    assert!(!s.float_allowed(), "float must not fight a throw");
    let fired = clock.run(&mut s, 4.0);
    assert!(!s.is_throwing(Side::Left));
    assert!(fired.contains(&Cue::Settled(Side::Left)));
    assert!(s.scene().left.offset.x - start > 500.0);
}

#[test]
fn thrown_element_can_land_in_alignment() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    // travel of a decaying throw is roughly v / decay
    s.release(Side::Left, Vec2::new(2300.0, 0.0));
    clock.run(&mut s, 4.0);
    let distance = (s.scene().left.offset - s.scene().right.offset).length();
    if s.is_aligned() {
        assert!(distance < 1e-3);
    } else {
        assert!(distance >= 120.0);
    }
}

#[test]
fn idle_float_moves_spread_elements_vertically() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.float_allowed());
    clock.run(&mut s, 0.5);
    let scene = s.scene();
    assert!(scene.left.offset.y != 0.0 || scene.right.offset.y != 0.0);
    assert_eq!(scene.left.offset.x, -300.0);
    assert_eq!(scene.right.offset.x, 300.0);
}

#[test]
fn idle_float_rests_when_elements_are_near() {
    // beyond the threshold but inside 1.5x of it
    let mut s = session_at(Vec2::new(-80.0, 0.0), Vec2::new(80.0, 0.0));
    let mut clock = Clock::new();
    assert!(!s.float_allowed());
    clock.run(&mut s, 0.5);
    assert_eq!(s.scene().left.offset, Vec2::new(-80.0, 0.0));
    assert_eq!(s.scene().right.offset, Vec2::new(80.0, 0.0));
}

#[test]
fn idle_float_rests_at_exactly_the_float_distance() {
    // 1.5x the 120 px threshold
    let mut s = session_at(Vec2::new(-90.0, 0.0), Vec2::new(90.0, 0.0));
    let mut clock = Clock::new();
    assert_eq!(s.separation(), 180.0);
    assert!(!s.float_allowed());
    clock.run(&mut s, 0.5);
    assert_eq!(s.scene().left.offset, Vec2::new(-90.0, 0.0));
    assert_eq!(s.scene().right.offset, Vec2::new(90.0, 0.0));

    let s = session_at(Vec2::new(-90.5, 0.0), Vec2::new(90.5, 0.0));
    assert!(s.float_allowed());
}

#[test]
fn idle_float_rests_while_dragging() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Left));
    assert!(!s.float_allowed());
    clock.run(&mut s, 0.5);
    assert_eq!(s.scene().left.offset, Vec2::new(-300.0, 0.0));
    assert_eq!(s.scene().right.offset, Vec2::new(300.0, 0.0));
}

#[test]
fn idle_float_rests_while_aligned() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    align(&mut s, &mut clock);
    assert!(!s.float_allowed());
    let left = s.scene().left.offset;
    clock.run(&mut s, 1.0);
    assert_eq!(s.scene().left.offset, left);
}

#[test]
fn commit_runs_the_reveal_in_order() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    align(&mut s, &mut clock);

    assert!(s.commit());
    assert!(s.animation_in_progress());
    assert!(!s.affordance_interactive());
    assert!(!s.commit(), "second commit must be ignored");

    let left = s.scene().left.offset;
    let right = s.scene().right.offset;
    let mut timeline: Vec<(f32, Cue)> = Vec::new();
    let mut message_peak: f32 = 0.0;
    for frame in 1..=300 {
        let t = frame as f32 * DT;
        for cue in clock.run(&mut s, DT) {
            timeline.push((t, cue));
        }
        message_peak = message_peak.max(s.scene().message.opacity);
        if (1.6..2.4).contains(&t) {
            // holding on the welcome message
            assert!((s.scene().message.opacity - 1.0).abs() < 1e-5);
            assert!(s.scene().message.displayed);
        }
        // the idle float never runs during the reveal
        assert_eq!(s.scene().left.offset, left);
        assert_eq!(s.scene().right.offset, right);
        assert!(!s.commit());
    }

    let order: Vec<Cue> = timeline.iter().map(|(_, c)| *c).collect();
    assert_eq!(
        order,
        vec![
            Cue::SurfaceHidden,
            Cue::MessageShown,
            Cue::MessageHidden,
            Cue::ContentShown,
            Cue::ContentReady,
            Cue::RevealCompleted,
        ]
    );
    let at = |cue: Cue| timeline.iter().find(|(_, c)| *c == cue).map(|(t, _)| *t).unwrap();
    assert!((at(Cue::SurfaceHidden) - 0.3).abs() < 0.02);
    assert!((at(Cue::MessageHidden) - 3.5).abs() < 0.02);
    assert!((at(Cue::RevealCompleted) - 3.9).abs() < 0.02);
    assert!((message_peak - 1.0).abs() < 1e-5);

    let scene = s.scene();
    assert!(!scene.container.displayed);
    assert_eq!(scene.container.opacity, 0.0);
    assert!(!scene.affordance.displayed);
    assert!(!scene.affordance.active);
    assert!(!scene.message.displayed);
    assert!(scene.content.displayed);
    assert!(scene.content.interactive);
    assert!((scene.content.opacity - 1.0).abs() < 1e-5);
    assert!(!s.animation_in_progress());
    assert!(s.has_revealed());
}

#[test]
fn reveal_survives_a_single_huge_frame() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    align(&mut s, &mut clock);
    assert!(s.commit());
    let fired = s.tick(clock.now + 30.0, 30.0);
    assert_eq!(fired.last(), Some(&Cue::RevealCompleted));
    assert!(!s.animation_in_progress());
    assert!(s.scene().content.interactive);
    assert!(!s.scene().message.displayed);
}

#[test]
fn commit_before_alignment_does_nothing() {
    let mut s = spread_session();
    assert!(!s.commit());
    assert!(!s.animation_in_progress());
    assert!(!s.has_revealed());
}

#[test]
fn gestures_are_refused_after_the_reveal() {
    let mut s = spread_session();
    let mut clock = Clock::new();
    assert!(s.press(Side::Right));
    align(&mut s, &mut clock);
    assert!(s.commit());
    assert!(!s.is_dragging(Side::Right));
    // a captured pointer that keeps moving cannot revert the reveal
    s.drag(Side::Right, Vec2::new(500.0, 0.0));
    assert!(!s.check_still_aligned());
    assert!(s.is_aligned());
}
