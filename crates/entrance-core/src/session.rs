//! The alignment interaction state machine.
//!
//! `InteractionSession` owns everything the entrance mutates: the scene, the
//! gesture state of both draggables, the aligned flag and every in-flight
//! animation. Event handlers call into it and the frame loop advances it with
//! `tick`; time is always injected, so the whole interaction runs on the host.
//!
//! Animations live in three places:
//! - one slot per target for short tweens (press, settle, float, revert,
//!   affordance entrance); inserting into a slot replaces what was there.
//! - the snap timeline, which moves both draggables together.
//! - the reveal timeline, started once by `commit`.

use crate::constants::*;
use crate::ease::Ease;
use crate::geometry::{SnapPlan, Viewport};
use crate::params::Params;
use crate::placement::{self, Placement};
use crate::scene::{Property, Scene, Side, Target};
use crate::timeline::{Cues, Timeline, Tween};
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;

/// Points in the animation graph the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// A draggable finished returning to rest scale after a drag or throw.
    Settled(Side),
    SnapCompleted,
    EntranceCompleted,
    SurfaceHidden,
    MessageShown,
    MessageHidden,
    ContentShown,
    ContentReady,
    RevealCompleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotKind {
    Press,
    Settle,
    Float,
    Revert,
    Entrance,
}

#[derive(Clone, Debug)]
struct Slot {
    kind: SlotKind,
    timeline: Timeline<Cue>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub enabled: bool,
    pub dragging: bool,
    /// Remaining inertial velocity in px/s while a throw is running.
    pub throw_velocity: Option<Vec2>,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            enabled: true,
            dragging: false,
            throw_velocity: None,
        }
    }
}

pub struct InteractionSession {
    params: Params,
    viewport: Viewport,
    scene: Scene,
    drags: [DragState; 2],
    aligned: bool,
    surfaces_attached: bool,
    slots: FnvHashMap<Target, Slot>,
    snap: Option<Timeline<Cue>>,
    reveal: Option<Timeline<Cue>>,
    revealed: bool,
    animation_in_progress: bool,
}

impl InteractionSession {
    pub fn new(params: Params, viewport: Viewport, placement: Placement) -> Self {
        let scene = Scene::initial(placement.left, placement.right, params.rest_scale);
        log::info!(
            "[setup] viewport={:.0}x{:.0} left=({:.1},{:.1}) right=({:.1},{:.1}) attempts={} fallback={}",
            viewport.width,
            viewport.height,
            placement.left.x,
            placement.left.y,
            placement.right.x,
            placement.right.y,
            placement.attempts,
            placement.fallback
        );
        Self {
            params,
            viewport,
            scene,
            drags: [DragState::default(); 2],
            aligned: false,
            surfaces_attached: true,
            slots: FnvHashMap::default(),
            snap: None,
            reveal: None,
            revealed: false,
            animation_in_progress: false,
        }
    }

    /// Place both draggables randomly and build the session around them.
    pub fn start<R: Rng + ?Sized>(params: Params, viewport: Viewport, rng: &mut R) -> Self {
        let placement = placement::place(&viewport, &params, rng);
        Self::new(params, viewport, placement)
    }

    // ---------------- Queries ----------------

    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.aligned
    }

    #[inline]
    pub fn drag_state(&self, side: Side) -> DragState {
        self.drags[side.index()]
    }

    #[inline]
    pub fn drag_enabled(&self, side: Side) -> bool {
        self.drags[side.index()].enabled
    }

    #[inline]
    pub fn is_dragging(&self, side: Side) -> bool {
        self.drags[side.index()].dragging
    }

    #[inline]
    pub fn is_throwing(&self, side: Side) -> bool {
        self.drags[side.index()].throw_velocity.is_some()
    }

    #[inline]
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    #[inline]
    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// The reveal has been committed (it never restarts).
    #[inline]
    pub fn has_revealed(&self) -> bool {
        self.revealed
    }

    #[inline]
    pub fn affordance_active(&self) -> bool {
        self.scene.affordance.active
    }

    #[inline]
    pub fn affordance_interactive(&self) -> bool {
        self.scene.affordance.interactive
    }

    /// Set while the reveal commit runs; external page code reads it to avoid
    /// resetting the interaction mid-animation.
    #[inline]
    pub fn animation_in_progress(&self) -> bool {
        self.animation_in_progress
    }

    /// On-screen center of a draggable.
    #[inline]
    pub fn center(&self, side: Side) -> Vec2 {
        self.viewport.to_screen(self.scene.element(side).offset)
    }

    #[inline]
    pub fn separation(&self) -> f32 {
        self.scene.separation()
    }

    // ---------------- Environment ----------------

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether the draggables are still part of the document. While false,
    /// alignment evaluation does nothing.
    pub fn set_surfaces_attached(&mut self, attached: bool) {
        self.surfaces_attached = attached;
    }

    // ---------------- Drag handling ----------------

    /// Begin a drag gesture. Refused while drag is disabled (aligned) or a
    /// gesture is already active on this element.
    pub fn press(&mut self, side: Side) -> bool {
        let drag = &mut self.drags[side.index()];
        if !drag.enabled || drag.dragging || self.revealed {
            return false;
        }
        drag.dragging = true;
        drag.throw_velocity = None;
        if self.snap.is_some() {
            log::info!("[snap] superseded by a new drag on {:?}", side);
            self.cancel_snap();
        }
        self.lift(side);
        log::debug!("[drag] start {:?}", side);
        true
    }

    /// Scale a held element up to drag scale and clear its blur.
    fn lift(&mut self, side: Side) {
        let target = side.target();
        self.overwrite(
            target,
            SlotKind::Press,
            Timeline::new()
                .then(Tween::to(target, Property::Scale, self.params.drag_scale, PRESS_SCALE_SEC))
                .with(Tween::to(target, Property::Blur, 0.0, PRESS_SCALE_SEC)),
        );
    }

    /// Move an element by a pointer delta during an active gesture.
    pub fn drag(&mut self, side: Side, delta: Vec2) {
        if !self.drags[side.index()].dragging {
            return;
        }
        self.scene.element_mut(side).offset += delta;
        if self.aligned {
            self.check_still_aligned();
        } else if self.snap.is_some() && self.separation() > self.params.alignment_threshold {
            log::info!("[snap] pulled apart by {:?}", side);
            self.cancel_snap();
        }
    }

    /// End a gesture. Fast releases continue as an inertial throw; slow ones
    /// settle in place.
    pub fn release(&mut self, side: Side, velocity: Vec2) {
        let drag = &mut self.drags[side.index()];
        if !drag.dragging {
            return;
        }
        drag.dragging = false;
        if velocity.length() >= self.params.throw_release_speed {
            let v = velocity.clamp_length_max(self.params.throw_max_speed);
            drag.throw_velocity = Some(v);
            log::debug!("[drag] throw {:?} v=({:.0},{:.0})", side, v.x, v.y);
        } else {
            self.settle(side);
        }
    }

    fn settle(&mut self, side: Side) {
        let target = side.target();
        self.overwrite(
            target,
            SlotKind::Settle,
            Timeline::new()
                .then(Tween::to(target, Property::Scale, self.params.rest_scale, SETTLE_SCALE_SEC))
                .with(Tween::to(target, Property::Blur, 0.0, SETTLE_SCALE_SEC))
                .cue(Cue::Settled(side)),
        );
    }

    fn step_throws(&mut self, dt: f32) {
        let decay = (-self.params.throw_decay_per_sec * dt).exp();
        for side in Side::BOTH {
            let Some(v) = self.drags[side.index()].throw_velocity else {
                continue;
            };
            self.scene.element_mut(side).offset += v * dt;
            let v = v * decay;
            if v.length() < self.params.throw_stop_speed {
                self.drags[side.index()].throw_velocity = None;
                log::debug!("[drag] throw complete {:?}", side);
                self.settle(side);
            } else {
                self.drags[side.index()].throw_velocity = Some(v);
            }
        }
    }

    // ---------------- Alignment ----------------

    /// Start the snap sequence if the pair is within the threshold. Returns
    /// whether a snap started.
    pub fn evaluate_alignment(&mut self) -> bool {
        if !self.surfaces_attached
            || self.aligned
            || self.snap.is_some()
            || self.revealed
            || Side::BOTH.iter().any(|s| self.is_throwing(*s))
        {
            return false;
        }
        let plan = SnapPlan::between(self.center(Side::Left), self.center(Side::Right));
        if plan.distance >= self.params.alignment_threshold {
            return false;
        }
        self.begin_snap(plan);
        true
    }

    fn begin_snap(&mut self, plan: SnapPlan) {
        let rest = self.params.rest_scale;
        let blur = self.params.blur_px;

        let affordance = &mut self.scene.affordance;
        affordance.offset = plan.midpoint - self.viewport.center();
        affordance.displayed = true;
        affordance.opacity = 0.0;
        affordance.scale = 0.0;
        affordance.interactive = false;
        affordance.active = false;
        self.slots.remove(&Target::Affordance);

        let settle = |target| Tween::to(target, Property::Scale, rest, SNAP_SETTLE_SEC).ease(Ease::Power2InOut);
        let soften = |target| Tween::to(target, Property::Blur, blur, SNAP_SETTLE_SEC);
        let slide = |target, property, delta| {
            Tween::by(target, property, delta, SNAP_TRANSLATE_SEC).ease(Ease::Power3Out)
        };
        let timeline = Timeline::new()
            .then(settle(Target::Left))
            .with(settle(Target::Right))
            .with(soften(Target::Left))
            .with(soften(Target::Right))
            .with(slide(Target::Left, Property::X, plan.left_offset.x))
            .with(slide(Target::Left, Property::Y, plan.left_offset.y))
            .with(slide(Target::Right, Property::X, plan.right_offset.x))
            .with(slide(Target::Right, Property::Y, plan.right_offset.y))
            .cue(Cue::SnapCompleted);

        // the snap owns both draggables until it completes
        self.slots.remove(&Target::Left);
        self.slots.remove(&Target::Right);
        self.snap = Some(timeline);
        log::info!(
            "[snap] distance={:.1} midpoint=({:.1},{:.1})",
            plan.distance,
            plan.midpoint.x,
            plan.midpoint.y
        );
    }

    /// Drop a running snap and undo what it started: the affordance goes back
    /// to hidden, held elements return to drag scale and resting ones to rest
    /// scale, all without blur.
    fn cancel_snap(&mut self) {
        self.snap = None;
        self.reset_affordance();
        for side in Side::BOTH {
            if self.is_dragging(side) {
                self.lift(side);
            } else {
                self.rest_element(side, SlotKind::Revert, REVERT_SEC);
            }
        }
    }

    fn complete_snap(&mut self) {
        // a gesture held through the snap may have moved the pair apart
        if self.separation() > self.params.alignment_threshold {
            log::info!("[snap] ended {:.1}px apart", self.separation());
            self.cancel_snap();
            return;
        }
        self.aligned = true;
        for side in Side::BOTH {
            self.drags[side.index()].enabled = false;
            self.scene.element_mut(side).interactive = false;
        }
        self.scene.affordance.active = true;
        let entrance = |property, value| {
            Tween::to(Target::Affordance, property, value, AFFORDANCE_ENTRANCE_SEC)
                .ease(Ease::BackOut(BACK_OUT_OVERSHOOT))
        };
        self.overwrite(
            Target::Affordance,
            SlotKind::Entrance,
            Timeline::new()
                .then(entrance(Property::Opacity, 1.0))
                .with(entrance(Property::Scale, 1.0))
                .cue(Cue::EntranceCompleted),
        );
        log::info!("[snap] aligned");
    }

    /// Revert alignment if a live drag has pulled the pair apart. Returns
    /// whether a revert happened.
    pub fn check_still_aligned(&mut self) -> bool {
        if !self.aligned || self.revealed {
            return false;
        }
        let distance = self.separation();
        if distance <= self.params.alignment_threshold {
            return false;
        }
        self.aligned = false;
        for side in Side::BOTH {
            self.drags[side.index()].enabled = true;
            self.scene.element_mut(side).interactive = true;
            self.rest_element(side, SlotKind::Revert, REVERT_SEC);
        }
        self.reset_affordance();
        log::info!("[snap] diverged at {:.1}px", distance);
        true
    }

    /// Tween an element back to rest scale with no blur.
    fn rest_element(&mut self, side: Side, kind: SlotKind, duration: f32) {
        let target = side.target();
        self.overwrite(
            target,
            kind,
            Timeline::new()
                .then(Tween::to(target, Property::Scale, self.params.rest_scale, duration))
                .with(Tween::to(target, Property::Blur, 0.0, duration)),
        );
    }

    /// Undo every affordance attribute the snap sets.
    fn reset_affordance(&mut self) {
        self.slots.remove(&Target::Affordance);
        let affordance = &mut self.scene.affordance;
        affordance.active = false;
        affordance.interactive = false;
        affordance.opacity = 0.0;
        affordance.scale = 0.0;
        affordance.displayed = false;
    }

    // ---------------- Idle float ----------------

    /// Whether the idle float may move the draggables this frame.
    pub fn float_allowed(&self) -> bool {
        self.params.float_enabled
            && !self.aligned
            && !self.revealed
            && self.snap.is_none()
            && self.reveal.is_none()
            && Side::BOTH.iter().all(|side| {
                let drag = self.drags[side.index()];
                !drag.dragging
                    && drag.throw_velocity.is_none()
                    && self
                        .slots
                        .get(&side.target())
                        .map_or(true, |slot| slot.kind == SlotKind::Float)
            })
            && self.separation() > self.params.float_min_distance()
    }

    fn idle_float(&mut self, now_sec: f64) {
        if !self.float_allowed() {
            return;
        }
        let wobble = [now_sec.sin() as f32, now_sec.cos() as f32];
        for side in Side::BOTH {
            let target = side.target();
            self.overwrite(
                target,
                SlotKind::Float,
                Timeline::new().then(Tween::by(
                    target,
                    Property::Y,
                    wobble[side.index()],
                    FLOAT_TWEEN_SEC,
                )),
            );
        }
    }

    // ---------------- Reveal ----------------

    /// Commit the enter affordance. Only the first commit on an interactive
    /// affordance does anything.
    pub fn commit(&mut self) -> bool {
        if self.revealed || !self.aligned || !self.scene.affordance.interactive {
            return false;
        }
        self.revealed = true;
        self.animation_in_progress = true;
        self.scene.affordance.interactive = false;
        self.scene.container.interactive = false;
        for drag in self.drags.iter_mut() {
            drag.dragging = false;
            drag.throw_velocity = None;
        }
        self.slots.clear();

        let fade = |target, value, duration| {
            Tween::to(target, Property::Opacity, value, duration).ease(Ease::Power2InOut)
        };
        self.reveal = Some(
            Timeline::new()
                .then(fade(Target::Container, 0.0, REVEAL_FADE_OUT_SEC))
                .with(fade(Target::Affordance, 0.0, REVEAL_FADE_OUT_SEC))
                .cue(Cue::SurfaceHidden)
                .cue(Cue::MessageShown)
                .then(fade(Target::Message, 1.0, REVEAL_MESSAGE_IN_SEC))
                .hold(REVEAL_HOLD_SEC)
                .then(fade(Target::Message, 0.0, REVEAL_MESSAGE_OUT_SEC))
                .cue(Cue::MessageHidden)
                .cue(Cue::ContentShown)
                .then(fade(Target::Content, 1.0, REVEAL_CONTENT_IN_SEC))
                .cue(Cue::ContentReady)
                .cue(Cue::RevealCompleted),
        );
        log::info!("[reveal] committed");
        true
    }

    // ---------------- Frame ----------------

    /// Advance every animation by `dt` seconds. `now_sec` is wall-clock time,
    /// used only for the idle float phase. Returns the cues reached this
    /// frame, in order.
    pub fn tick(&mut self, now_sec: f64, dt: f32) -> Cues<Cue> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut cues = Cues::new();

        self.step_throws(dt);

        for target in Target::ALL {
            let finished = match self.slots.get_mut(&target) {
                Some(slot) => slot.timeline.advance(dt, &mut self.scene, &mut cues),
                None => false,
            };
            if finished {
                self.slots.remove(&target);
            }
        }
        if let Some(timeline) = self.snap.as_mut() {
            if timeline.advance(dt, &mut self.scene, &mut cues) {
                self.snap = None;
            }
        }
        if let Some(timeline) = self.reveal.as_mut() {
            if timeline.advance(dt, &mut self.scene, &mut cues) {
                self.reveal = None;
            }
        }

        for &cue in cues.iter() {
            self.handle_cue(cue);
        }

        self.idle_float(now_sec);
        cues
    }

    fn handle_cue(&mut self, cue: Cue) {
        match cue {
            Cue::Settled(side) => {
                log::debug!("[drag] settled {:?}", side);
                self.evaluate_alignment();
            }
            Cue::SnapCompleted => self.complete_snap(),
            Cue::EntranceCompleted => {
                if self.aligned && !self.revealed {
                    self.scene.affordance.interactive = true;
                }
            }
            Cue::SurfaceHidden => {
                self.scene.container.displayed = false;
                self.scene.affordance.displayed = false;
                self.scene.affordance.active = false;
            }
            Cue::MessageShown => self.scene.message.displayed = true,
            Cue::MessageHidden => self.scene.message.displayed = false,
            Cue::ContentShown => {
                self.scene.content.displayed = true;
                self.scene.content.active = true;
            }
            Cue::ContentReady => self.scene.content.interactive = true,
            Cue::RevealCompleted => {
                self.animation_in_progress = false;
                log::info!("[reveal] complete");
            }
        }
    }

    fn overwrite(&mut self, target: Target, kind: SlotKind, timeline: Timeline<Cue>) {
        self.slots.insert(target, Slot { kind, timeline });
    }
}
