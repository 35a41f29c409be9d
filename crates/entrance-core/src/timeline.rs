//! Phase graphs for multi-stage animations.
//!
//! A `Timeline` is a list of tweens placed at explicit start times plus a list
//! of cues. Advancing it writes interpolated values into the `Scene` and
//! reports every cue whose time has been reached, in order. Tweens that share
//! a start time run concurrently; `then` appends after everything placed so
//! far, `with` starts alongside the previously placed step.

use crate::ease::Ease;
use crate::scene::{Property, Scene, Target};
use smallvec::SmallVec;

/// Slack for accumulated frame time so a cue at 0.3s fires after 3 × 0.1s.
const TIME_EPSILON: f32 = 1e-4;

pub type Cues<C> = SmallVec<[C; 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Absolute end value; the start value is read when the tween begins.
    To(f32),
    /// Relative change applied incrementally, so it composes with other
    /// writers of the same property (a live drag, for example).
    By(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub property: Property,
    pub motion: Motion,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn to(target: Target, property: Property, value: f32, duration: f32) -> Self {
        Self {
            target,
            property,
            motion: Motion::To(value),
            duration,
            ease: Ease::default(),
        }
    }

    pub fn by(target: Target, property: Property, delta: f32, duration: f32) -> Self {
        Self {
            target,
            property,
            motion: Motion::By(delta),
            duration,
            ease: Ease::default(),
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

#[derive(Clone, Debug)]
struct Track {
    tween: Tween,
    start: f32,
    from: Option<f32>,
    applied: f32,
    done: bool,
}

impl Track {
    fn sample(&mut self, elapsed: f32, scene: &mut Scene) {
        if self.done || elapsed + TIME_EPSILON < self.start {
            return;
        }
        let property = self.tween.property;
        let node = scene.node_mut(self.tween.target);
        let local = elapsed - self.start;
        let t = if self.tween.duration <= 0.0 || local + TIME_EPSILON >= self.tween.duration {
            1.0
        } else {
            (local / self.tween.duration).clamp(0.0, 1.0)
        };
        let k = self.tween.ease.apply(t);
        match self.tween.motion {
            Motion::To(value) => {
                let from = *self.from.get_or_insert_with(|| node.get(property));
                node.set(property, from + (value - from) * k);
            }
            Motion::By(delta) => {
                node.add(property, delta * (k - self.applied));
                self.applied = k;
            }
        }
        self.done = t >= 1.0;
    }
}

#[derive(Clone, Debug)]
pub struct Timeline<C> {
    tracks: Vec<Track>,
    cues: Vec<(f32, C)>,
    end: f32,
    last_start: f32,
    elapsed: f32,
    next_cue: usize,
}

impl<C: Copy> Default for Timeline<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy> Timeline<C> {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            cues: Vec::new(),
            end: 0.0,
            last_start: 0.0,
            elapsed: 0.0,
            next_cue: 0,
        }
    }

    /// Place a tween at an absolute start time.
    pub fn at(mut self, start: f32, tween: Tween) -> Self {
        let start = start.max(0.0);
        self.end = self.end.max(start + tween.duration.max(0.0));
        self.last_start = start;
        self.tracks.push(Track {
            tween,
            start,
            from: None,
            applied: 0.0,
            done: false,
        });
        self
    }

    /// Append a tween after everything placed so far.
    pub fn then(self, tween: Tween) -> Self {
        let start = self.end;
        self.at(start, tween)
    }

    /// Start a tween together with the previously placed step.
    pub fn with(self, tween: Tween) -> Self {
        let start = self.last_start;
        self.at(start, tween)
    }

    /// Extend the timeline by an idle gap.
    pub fn hold(mut self, seconds: f32) -> Self {
        self.last_start = self.end;
        self.end += seconds.max(0.0);
        self
    }

    /// Fire `cue` once the timeline reaches its current end.
    pub fn cue(self, cue: C) -> Self {
        let at = self.end;
        self.cue_at(at, cue)
    }

    pub fn cue_at(mut self, at: f32, cue: C) -> Self {
        let at = at.max(0.0);
        self.end = self.end.max(at);
        self.cues.push((at, cue));
        // stable, so cues sharing a time keep insertion order
        self.cues.sort_by(|a, b| a.0.total_cmp(&b.0));
        self
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.end
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed + TIME_EPSILON >= self.end && self.next_cue >= self.cues.len()
    }

    /// Advance by `dt` seconds, writing tweened values into `scene` and
    /// appending reached cues to `cues`. Returns true once finished.
    pub fn advance(&mut self, dt: f32, scene: &mut Scene, cues: &mut Cues<C>) -> bool {
        self.elapsed += dt.max(0.0);
        for track in self.tracks.iter_mut() {
            track.sample(self.elapsed, scene);
        }
        while let Some(&(at, cue)) = self.cues.get(self.next_cue) {
            if self.elapsed + TIME_EPSILON < at {
                break;
            }
            cues.push(cue);
            self.next_cue += 1;
        }
        self.is_finished()
    }
}
