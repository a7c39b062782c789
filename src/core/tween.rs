use crate::core::easing::Ease;
use glam::Vec3;
use smallvec::SmallVec;

/// A relative, time-based tween on one object's rotation.
///
/// Instead of writing `start + delta * ease(p)` each step (which would
/// overwrite anything else touching the same fields), the tween hands out the
/// increment between the previously applied eased progress and the current
/// one. Summed over its lifetime that is exactly `delta`, and it composes
/// additively with the per-frame spin.
#[derive(Clone, Debug)]
pub struct RotationTween {
    pub target: usize,
    delta: Vec3,
    start_sec: f64,
    duration_sec: f64,
    ease: Ease,
    applied: f64,
    finished: bool,
}

impl RotationTween {
    pub fn new(target: usize, delta: Vec3, start_sec: f64, duration_sec: f64, ease: Ease) -> Self {
        Self {
            target,
            delta,
            start_sec,
            duration_sec,
            ease,
            applied: 0.0,
            finished: false,
        }
    }

    /// Linear progress in \[0, 1\] at `now_sec`.
    pub fn progress(&self, now_sec: f64) -> f64 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        ((now_sec - self.start_sec) / self.duration_sec).clamp(0.0, 1.0)
    }

    /// Advance to `now_sec` and return the rotation increment since the
    /// previous step.
    pub fn step(&mut self, now_sec: f64) -> Vec3 {
        if self.finished {
            return Vec3::ZERO;
        }
        let p = self.progress(now_sec);
        let eased = if p >= 1.0 { 1.0 } else { self.ease.apply(p) };
        let inc = self.delta * (eased - self.applied) as f32;
        self.applied = eased;
        self.finished = p >= 1.0;
        inc
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Active rotation tweens. Overlapping tweens on the same target are allowed
/// and simply add up.
#[derive(Clone, Debug, Default)]
pub struct Tweens {
    active: SmallVec<[RotationTween; 4]>,
}

impl Tweens {
    pub fn start(&mut self, tween: RotationTween) {
        self.active.push(tween);
    }

    /// Step every tween to `now_sec`, handing each `(target, increment)` to
    /// `apply`. Finished tweens are dropped; returns how many finished during
    /// this call.
    pub fn advance(&mut self, now_sec: f64, mut apply: impl FnMut(usize, Vec3)) -> usize {
        for tween in self.active.iter_mut() {
            apply(tween.target, tween.step(now_sec));
        }
        let before = self.active.len();
        self.active.retain(|t| !t.is_finished());
        before - self.active.len()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn targeting(&self, index: usize) -> usize {
        self.active.iter().filter(|t| t.target == index).count()
    }
}
