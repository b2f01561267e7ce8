//! Appearance transitions and the layout gate.
//!
//! Playback belongs to the host. The controller only tells the host when a
//! transition should start and waits for it to report completion.

use tagcloud_graphics::Size;

use crate::frame::TagCloudFrame;

/// Easing curves for transition playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    /// Material "standard" curve.
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;

    // Bisection on x(t); the control points keep x monotonic on [0, 1].
    let mut lo = 0.0_f32;
    let mut hi = 1.0_f32;
    let mut t = fraction;
    for _ in 0..24 {
        let delta = sample(ax, bx, cx, t) - fraction;
        if delta.abs() < 1e-6 {
            break;
        }
        if delta > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample(ay, by, cy, t)
}

/// Timing of the fade-in played for newly added tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl TransitionSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Opacity `elapsed_millis` after the transition was started.
    pub fn alpha_at(&self, elapsed_millis: u64) -> f32 {
        let running = elapsed_millis.saturating_sub(self.delay_millis);
        if self.duration_millis == 0 {
            return if elapsed_millis >= self.delay_millis {
                1.0
            } else {
                0.0
            };
        }
        let fraction = (running as f32 / self.duration_millis as f32).min(1.0);
        self.easing.transform(fraction)
    }

    pub fn is_finished_at(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.delay_millis + self.duration_millis
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Host-side transition playback.
///
/// Completion is reported back through
/// [`TagCloudEvent`](crate::TagCloudEvent).
pub trait AppearanceTransitions {
    /// Starts the fade-in for a newly added tag. Returns false when nothing was
    /// started, in which case the tag is shown immediately.
    fn play_appearance(&mut self, identifier: &str, spec: &TransitionSpec) -> bool;

    /// Offered after a layout pass moved tags that were already on screen.
    /// Returning true suspends further layout until the host reports
    /// `RelayoutFinished`.
    fn play_relayout(&mut self, _previous: &TagCloudFrame, _next: &TagCloudFrame) -> bool {
        false
    }
}

/// Plays nothing; every tag appears at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTransitions;

impl AppearanceTransitions for NoTransitions {
    fn play_appearance(&mut self, _identifier: &str, _spec: &TransitionSpec) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
    #[default]
    Idle,
    InFlight,
}

/// Global suspend flag for layout passes.
///
/// While a relayout transition is in flight every layout request is deferred.
/// Only the most recent request is remembered; it runs once when the gate
/// reopens.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionGate {
    phase: GatePhase,
    pending: Option<Size>,
}

impl TransitionGate {
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_suspended(&self) -> bool {
        self.phase == GatePhase::InFlight
    }

    pub fn suspend(&mut self) {
        self.phase = GatePhase::InFlight;
    }

    /// Records a layout request made while suspended.
    pub fn defer(&mut self, container: Size) {
        self.pending = Some(container);
    }

    pub fn pending(&self) -> Option<Size> {
        self.pending
    }

    /// Reopens the gate and hands back the deferred request, if any.
    pub fn resume(&mut self) -> Option<Size> {
        self.phase = GatePhase::Idle;
        self.pending.take()
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
