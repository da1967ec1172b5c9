use std::time::Duration;

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Transition configuration
///
/// Defines how long a transition takes and what easing function to use.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub duration: Duration,
    pub easing: EasingFn,
}

impl Transition {
    pub fn new(duration: Duration, easing: EasingFn) -> Self {
        Self { duration, easing }
    }

    /// Smooth scrolling between sections (600ms, ease-in-out)
    pub fn smooth_scroll() -> Self {
        Self {
            duration: Duration::from_millis(600),
            easing: ease_in_out,
        }
    }

    /// Eased progress after `elapsed`, clamped to `[0, 1]`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.easing)(t.clamp(0.0, 1.0))
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::smooth_scroll()
    }
}

/// A scalar animated from `from` to `to`, started at a point on the clock
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub started_at: Duration,
    pub transition: Transition,
}

impl Tween {
    pub fn new(from: f32, to: f32, started_at: Duration, transition: Transition) -> Self {
        Self {
            from,
            to,
            started_at,
            transition,
        }
    }

    /// Value at clock time `now`
    pub fn value_at(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started_at);
        lerp_f32(self.from, self.to, self.transition.progress(elapsed))
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.transition.duration
    }
}
