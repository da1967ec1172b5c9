//! Style updates produced for the host and the math behind them

use std::time::Duration;

use crate::element::ElementId;

/// Degrees of sweep per gauge percent
pub const DEGREES_PER_PERCENT: f32 = 3.6;

/// Class added to an element once it is revealed
pub const REVEAL_CLASS: &str = "animate";

/// A change the host applies to the document
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    /// Add the reveal class to the element
    Reveal { target: ElementId },
    /// Delay the element's entrance animation
    AnimationDelay { target: ElementId, delay: Duration },
    /// Set the progress bar width, in percent
    BarWidth { target: ElementId, percent: f32 },
    /// Set the gauge sweep, in degrees
    GaugeSweep { target: ElementId, degrees: f32 },
    /// Replace the counter readout
    CounterText { target: ElementId, value: u32 },
}

impl StyleUpdate {
    pub fn target(&self) -> &ElementId {
        match self {
            StyleUpdate::Reveal { target }
            | StyleUpdate::AnimationDelay { target, .. }
            | StyleUpdate::BarWidth { target, .. }
            | StyleUpdate::GaugeSweep { target, .. }
            | StyleUpdate::CounterText { target, .. } => target,
        }
    }
}

/// Final sweep angle for a gauge at `percentage`
pub fn gauge_degrees(percentage: f32) -> f32 {
    percentage * DEGREES_PER_PERCENT
}

/// Entrance delay of the card at `index`
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

/// Displayed counter value at `step` of `steps`
///
/// Linear in the step and rounded down. The last step is exactly `target`.
pub fn counter_value(target: u32, step: u32, steps: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    (u64::from(target) * u64::from(step) / u64::from(steps)) as u32
}

/// State of a running counter tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRun {
    pub target: u32,
    pub step: u32,
    pub steps: u32,
}

impl CounterRun {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            step: 0,
            steps: steps.max(1),
        }
    }

    /// Advance one step, returning the value to display and whether the tally is done
    pub fn advance(&mut self) -> (u32, bool) {
        self.step += 1;
        let value = counter_value(self.target, self.step, self.steps);
        (value, self.step >= self.steps || value >= self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_degrees_full_range() {
        for p in 0..=100u32 {
            let p = p as f32;
            assert_eq!(gauge_degrees(p), p * 3.6);
        }
        assert_eq!(gauge_degrees(0.0), 0.0);
        assert!((gauge_degrees(100.0) - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_stagger_delay_exact() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_delay(3, step), Duration::from_millis(300));
        assert_eq!(stagger_delay(12, step), Duration::from_millis(1200));
    }

    #[test]
    fn test_counter_values_monotonic_and_exact() {
        for target in [0u32, 1, 7, 59, 60, 61, 150, 1_000_000] {
            let mut run = CounterRun::new(target, 60);
            let mut last = 0;
            let mut done = false;
            let mut ticks = 0;
            while !done {
                let (value, finished) = run.advance();
                assert!(value >= last);
                assert!(value <= target);
                last = value;
                done = finished;
                ticks += 1;
            }
            assert_eq!(last, target);
            assert!(ticks <= 60);
        }
    }

    #[test]
    fn test_counter_zero_target_finishes_first_tick() {
        let mut run = CounterRun::new(0, 60);
        assert_eq!(run.advance(), (0, true));
    }

    #[test]
    fn test_counter_value_rounds_down() {
        // 150 * 1 / 60 = 2.5
        assert_eq!(counter_value(150, 1, 60), 2);
        assert_eq!(counter_value(150, 59, 60), 147);
        assert_eq!(counter_value(150, 60, 60), 150);
    }
}
