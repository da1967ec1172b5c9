//! Particle record and its visual state

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::constants::*;

/// Timing of the idle drift loop the host plays on each particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftTiming {
    /// Start offset in seconds
    pub delay: f32,
    /// Loop duration in seconds
    pub duration: f32,
}

impl DriftTiming {
    /// Build drift timing from two unit samples in `[0, 1)`
    pub fn from_unit(delay_sample: f32, duration_sample: f32) -> Self {
        Self {
            delay: delay_sample * DRIFT_DELAY_MAX,
            duration: DRIFT_DURATION_MIN + duration_sample * DRIFT_DURATION_SPREAD,
        }
    }
}

/// Scale and opacity of a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub scale: f32,
    pub opacity: f32,
}

impl Visual {
    pub const REST: Visual = Visual {
        scale: REST_SCALE,
        opacity: REST_OPACITY,
    };

    pub const REPELLED: Visual = Visual {
        scale: REPELLED_SCALE,
        opacity: REPELLED_OPACITY,
    };
}

impl Default for Visual {
    fn default() -> Self {
        Self::REST
    }
}

/// A decorative particle living in container percentage space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position in percent of the container
    pub position: Vec2,
    /// Stable, non-repelled position
    pub rest: Vec2,
    pub drift: DriftTiming,
    pub visual: Visual,
}

impl Particle {
    /// Create a particle sitting at its rest position
    pub fn new(rest: Vec2, drift: DriftTiming) -> Self {
        Self {
            position: rest,
            rest,
            drift,
            visual: Visual::REST,
        }
    }

    /// Offset between the current and the rest position
    pub fn displacement(&self) -> Vec2 {
        self.position - self.rest
    }

    /// Packed style record handed to the host
    pub fn style(&self) -> ParticleStyle {
        ParticleStyle {
            position: self.position.to_array(),
            scale: self.visual.scale,
            opacity: self.visual.opacity,
        }
    }
}

/// Host-facing particle style: left/top in percent, scale, opacity
///
/// Laid out as four `f32`s so a slice can be uploaded as raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleStyle {
    pub position: [f32; 2],
    pub scale: f32,
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_particle_starts_at_rest() {
        let p = Particle::new(Vec2::new(12.0, 34.0), DriftTiming::from_unit(0.0, 0.0));
        assert_eq!(p.position, p.rest);
        assert_eq!(p.displacement(), Vec2::ZERO);
        assert_eq!(p.visual, Visual::REST);
    }

    #[test]
    fn test_drift_timing_ranges() {
        let low = DriftTiming::from_unit(0.0, 0.0);
        assert_eq!(low.delay, 0.0);
        assert_eq!(low.duration, 4.0);

        let high = DriftTiming::from_unit(0.999, 0.999);
        assert!(high.delay < 6.0);
        assert!(high.duration < 8.0);
    }

    #[test]
    fn test_style_layout() {
        assert_eq!(std::mem::size_of::<ParticleStyle>(), 16);

        let p = Particle::new(Vec2::new(1.0, 2.0), DriftTiming::from_unit(0.5, 0.5));
        let styles = [p.style()];
        let bytes: &[u8] = bytemuck::cast_slice(&styles);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &0.8f32.to_ne_bytes());
    }
}
