use field_physics::{relax_step, repel_offset, DriftTiming, Particle, ParticleStyle, Visual, FIELD_EXTENT};
use folio_gui::{Point, Rect};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::FieldParams;

/// The decorative particle field
///
/// Owns every particle for the lifetime of the page. Particles are created
/// once and only ever moved, never added or removed.
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Container bounds in client coordinates
    container: Rect,
    params: FieldParams,
    /// Last pointer position in percent, `None` after the pointer left
    pointer: Option<Vec2>,
}

impl ParticleField {
    /// Create the field, seeding from `params.seed` when set
    pub fn new(container: Rect, params: FieldParams) -> Self {
        match params.seed {
            Some(seed) => Self::with_rng(container, params, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(container, params, &mut rand::rng()),
        }
    }

    /// Create the field drawing rest positions and drift timings from `rng`
    pub fn with_rng<R: Rng + ?Sized>(container: Rect, params: FieldParams, rng: &mut R) -> Self {
        let particles = (0..params.count)
            .map(|_| {
                let rest = Vec2::new(
                    rng.random::<f32>() * FIELD_EXTENT,
                    rng.random::<f32>() * FIELD_EXTENT,
                );
                let drift = DriftTiming::from_unit(rng.random::<f32>(), rng.random::<f32>());
                Particle::new(rest, drift)
            })
            .collect::<Vec<_>>();

        log::info!("✓ Initialized {} particles", particles.len());

        Self::from_particles(container, params, particles)
    }

    /// Build a field from explicit particles
    pub fn from_particles(container: Rect, params: FieldParams, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            container,
            params,
            pointer: None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Update the container bounds, e.g. after a resize or scroll
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    /// Last pointer position in percent space
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Convert client coordinates into container percent space
    ///
    /// Points outside the container map outside `[0, 100]`; nothing is clamped.
    pub fn to_percent(&self, client: Point) -> Vec2 {
        Vec2::new(
            (client.x - self.container.min[0]) / self.container.width() * FIELD_EXTENT,
            (client.y - self.container.min[1]) / self.container.height() * FIELD_EXTENT,
        )
    }

    /// Apply one pointer move in client coordinates
    ///
    /// Particles near the pointer are placed at rest plus a fresh repel offset;
    /// all others take one relax step toward rest. Returns how many particles
    /// were repelled.
    pub fn pointer_move(&mut self, client: Point) -> usize {
        let pointer = self.to_percent(client);
        self.pointer = Some(pointer);

        let FieldParams {
            repel_radius,
            repel_strength,
            relax_rate,
            ..
        } = self.params;

        let mut repelled = 0;
        for particle in &mut self.particles {
            match repel_offset(particle.position, pointer, repel_radius, repel_strength) {
                Some(offset) => {
                    particle.position = particle.rest + offset;
                    particle.visual = Visual::REPELLED;
                    repelled += 1;
                }
                None => {
                    particle.position = relax_step(particle.position, particle.rest, relax_rate);
                    particle.visual = Visual::REST;
                }
            }
        }

        log::trace!("pointer at {pointer:?}, {repelled} particles repelled");
        repelled
    }

    /// Pointer left the container: restore visuals, keep positions
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        for particle in &mut self.particles {
            particle.visual = Visual::REST;
        }
    }

    /// Style records for every particle, in creation order
    pub fn styles(&self) -> Vec<ParticleStyle> {
        self.particles.iter().map(Particle::style).collect()
    }

    /// Styles as raw bytes, ready for a buffer upload
    pub fn style_bytes(styles: &[ParticleStyle]) -> &[u8] {
        bytemuck::cast_slice(styles)
    }
}
