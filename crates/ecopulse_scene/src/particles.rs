//! Particle field simulator
//!
//! A fixed population of independent particles drifting inside the canvas
//! bounds, producing the ambient motion effect behind the hero section.
//! Particles reflect elastically off the bounds: the velocity component
//! flips sign, the position is never clamped. A particle that crosses a
//! boundary spends one tick slightly outside and corrects on the next -
//! soft boundaries are intentional, they read better than a hard stop.

use crate::rng::SeededRng;
use ecopulse_core::{Color, Size, Surface, Vec2};

/// Particles per field
pub const PARTICLE_COUNT: usize = 50;

/// A single particle instance
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Current position within canvas bounds
    pub position: Vec2,
    /// Velocity in pixels per tick, components in [-0.25, 0.25]
    pub velocity: Vec2,
    /// Radius in [1, 3]
    pub size: f32,
    /// Alpha in [0.2, 0.7]
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle at a uniformly random position inside `bounds`
    pub fn spawn(bounds: Size, rng: &mut impl FnMut() -> f32) -> Self {
        Self {
            position: Vec2::new(rng() * bounds.width, rng() * bounds.height),
            velocity: Vec2::new((rng() - 0.5) * 0.5, (rng() - 0.5) * 0.5),
            size: rng() * 2.0 + 1.0,
            opacity: rng() * 0.5 + 0.2,
        }
    }

    /// Advance one tick and reflect off the field bounds
    fn update(&mut self, bounds: Size) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// A fixed-size field of drifting particles
///
/// The population is allocated once at construction and never changes;
/// the field mutates every frame until the owning view is torn down.
pub struct ParticleField {
    bounds: Size,
    color: Color,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field of [`PARTICLE_COUNT`] particles inside `bounds`
    pub fn new(bounds: Size, rng: &mut impl FnMut() -> f32) -> Self {
        Self::with_count(bounds, PARTICLE_COUNT, rng)
    }

    /// Create a field with an explicit population size
    pub fn with_count(bounds: Size, count: usize, rng: &mut impl FnMut() -> f32) -> Self {
        let particles = (0..count).map(|_| Particle::spawn(bounds, rng)).collect();
        tracing::debug!(
            count,
            width = bounds.width,
            height = bounds.height,
            "particle field initialized"
        );
        Self {
            bounds,
            color: Color::SKY,
            particles,
        }
    }

    /// Create a field from a seed, using the built-in generator
    pub fn with_seed(bounds: Size, seed: u32) -> Self {
        let mut rng = SeededRng::new(seed);
        Self::new(bounds, &mut || rng.next_f32())
    }

    /// Set the particle color (alpha comes from each particle's opacity)
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one tick
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.update(self.bounds);
        }
    }

    /// Paint the current state: clear, then one filled circle per particle
    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(
                particle.position.x,
                particle.position.y,
                particle.size,
                self.color.with_alpha(particle.opacity),
            );
        }
    }

    /// Rebind the field to new bounds (e.g. after a viewport resize)
    ///
    /// Existing particle positions are left alone; anything now out of
    /// bounds self-corrects through the reflection rule.
    pub fn resize(&mut self, bounds: Size) {
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            "particle field resized"
        );
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecopulse_core::{RecordingSurface, SurfaceCommand};

    fn test_field() -> ParticleField {
        ParticleField::with_seed(Size::new(800.0, 600.0), 42)
    }

    #[test]
    fn test_population_is_exactly_fifty() {
        let mut field = test_field();
        assert_eq!(field.len(), PARTICLE_COUNT);
        for _ in 0..1000 {
            field.step();
        }
        assert_eq!(field.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_spawn_ranges() {
        let field = test_field();
        for particle in field.particles() {
            assert!((0.0..=800.0).contains(&particle.position.x));
            assert!((0.0..=600.0).contains(&particle.position.y));
            assert!((-0.25..=0.25).contains(&particle.velocity.x));
            assert!((-0.25..=0.25).contains(&particle.velocity.y));
            assert!((1.0..=3.0).contains(&particle.size));
            assert!((0.2..=0.7).contains(&particle.opacity));
        }
    }

    #[test]
    fn test_reflection_flips_sign_keeps_magnitude() {
        let mut field = ParticleField::with_count(Size::new(100.0, 100.0), 1, &mut || 0.5);
        field.particles[0].position = Vec2::new(99.9, 50.0);
        field.particles[0].velocity = Vec2::new(0.2, 0.1);

        field.step();
        let p = &field.particles[0];
        assert_eq!(p.velocity.x, -0.2);
        assert_eq!(p.velocity.y, 0.1);
    }

    #[test]
    fn test_boundary_excursion_self_corrects() {
        // A particle at x=0 moving left spends one tick outside the bounds,
        // then the flipped velocity brings it back.
        let mut field = ParticleField::with_count(Size::new(100.0, 100.0), 1, &mut || 0.5);
        field.particles[0].position = Vec2::new(0.0, 50.0);
        field.particles[0].velocity = Vec2::new(-0.3, 0.0);

        field.step();
        assert_eq!(field.particles[0].position.x, -0.3);
        assert_eq!(field.particles[0].velocity.x, 0.3);

        field.step();
        assert_eq!(field.particles[0].position.x, 0.0);
        assert_eq!(field.particles[0].velocity.x, 0.3);
    }

    #[test]
    fn test_paint_clears_then_draws_each_particle() {
        let field = test_field();
        let mut surface = RecordingSurface::new(field.bounds());
        field.paint(&mut surface);

        let commands = surface.commands();
        assert_eq!(commands.len(), 1 + PARTICLE_COUNT);
        assert_eq!(commands[0], SurfaceCommand::Clear);
        assert!(commands[1..]
            .iter()
            .all(|c| matches!(c, SurfaceCommand::FillCircle { .. })));
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut field = test_field();
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();

        field.resize(Size::new(100.0, 100.0));
        assert_eq!(field.bounds(), Size::new(100.0, 100.0));

        let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
    }
}
