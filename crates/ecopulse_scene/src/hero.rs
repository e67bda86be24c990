//! Hero scene - the ambient particle animation behind the landing section

use crate::particles::ParticleField;
use ecopulse_core::{Size, Surface};

/// The landing-section scene: one particle field repainted every frame
///
/// The scene itself never schedules anything; the embedder calls
/// [`frame`](HeroScene::frame) once per animation tick and simply stops
/// calling when the section is torn down.
pub struct HeroScene {
    field: ParticleField,
}

impl HeroScene {
    /// Create the scene for a canvas of the given size
    pub fn new(size: Size, seed: u32) -> Self {
        Self {
            field: ParticleField::with_seed(size, seed),
        }
    }

    /// Create from a pre-built particle field
    pub fn from_field(field: ParticleField) -> Self {
        Self { field }
    }

    /// Advance the simulation one tick and repaint
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.field.step();
        self.field.paint(surface);
    }

    /// Track a canvas resize
    pub fn resize(&mut self, size: Size) {
        self.field.resize(size);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::PARTICLE_COUNT;
    use ecopulse_core::{RecordingSurface, SurfaceCommand};

    #[test]
    fn test_frame_repaints_every_particle() {
        let size = Size::new(640.0, 480.0);
        let mut scene = HeroScene::new(size, 7);
        let mut surface = RecordingSurface::new(size);

        for _ in 0..3 {
            scene.frame(&mut surface);
            // The surface holds exactly one frame after each repaint
            assert_eq!(surface.commands().len(), 1 + PARTICLE_COUNT);
            assert_eq!(surface.commands()[0], SurfaceCommand::Clear);
        }
    }

    #[test]
    fn test_resize_rebinds_field_bounds() {
        let mut scene = HeroScene::new(Size::new(640.0, 480.0), 7);
        scene.resize(Size::new(1280.0, 720.0));
        assert_eq!(scene.field().bounds(), Size::new(1280.0, 720.0));
    }
}
