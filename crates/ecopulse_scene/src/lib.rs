//! EcoPulse Scenes
//!
//! Canvas content for the dashboard sections:
//!
//! - **Particle Field**: the ambient motion effect behind the hero section,
//!   a fixed population of particles bouncing inside the canvas bounds
//! - **Hero Scene**: owns the particle field and repaints it each frame
//! - **Scene Panels**: static placeholder panels for the air/water/light
//!   simulation canvases
//!
//! Scenes paint into any [`ecopulse_core::Surface`]; they never talk to a
//! rendering backend directly.

pub mod hero;
pub mod panels;
pub mod particles;
pub mod rng;

pub use hero::HeroScene;
pub use panels::ScenePanel;
pub use particles::{Particle, ParticleField, PARTICLE_COUNT};
pub use rng::SeededRng;
