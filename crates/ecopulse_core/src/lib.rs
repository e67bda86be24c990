//! EcoPulse Core
//!
//! Foundational primitives shared by every EcoPulse crate:
//!
//! - **Geometry**: `Point`, `Size`, `Rect`, `Vec2` for canvas math
//! - **Color**: RGBA color with the dashboard palette helpers
//! - **Surface**: the 2D drawing abstraction the scenes paint into
//! - **Display Sinks**: text-bearing outputs the counter animator publishes to
//!
//! # Example
//!
//! ```rust
//! use ecopulse_core::{Color, RecordingSurface, Size, Surface};
//!
//! let mut surface = RecordingSurface::new(Size::new(800.0, 600.0));
//! surface.clear();
//! surface.fill_circle(400.0, 300.0, 2.0, Color::WHITE.with_alpha(0.5));
//! assert_eq!(surface.commands().len(), 2);
//! ```

pub mod color;
pub mod display;
pub mod geometry;
pub mod surface;

pub use color::Color;
pub use display::{DisplaySink, TextBuffer};
pub use geometry::{Point, Rect, Size, Vec2};
pub use surface::{RecordingSurface, Surface, SurfaceCommand};
