//! EcoPulse Application
//!
//! The dashboard's top layer: configuration, the shared application
//! context, and the section wiring that connects the dataset, the
//! animation system, and the scenes. The platform embedder supplies
//! surfaces, display sinks, a frame clock, and visibility reports; this
//! crate supplies everything in between.
//!
//! # Example
//!
//! ```
//! use ecopulse_app::{EcoPulseApp, Section};
//! use ecopulse_core::{RecordingSurface, Size, TextBuffer};
//!
//! let mut app = EcoPulseApp::new();
//! app.init_hero(Size::new(1280.0, 720.0));
//!
//! let watch = app.bind_stat(4_200_000, Box::new(TextBuffer::new()));
//! app.context_mut().report_visibility(watch, 1.0);
//!
//! let mut surface = RecordingSurface::new(Size::new(1280.0, 720.0));
//! while app.frame_with_dt(16.7, Some(&mut surface)) {}
//!
//! app.activate(Section::Air);
//! ```

pub mod app;
pub mod config;
pub mod context;
pub mod error;

pub use app::{EcoPulseApp, Section, SectionReadout};
pub use config::AppConfig;
pub use context::EcoPulseContext;
pub use error::{EcoPulseError, Result};
