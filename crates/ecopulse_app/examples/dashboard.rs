//! Headless run of the dashboard
//!
//! Drives the app with a fixed frame clock and prints what the platform
//! layer would render. Run with `RUST_LOG=debug` to watch the wiring.

use ecopulse_app::{EcoPulseApp, Section};
use ecopulse_core::{DisplaySink, RecordingSurface, Size, TextBuffer};
use ecopulse_data::{Category, Region};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<TextBuffer>>);

impl DisplaySink for SharedSink {
    fn set_text(&mut self, text: &str) {
        self.0.lock().unwrap().set_text(text);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut app = EcoPulseApp::new();
    let canvas = Size::new(1280.0, 720.0);
    app.init_hero(canvas);

    // The home section's headline stat card
    let deaths = SharedSink::default();
    let watch = app.bind_stat(4_200_000, Box::new(deaths.clone()));
    app.context_mut().report_visibility(watch, 1.0);

    let mut surface = RecordingSurface::new(canvas);
    let mut frames = 0u32;
    while app.frame_with_dt(16.7, Some(&mut surface)) {
        frames += 1;
    }
    println!(
        "counter settled at {} after {frames} frames",
        deaths.0.lock().unwrap().text()
    );

    app.activate(Section::Air);
    app.apply_region(Category::Air, Region::Europe);
    let readout = app.readout(Category::Air).unwrap();
    println!("{} readout:", readout.region.name());
    for (label, value) in &readout.lines {
        println!("  {label}: {value}");
    }
    println!(
        "air scenario at 60: {}",
        app.set_scenario(Category::Air, 60)
    );
}
