//! Dashboard application
//!
//! Top-level wiring for the dashboard: the hero particle scene, the three
//! simulation section panels, the per-section region readouts, and the
//! scenario sliders. Section resources initialize lazily on first visit
//! and are reused afterwards.

use crate::config::AppConfig;
use crate::context::EcoPulseContext;
use crate::error::Result;
use ecopulse_animation::WatchId;
use ecopulse_core::{DisplaySink, Size, Surface};
use ecopulse_data::{Category, Region};
use ecopulse_scene::{HeroScene, ParticleField, ScenePanel, SeededRng};
use rustc_hash::FxHashMap;

/// Region shown when a section is first opened
const DEFAULT_REGION: Region = Region::Asia;

/// A navigable dashboard section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Air,
    Water,
    Light,
}

impl Section {
    /// The pollution category behind this section, if any
    pub fn category(&self) -> Option<Category> {
        match self {
            Section::Home => None,
            Section::Air => Some(Category::Air),
            Section::Water => Some(Category::Water),
            Section::Light => Some(Category::Light),
        }
    }
}

/// The formatted stat lines a section shows for its selected region
#[derive(Clone, Debug, PartialEq)]
pub struct SectionReadout {
    pub region: Region,
    /// Label and formatted value, in display order
    pub lines: Vec<(&'static str, String)>,
}

/// The dashboard application
///
/// Holds the context plus everything keyed by section: scene panels,
/// readouts, and scenario slider values. The embedder drives it with
/// [`activate`](EcoPulseApp::activate), [`frame`](EcoPulseApp::frame), and
/// the input handlers.
pub struct EcoPulseApp {
    context: EcoPulseContext,
    hero: Option<HeroScene>,
    panels: FxHashMap<Category, ScenePanel>,
    readouts: FxHashMap<Category, SectionReadout>,
    scenarios: FxHashMap<Category, u32>,
    active: Section,
}

impl EcoPulseApp {
    pub fn new() -> Self {
        Self::with_context(EcoPulseContext::new())
    }

    /// Create the app with a custom configuration
    pub fn with_config(config: AppConfig) -> Result<Self> {
        Ok(Self::with_context(EcoPulseContext::with_config(config)?))
    }

    pub fn with_context(context: EcoPulseContext) -> Self {
        Self {
            context,
            hero: None,
            panels: FxHashMap::default(),
            readouts: FxHashMap::default(),
            scenarios: FxHashMap::default(),
            active: Section::Home,
        }
    }

    pub fn context(&self) -> &EcoPulseContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EcoPulseContext {
        &mut self.context
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    /// Initialize the hero particle scene for a canvas of the given size
    ///
    /// Skipped silently when the canvas has no area; the dashboard stays
    /// fully usable without the ambient animation.
    pub fn init_hero(&mut self, size: Size) {
        if size.width <= 0.0 || size.height <= 0.0 {
            tracing::debug!(
                width = size.width,
                height = size.height,
                "hero scene skipped, canvas has no area"
            );
            return;
        }
        let config = self.context.config();
        let mut rng = SeededRng::new(config.particle_seed);
        let field = ParticleField::with_count(size, config.particle_count, &mut || rng.next_f32());
        self.hero = Some(HeroScene::from_field(field));
    }

    pub fn has_hero(&self) -> bool {
        self.hero.is_some()
    }

    /// Track a hero canvas resize
    pub fn resize_hero(&mut self, size: Size) {
        if let Some(hero) = &mut self.hero {
            hero.resize(size);
        }
    }

    /// Bind a home-section stat card through the context
    pub fn bind_stat(&mut self, target: u64, sink: Box<dyn DisplaySink + Send>) -> WatchId {
        self.context.bind_stat(target, sink)
    }

    /// Switch to a section, initializing its resources on first visit
    pub fn activate(&mut self, section: Section) {
        self.active = section;
        let Some(category) = section.category() else {
            return;
        };
        if self.panels.contains_key(&category) {
            return;
        }
        let panel = match category {
            Category::Air => ScenePanel::air(),
            Category::Water => ScenePanel::water(),
            Category::Light => ScenePanel::light(),
        };
        tracing::debug!(?category, "section initialized");
        self.panels.insert(category, panel);
        self.apply_region(category, DEFAULT_REGION);
    }

    /// Rebuild a section's readout for a newly selected region
    pub fn apply_region(&mut self, category: Category, region: Region) {
        let dataset = self.context.dataset();
        let lines = match category {
            Category::Air => {
                let record = dataset.air(region);
                vec![
                    ("AQI", record.aqi.to_string()),
                    ("PM2.5", record.pm25.to_string()),
                ]
            }
            Category::Water => {
                let record = dataset.water(region);
                vec![
                    ("Chemical Pollution", record.chemical_pollution.to_string()),
                    ("Microplastics", record.microplastics.to_string()),
                ]
            }
            Category::Light => {
                let record = dataset.light(region);
                vec![
                    ("Sky Brightness", record.sky_brightness.to_string()),
                    ("Visible Stars", record.visible_stars.to_string()),
                ]
            }
        };
        tracing::debug!(?category, region = region.name(), "readout updated");
        self.readouts.insert(category, SectionReadout { region, lines });
    }

    pub fn readout(&self, category: Category) -> Option<&SectionReadout> {
        self.readouts.get(&category)
    }

    /// Apply a scenario slider value and return its severity label
    pub fn set_scenario(&mut self, category: Category, value: u32) -> &'static str {
        self.scenarios.insert(category, value);
        category.severity_label(value)
    }

    /// The current scenario slider value for a section (0 before any input)
    pub fn scenario(&self, category: Category) -> u32 {
        self.scenarios.get(&category).copied().unwrap_or(0)
    }

    pub fn panel(&self, category: Category) -> Option<&ScenePanel> {
        self.panels.get(&category)
    }

    /// Paint a section's scene panel, if that section has been visited
    pub fn paint_panel(&mut self, category: Category, surface: &mut dyn Surface) -> bool {
        match self.panels.get_mut(&category) {
            Some(panel) => {
                panel.paint(surface);
                true
            }
            None => false,
        }
    }

    /// Advance one frame: tick animations, repaint the hero if present
    ///
    /// Returns true if any animation still wants another frame. The hero
    /// scene repaints whenever a surface is supplied; it is steady-state
    /// motion, not something that ever "finishes".
    pub fn frame(&mut self, hero_surface: Option<&mut dyn Surface>) -> bool {
        let active = self.context.frame();
        if let (Some(hero), Some(surface)) = (&mut self.hero, hero_surface) {
            hero.frame(surface);
        }
        active
    }

    /// Advance one frame with an explicit delta (milliseconds)
    pub fn frame_with_dt(&mut self, dt_ms: f32, hero_surface: Option<&mut dyn Surface>) -> bool {
        let active = self.context.frame_with_dt(dt_ms);
        if let (Some(hero), Some(surface)) = (&mut self.hero, hero_surface) {
            hero.frame(surface);
        }
        active
    }
}

impl Default for EcoPulseApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecopulse_core::RecordingSurface;

    #[test]
    fn test_first_visit_initializes_section_with_default_region() {
        let mut app = EcoPulseApp::new();
        assert!(app.panel(Category::Air).is_none());

        app.activate(Section::Air);
        assert_eq!(app.active_section(), Section::Air);
        assert!(app.panel(Category::Air).is_some());

        let readout = app.readout(Category::Air).unwrap();
        assert_eq!(readout.region, Region::Asia);
        assert_eq!(readout.lines[0], ("AQI", "156".to_string()));
        assert_eq!(readout.lines[1], ("PM2.5", "45.2".to_string()));
    }

    #[test]
    fn test_revisit_keeps_selected_region() {
        let mut app = EcoPulseApp::new();
        app.activate(Section::Water);
        app.apply_region(Category::Water, Region::Europe);

        // Leaving and coming back does not reset to the default region
        app.activate(Section::Home);
        app.activate(Section::Water);
        assert_eq!(app.readout(Category::Water).unwrap().region, Region::Europe);
    }

    #[test]
    fn test_apply_region_per_category() {
        let mut app = EcoPulseApp::new();
        app.apply_region(Category::Light, Region::Oceania);

        let readout = app.readout(Category::Light).unwrap();
        assert_eq!(readout.lines[0], ("Sky Brightness", "21.1".to_string()));
        assert_eq!(readout.lines[1], ("Visible Stars", "67.4".to_string()));
    }

    #[test]
    fn test_scenario_labels() {
        let mut app = EcoPulseApp::new();
        assert_eq!(app.set_scenario(Category::Air, 80), "Hazardous");
        assert_eq!(app.set_scenario(Category::Water, 30), "Moderate");
        assert_eq!(app.scenario(Category::Air), 80);
        assert_eq!(app.scenario(Category::Light), 0);
    }

    #[test]
    fn test_hero_skipped_for_empty_canvas() {
        let mut app = EcoPulseApp::new();
        app.init_hero(Size::ZERO);
        assert!(!app.has_hero());

        app.init_hero(Size::new(800.0, 600.0));
        assert!(app.has_hero());
    }

    #[test]
    fn test_frame_repaints_hero() {
        let mut app = EcoPulseApp::new();
        let size = Size::new(800.0, 600.0);
        app.init_hero(size);

        let mut surface = RecordingSurface::new(size);
        app.frame_with_dt(16.7, Some(&mut surface));
        let expected = 1 + app.context().config().particle_count;
        assert_eq!(surface.commands().len(), expected);
    }

    #[test]
    fn test_paint_panel_requires_a_visit() {
        let mut app = EcoPulseApp::new();
        let mut surface = RecordingSurface::new(Size::new(400.0, 300.0));
        assert!(!app.paint_panel(Category::Air, &mut surface));

        app.activate(Section::Air);
        assert!(app.paint_panel(Category::Air, &mut surface));
    }

    #[test]
    fn test_configured_particle_count_flows_to_hero() {
        let config = AppConfig {
            particle_count: 10,
            ..Default::default()
        };
        let mut app = EcoPulseApp::with_config(config).unwrap();
        let size = Size::new(800.0, 600.0);
        app.init_hero(size);

        let mut surface = RecordingSurface::new(size);
        app.frame_with_dt(16.7, Some(&mut surface));
        assert_eq!(surface.commands().len(), 11);
    }
}
