//! Static scene panels
//!
//! Placeholder panels for the air/water/light simulation canvases: a dark
//! backdrop with two centered caption lines in the section's accent color.
//! Each panel carries a loading flag that clears on first paint, standing
//! in for the loading overlay the dashboard hides once a scene is ready.

use ecopulse_core::{Color, Point, Surface};

const CAPTION: &str = "(3D Scene Placeholder)";
const CAPTION_SIZE: f32 = 20.0;
const LINE_SPACING: f32 = 30.0;

/// A static placeholder panel for one simulation canvas
pub struct ScenePanel {
    title: String,
    background: Color,
    accent: Color,
    loading: bool,
}

impl ScenePanel {
    pub fn new(title: impl Into<String>, accent: Color) -> Self {
        Self {
            title: title.into(),
            background: Color::SLATE,
            accent,
            loading: true,
        }
    }

    /// The air pollution panel
    pub fn air() -> Self {
        Self::new("Air Pollution Simulation", Color::EMBER)
    }

    /// The water flow panel
    pub fn water() -> Self {
        Self::new("Water Flow Simulation", Color::SKY)
    }

    /// The night sky panel
    pub fn light() -> Self {
        Self::new("Night Sky Simulation", Color::AMBER)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the loading overlay is still showing
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Paint the panel and clear the loading flag
    pub fn paint(&mut self, surface: &mut dyn Surface) {
        let rect = surface.viewport_size().to_rect();
        let center = rect.center();

        surface.fill_rect(rect, self.background);
        surface.draw_text(&self.title, center, CAPTION_SIZE, self.accent);
        surface.draw_text(
            CAPTION,
            Point::new(center.x, center.y + LINE_SPACING),
            CAPTION_SIZE,
            self.accent,
        );

        if self.loading {
            tracing::debug!(title = %self.title, "scene panel ready");
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecopulse_core::{RecordingSurface, Size, SurfaceCommand};

    #[test]
    fn test_paint_draws_backdrop_and_captions() {
        let mut panel = ScenePanel::air();
        let mut surface = RecordingSurface::new(Size::new(400.0, 300.0));
        panel.paint(&mut surface);

        let commands = surface.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], SurfaceCommand::FillRect { .. }));
        match &commands[1] {
            SurfaceCommand::DrawText { text, center, .. } => {
                assert_eq!(text, "Air Pollution Simulation");
                assert_eq!(*center, Point::new(200.0, 150.0));
            }
            other => panic!("expected caption, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_clears_on_first_paint() {
        let mut panel = ScenePanel::water();
        assert!(panel.is_loading());

        let mut surface = RecordingSurface::new(Size::new(400.0, 300.0));
        panel.paint(&mut surface);
        assert!(!panel.is_loading());
    }

    #[test]
    fn test_panel_accents() {
        assert_eq!(ScenePanel::air().accent, Color::EMBER);
        assert_eq!(ScenePanel::water().accent, Color::SKY);
        assert_eq!(ScenePanel::light().accent, Color::AMBER);
    }
}
