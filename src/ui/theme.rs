//! Theme module for the exam display.
//!
//! A theme is a named, fixed palette swapped in as a unit; the preset
//! table lives in `theme_presets.rs`.

use egui::Color32;

/// Identifier of the preset used when a configured id is unknown.
pub const DEFAULT_THEME_ID: &str = "classic-light";

/// A display theme defining all colors used on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTheme {
    /// Stable identifier stored in the configuration.
    pub id: String,

    /// Human-readable name shown in the settings dialog.
    pub name: String,

    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub background: Color32,

    /// Card/panel surface color
    pub surface: Color32,

    /// Alternate surface color (table stripes, inset areas)
    pub surface_alt: Color32,

    /// Primary brand color (ring, accents, table icons)
    pub primary: Color32,

    /// Lighter companion to the primary color
    pub primary_light: Color32,

    /// Secondary accent color (banner border, title gradient stand-in)
    pub accent: Color32,

    /// Warning/danger color (low-time ring, highlight chips)
    pub danger: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color (labels, captions)
    pub text_muted: Color32,

    /// Border and separator color
    pub border: Color32,
}

impl DisplayTheme {
    /// Look up a preset by id, falling back to the default palette for
    /// unknown identifiers. Never fails from the user's perspective.
    pub fn preset(id: &str) -> Self {
        match Self::presets().into_iter().find(|theme| theme.id == id) {
            Some(theme) => theme,
            None => {
                log::warn!("Unknown theme id '{}', falling back to '{}'", id, DEFAULT_THEME_ID);
                Self::classic_light()
            }
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.surface;
        visuals.panel_fill = self.background;

        // Override widget colors to match our theme
        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.inactive.bg_fill = self.surface_alt;
        visuals.widgets.hovered.bg_fill = self.surface_alt;
        visuals.widgets.active.bg_fill = self.primary_light;
        visuals.selection.bg_fill = self.primary;

        visuals.widgets.noninteractive.bg_stroke.color = self.border;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

impl Default for DisplayTheme {
    fn default() -> Self {
        Self::classic_light()
    }
}
