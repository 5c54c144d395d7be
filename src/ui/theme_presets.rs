//! Built-in theme preset constructors for DisplayTheme.

use egui::Color32;

use super::theme::DisplayTheme;

impl DisplayTheme {
    /// The fixed preset table shown in the settings dialog, default first.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::classic_light(),
            Self::midnight(),
            Self::emerald(),
            Self::sepia(),
            Self::high_contrast(),
        ]
    }

    /// Create the default light theme (indigo primary, rose danger)
    pub fn classic_light() -> Self {
        Self {
            id: "classic-light".to_string(),
            name: "Classic Light".to_string(),
            is_dark: false,
            background: Color32::from_rgb(241, 245, 249),
            surface: Color32::from_rgb(255, 255, 255),
            surface_alt: Color32::from_rgb(248, 250, 252),
            primary: Color32::from_rgb(79, 70, 229),
            primary_light: Color32::from_rgb(129, 140, 248),
            accent: Color32::from_rgb(14, 165, 233),
            danger: Color32::from_rgb(225, 29, 72),
            text_primary: Color32::from_rgb(15, 23, 42),
            text_muted: Color32::from_rgb(100, 116, 139),
            border: Color32::from_rgb(226, 232, 240),
        }
    }

    /// Dark slate theme for dim exam halls
    pub fn midnight() -> Self {
        Self {
            id: "midnight".to_string(),
            name: "Midnight".to_string(),
            is_dark: true,
            background: Color32::from_rgb(15, 23, 42),
            surface: Color32::from_rgb(30, 41, 59),
            surface_alt: Color32::from_rgb(51, 65, 85),
            primary: Color32::from_rgb(129, 140, 248),
            primary_light: Color32::from_rgb(165, 180, 252),
            accent: Color32::from_rgb(56, 189, 248),
            danger: Color32::from_rgb(251, 113, 133),
            text_primary: Color32::from_rgb(241, 245, 249),
            text_muted: Color32::from_rgb(148, 163, 184),
            border: Color32::from_rgb(51, 65, 85),
        }
    }

    /// Light theme with a green primary
    pub fn emerald() -> Self {
        Self {
            id: "emerald".to_string(),
            name: "Emerald".to_string(),
            is_dark: false,
            background: Color32::from_rgb(240, 253, 244),
            surface: Color32::from_rgb(255, 255, 255),
            surface_alt: Color32::from_rgb(236, 253, 245),
            primary: Color32::from_rgb(5, 150, 105),
            primary_light: Color32::from_rgb(52, 211, 153),
            accent: Color32::from_rgb(13, 148, 136),
            danger: Color32::from_rgb(220, 38, 38),
            text_primary: Color32::from_rgb(6, 78, 59),
            text_muted: Color32::from_rgb(75, 110, 95),
            border: Color32::from_rgb(209, 250, 229),
        }
    }

    /// Sepia theme (warm, easy on eyes)
    pub fn sepia() -> Self {
        Self {
            id: "sepia".to_string(),
            name: "Sepia".to_string(),
            is_dark: false,
            background: Color32::from_rgb(251, 241, 219),
            surface: Color32::from_rgb(255, 250, 235),
            surface_alt: Color32::from_rgb(245, 235, 213),
            primary: Color32::from_rgb(139, 90, 43),
            primary_light: Color32::from_rgb(180, 130, 80),
            accent: Color32::from_rgb(70, 100, 130),
            danger: Color32::from_rgb(160, 60, 50),
            text_primary: Color32::from_rgb(90, 70, 50),
            text_muted: Color32::from_rgb(139, 110, 80),
            border: Color32::from_rgb(200, 180, 150),
        }
    }

    /// High Contrast theme (accessibility)
    pub fn high_contrast() -> Self {
        Self {
            id: "high-contrast".to_string(),
            name: "High Contrast".to_string(),
            is_dark: true,
            background: Color32::from_rgb(0, 0, 0),
            surface: Color32::from_rgb(0, 0, 0),
            surface_alt: Color32::from_rgb(30, 30, 30),
            primary: Color32::from_rgb(0, 200, 255),
            primary_light: Color32::from_rgb(120, 220, 255),
            accent: Color32::from_rgb(0, 255, 0),
            danger: Color32::from_rgb(255, 80, 80),
            text_primary: Color32::from_rgb(255, 255, 255),
            text_muted: Color32::from_rgb(255, 255, 0),
            border: Color32::from_rgb(255, 255, 255),
        }
    }
}
