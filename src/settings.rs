use egui::{Color32, Sense, Vec2};
use serde::{Deserialize, Serialize};

use crate::color::{parse_hex, to_hex, DEFAULT_ACCENT, DEFAULT_GLOW};
use crate::ColorError;

/// Size category of the button. Only this value changes font size and padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    #[serde(alias = "sm")]
    Small,
    #[default]
    #[serde(alias = "md")]
    Medium,
    #[serde(alias = "lg")]
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// Label font size in points.
    pub fn font_size(self) -> f32 {
        match self {
            ButtonSize::Small => 12.0,
            ButtonSize::Medium => 14.0,
            ButtonSize::Large => 16.0,
        }
    }

    /// Horizontal and vertical padding around the label.
    pub fn padding(self) -> Vec2 {
        match self {
            ButtonSize::Small => Vec2::new(16.0, 8.0),
            ButtonSize::Medium => Vec2::new(24.0, 12.0),
            ButtonSize::Large => Vec2::new(32.0, 16.0),
        }
    }

    /// Extra spacing between label glyphs, 0.2em.
    pub fn letter_spacing(self) -> f32 {
        self.font_size() * 0.2
    }
}

/// Resolved visual configuration of a single button instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    /// Hover glow and first glitch layer
    pub glow: Color32,

    /// Border gradient and second glitch layer
    pub accent: Color32,

    pub size: ButtonSize,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            glow: DEFAULT_GLOW,
            accent: DEFAULT_ACCENT,
            size: ButtonSize::default(),
        }
    }
}

impl ButtonStyle {
    pub fn with_glow(mut self, glow: Color32) -> Self {
        self.glow = glow;
        self
    }

    pub fn with_accent(mut self, accent: Color32) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }
}

/// Serializable button configuration with colors given as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub label: String,
    pub glow_color: String,
    pub accent_color: String,
    pub size: ButtonSize,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            glow_color: to_hex(DEFAULT_GLOW),
            accent_color: to_hex(DEFAULT_ACCENT),
            size: ButtonSize::default(),
        }
    }
}

impl ButtonConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, glow: impl Into<String>, accent: impl Into<String>) -> Self {
        self.glow_color = glow.into();
        self.accent_color = accent.into();
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Parses both colors. Invalid values surface here and nowhere later.
    ///
    /// # Errors
    /// Returns the [`ColorError`] of the first color that does not parse.
    pub fn resolve(&self) -> Result<ButtonStyle, ColorError> {
        Ok(ButtonStyle {
            glow: parse_hex(&self.glow_color)?,
            accent: parse_hex(&self.accent_color)?,
            size: self.size,
        })
    }
}

/// Interaction attributes forwarded to the underlying control untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAttributes {
    /// Disabled buttons still animate but ignore pointer input
    pub enabled: bool,

    /// Shown on hover
    pub tooltip: Option<String>,

    /// Lower bound for the allocated size
    pub min_size: Vec2,

    pub sense: Sense,
}

impl Default for ButtonAttributes {
    fn default() -> Self {
        Self {
            enabled: true,
            tooltip: None,
            min_size: Vec2::ZERO,
            sense: Sense::click(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mapping_is_fixed() {
        let expected = [
            (ButtonSize::Small, 12.0, Vec2::new(16.0, 8.0)),
            (ButtonSize::Medium, 14.0, Vec2::new(24.0, 12.0)),
            (ButtonSize::Large, 16.0, Vec2::new(32.0, 16.0)),
        ];
        for (size, font, padding) in expected {
            assert_eq!(size.font_size(), font);
            assert_eq!(size.padding(), padding);
        }
    }

    #[test]
    fn sizes_are_distinct() {
        for a in ButtonSize::ALL {
            for b in ButtonSize::ALL {
                if a != b {
                    assert_ne!(a.font_size(), b.font_size());
                    assert_ne!(a.padding(), b.padding());
                }
            }
        }
    }

    #[test]
    fn default_config_resolves_to_default_style() {
        let style = ButtonConfig::default().resolve().unwrap();
        assert_eq!(style, ButtonStyle::default());
        assert_eq!(style.size, ButtonSize::Medium);
    }

    #[test]
    fn invalid_color_is_reported() {
        let cfg = ButtonConfig::new("x").with_colors("#00f0ff", "magenta");
        assert!(matches!(cfg.resolve(), Err(ColorError::MissingHash(_))));
    }

    #[test]
    fn default_attributes_are_enabled_click() {
        let attrs = ButtonAttributes::default();
        assert!(attrs.enabled);
        assert_eq!(attrs.sense, Sense::click());
        assert!(attrs.tooltip.is_none());
    }
}
