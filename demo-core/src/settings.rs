// Demo page configuration

use egui_cyberpunk::{ButtonConfig, ButtonSize};
use serde::{Deserialize, Serialize};

/// Everything the page shows, serializable so it can be tweaked from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPage {
    pub heading: String,
    pub buttons: Vec<ButtonConfig>,
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self {
            heading: "Cyberpunk Interface".to_string(),
            buttons: vec![
                ButtonConfig::new("Engage")
                    .with_colors("#00F0FF", "#FF00EA")
                    .with_size(ButtonSize::Large),
                ButtonConfig::new("Override")
                    .with_colors("#8AFF00", "#00FFD1")
                    .with_size(ButtonSize::Large),
            ],
        }
    }
}

// Background and panel glow
pub struct SettingsBackdrop {
    /// Radial gradient center color at the top edge
    pub top: egui::Color32,
    /// Fraction of the screen height where the gradient reaches black
    pub falloff: f32,
    pub glow_a: egui::Color32,
    pub glow_b: egui::Color32,
    /// Seconds per flicker cycle
    pub flicker_period: f64,
    pub flicker_base: f32,
}

impl Default for SettingsBackdrop {
    fn default() -> Self {
        Self {
            top: egui::Color32::from_rgb(0x00, 0x11, 0x1a),
            falloff: 0.6,
            glow_a: egui::Color32::from_rgba_unmultiplied(0x00, 0xea, 0xff, 0x22),
            glow_b: egui::Color32::from_rgba_unmultiplied(0xff, 0x00, 0xea, 0x22),
            flicker_period: 3.0,
            flicker_base: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_has_two_large_buttons() {
        let page = SettingsPage::default();
        assert_eq!(page.buttons.len(), 2);
        assert!(page.buttons.iter().all(|b| b.size == ButtonSize::Large));
        let styles: Vec<_> = page
            .buttons
            .iter()
            .map(|b| b.resolve().expect("valid colors"))
            .collect();
        assert_ne!(styles[0].glow, styles[1].glow);
        assert_ne!(styles[0].accent, styles[1].accent);
    }

    #[test]
    fn page_settings_from_json() {
        let json = r##"{ "buttons": [ { "label": "Jack In", "size": "sm" } ] }"##;
        let page: SettingsPage = serde_json::from_str(json).expect("parse page");
        assert_eq!(page.heading, "Cyberpunk Interface");
        assert_eq!(page.buttons.len(), 1);
        assert_eq!(page.buttons[0].size, ButtonSize::Small);
    }
}
