use egui::{Color32, Response, Sense, Ui, Vec2, Widget, WidgetInfo, WidgetType};

use crate::animation::{with_animator, PointerState};
use crate::draw::{label_job, plan, DrawContext, Drawer};
use crate::settings::{ButtonAttributes, ButtonConfig, ButtonSize, ButtonStyle};
use crate::ColorError;

/// Button with a rotating conic border, spring hover/press feedback and two
/// jittering glitch copies of its label.
///
/// Animations start the first time an instance is drawn and stop once it is
/// no longer drawn. Call [`crate::animation::begin_frame`] once per frame so
/// buttons that disappear are noticed even when no other button is drawn.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// use egui_cyberpunk::{ButtonSize, CyberpunkButton};
///
/// let response = ui.add(CyberpunkButton::new("Engage").size(ButtonSize::Large));
/// if response.clicked() {
///     // ...
/// }
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct CyberpunkButton {
    label: String,
    style: ButtonStyle,
    attributes: ButtonAttributes,
}

impl CyberpunkButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::default(),
            attributes: ButtonAttributes::default(),
        }
    }

    /// Builds a button from hex colors.
    ///
    /// # Errors
    /// Returns the [`ColorError`] of the first color that does not parse.
    pub fn from_config(config: &ButtonConfig) -> Result<Self, ColorError> {
        Ok(Self::new(config.label.clone()).style(config.resolve()?))
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn glow_color(mut self, glow: Color32) -> Self {
        self.style.glow = glow;
        self
    }

    pub fn accent_color(mut self, accent: Color32) -> Self {
        self.style.accent = accent;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.style.size = size;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.attributes.enabled = enabled;
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.attributes.tooltip = Some(text.into());
        self
    }

    pub fn min_size(mut self, min_size: Vec2) -> Self {
        self.attributes.min_size = min_size;
        self
    }

    pub fn sense(mut self, sense: Sense) -> Self {
        self.attributes.sense = sense;
        self
    }

    /// Replaces all pass-through attributes at once.
    pub fn attributes(mut self, attributes: ButtonAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn get_style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn get_attributes(&self) -> &ButtonAttributes {
        &self.attributes
    }

    fn desired_size(&self, ui: &Ui) -> Vec2 {
        let galley = ui
            .painter()
            .layout_job(label_job(&self.label, self.style.size, 1.0));
        (galley.size() + 2.0 * self.style.size.padding()).max(self.attributes.min_size)
    }

    fn show(self, ui: &mut Ui) -> Response {
        if !self.attributes.enabled {
            ui.disable();
        }
        let enabled = ui.is_enabled();

        let desired = self.desired_size(ui);
        let (rect, response) = ui.allocate_exact_size(desired, self.attributes.sense);

        let pointer = if enabled && response.is_pointer_button_down_on() {
            PointerState::PRESSED
        } else if enabled && response.hovered() {
            PointerState::HOVERED
        } else {
            PointerState::IDLE
        };

        let ctx = ui.ctx().clone();
        let pass = ctx.cumulative_pass_nr();
        let now = ui.input(|i| i.time);
        let frame = with_animator(&ctx, |animator| {
            animator.begin_pass(pass, now);
            let anims = animator.mount(response.id, response.id.value());
            anims.set_pointer(pointer, now);
            anims.sample(now)
        });

        if ui.is_rect_visible(rect) {
            let visuals = plan(&self.style, &frame, rect);
            let painter = ui.painter();
            let draw_ctx = DrawContext {
                painter,
                visuals: &visuals,
                label: &self.label,
                size: self.style.size,
                enabled,
            };
            Drawer::new(&draw_ctx).draw();
        }

        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, &self.label));
        ctx.request_repaint();

        match self.attributes.tooltip {
            Some(text) if enabled => response.on_hover_text(text),
            Some(text) => response.on_disabled_hover_text(text),
            None => response,
        }
    }
}

impl Widget for CyberpunkButton {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.scope(|ui| self.show(ui)).inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_attributes_untouched() {
        let b = CyberpunkButton::new("Override")
            .enabled(false)
            .tooltip("locked")
            .min_size(Vec2::new(200.0, 40.0))
            .sense(Sense::hover());
        let attrs = b.get_attributes();
        assert!(!attrs.enabled);
        assert_eq!(attrs.tooltip.as_deref(), Some("locked"));
        assert_eq!(attrs.min_size, Vec2::new(200.0, 40.0));
        assert_eq!(attrs.sense, Sense::hover());
    }

    #[test]
    fn from_config_rejects_bad_colors() {
        let cfg = ButtonConfig::new("Engage").with_colors("00F0FF", "#FF00EA");
        assert_eq!(
            CyberpunkButton::from_config(&cfg).unwrap_err(),
            ColorError::MissingHash("00F0FF".to_owned())
        );
    }

    #[test]
    fn from_config_resolves_colors() {
        let cfg = ButtonConfig::new("Engage")
            .with_colors("#00F0FF", "#FF00EA")
            .with_size(ButtonSize::Large);
        let b = CyberpunkButton::from_config(&cfg).unwrap();
        assert_eq!(b.label(), "Engage");
        assert_eq!(b.get_style().glow, Color32::from_rgb(0x00, 0xf0, 0xff));
        assert_eq!(b.get_style().size, ButtonSize::Large);
    }
}
