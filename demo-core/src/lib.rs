use eframe::{App, CreationContext};
use egui::text::{LayoutJob, TextFormat};
use egui::{
    self, Color32, Context, FontId, Pos2, Rect, RichText, Sense, Ui, UiBuilder, Vec2, WidgetInfo,
    WidgetType,
};
use egui_cyberpunk::animation::with_animator;
use egui_cyberpunk::{begin_frame, ButtonStyle, CyberpunkButton};

mod backdrop;
mod keybindings;
mod metrics;
mod overlays;
mod ui_consts;

pub mod settings;

use crate::keybindings::{dispatch as dispatch_keybindings, Command, HELP};
use crate::metrics::MetricsRecorder;
use crate::settings::{SettingsBackdrop, SettingsPage};
use ui_consts::{
    GRID_GAP, HEADING_MARGIN_BOTTOM, HEADING_SIZE, HEADING_SIZE_WIDE, HELP_TITLE_SIZE,
    PANEL_MAX_WIDTH, PANEL_PADDING, PANEL_PADDING_WIDE, PANEL_RADIUS, WIDE_BREAKPOINT,
};

/// A button as the page draws it, colors already resolved.
#[derive(Debug, Clone)]
struct PageButton {
    label: String,
    style: ButtonStyle,
}

pub struct CyberpunkApp {
    heading: String,
    buttons: Vec<PageButton>,
    backdrop: SettingsBackdrop,

    metrics: MetricsRecorder,
    pub show_debug_overlay: bool,
    pub show_keybindings_overlay: bool,

    /// Panel height measured last frame, used to center it vertically
    content_height: f32,
    last_clicked: Option<String>,
}

impl Default for CyberpunkApp {
    fn default() -> Self {
        Self::with_settings(&SettingsPage::default())
    }
}

impl CyberpunkApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        log::info!("starting cyberpunk demo, build {}", overlays::debug_overlay::build_rev());
        Self::default()
    }

    pub fn with_settings(page: &SettingsPage) -> Self {
        let buttons = page
            .buttons
            .iter()
            .map(|cfg| {
                let style = cfg.resolve().unwrap_or_else(|err| {
                    log::warn!("button {:?}: {err}, using default colors", cfg.label);
                    ButtonStyle::default().with_size(cfg.size)
                });
                PageButton {
                    label: cfg.label.clone(),
                    style,
                }
            })
            .collect();

        Self {
            heading: page.heading.clone(),
            buttons,
            backdrop: SettingsBackdrop::default(),
            metrics: MetricsRecorder::new(),
            show_debug_overlay: false,
            show_keybindings_overlay: false,
            content_height: 0.0,
            last_clicked: None,
        }
    }

    /// Label of the most recently clicked button.
    pub fn last_clicked(&self) -> Option<&str> {
        self.last_clicked.as_deref()
    }

    /// Draws one frame of the page.
    pub fn ui(&mut self, ctx: &Context) {
        begin_frame(ctx);
        self.metrics.update_fps();
        self.process_keybindings(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let screen = ui.max_rect();
                let time = ui.input(|i| i.time);
                ui.painter().extend(backdrop::background(screen, &self.backdrop));

                let wide = screen.width() >= WIDE_BREAKPOINT;
                let padding = if wide { PANEL_PADDING_WIDE } else { PANEL_PADDING };
                let panel = self.panel_rect(screen);
                let opacity = backdrop::flicker(time, &self.backdrop);
                ui.painter()
                    .add(backdrop::panel_glow(panel, PANEL_RADIUS, opacity, &self.backdrop));

                let used = ui
                    .scope_builder(UiBuilder::new().max_rect(panel.shrink(padding)), |ui| {
                        self.content(ui, wide);
                    })
                    .response
                    .rect;
                self.content_height = used.height() + 2.0 * padding;

                if self.show_debug_overlay {
                    let (loops, mounted) = with_animator(ctx, |a| (a.active_loops(), a.mounted()));
                    overlays::debug_overlay::render(ui, &self.metrics, loops, mounted);
                }
            });

        self.keybindings_modal(ctx);
    }

    fn panel_rect(&self, screen: Rect) -> Rect {
        let width = screen.width().min(PANEL_MAX_WIDTH);
        let height = if self.content_height > 0.0 {
            self.content_height
        } else {
            screen.height()
        };
        let top = (screen.center().y - height / 2.0).max(screen.top());
        Rect::from_min_size(Pos2::new(screen.center().x - width / 2.0, top), Vec2::new(width, height))
    }

    fn content(&mut self, ui: &mut Ui, wide: bool) {
        ui.vertical_centered(|ui| self.heading(ui, wide));
        ui.add_space(HEADING_MARGIN_BOTTOM);

        ui.spacing_mut().item_spacing = Vec2::splat(GRID_GAP);
        let mut clicked = Vec::new();
        if wide {
            for row in self.buttons.chunks(2) {
                ui.columns(2, |cols| {
                    for (col, button) in cols.iter_mut().zip(row) {
                        if show_button(col, button) {
                            clicked.push(button.label.clone());
                        }
                    }
                });
            }
        } else {
            for button in &self.buttons {
                if show_button(ui, button) {
                    clicked.push(button.label.clone());
                }
            }
        }

        for label in clicked {
            log::info!("{label} clicked");
            self.last_clicked = Some(label);
        }
    }

    fn heading(&self, ui: &mut Ui, wide: bool) {
        let size = if wide { HEADING_SIZE_WIDE } else { HEADING_SIZE };
        let mut job = LayoutJob::default();
        job.wrap.max_width = ui.available_width();
        job.append(
            &self.heading.to_uppercase(),
            0.0,
            TextFormat {
                font_id: FontId::proportional(size),
                extra_letter_spacing: size * 0.25,
                color: Color32::WHITE,
                ..Default::default()
            },
        );
        let galley = ui.painter().layout_job(job);
        let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::hover());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Label, true, &self.heading));

        if ui.is_rect_visible(rect) {
            ui.painter().extend(backdrop::heading_glow(rect.min, &galley));
            ui.painter().galley(rect.min, galley, Color32::WHITE);
        }
    }

    fn process_keybindings(&mut self, ctx: &Context) {
        let cmds = if ctx.wants_keyboard_input() {
            Vec::new()
        } else {
            dispatch_keybindings(ctx)
        };
        for c in cmds {
            match c {
                Command::ToggleDebug => {
                    self.show_debug_overlay = !self.show_debug_overlay;
                    log::debug!("debug overlay: {}", self.show_debug_overlay);
                }
                Command::ToggleKeybindings => {
                    self.show_keybindings_overlay = !self.show_keybindings_overlay;
                }
                Command::CloseKeybindings => self.show_keybindings_overlay = false,
            }
        }
    }

    fn keybindings_modal(&mut self, ctx: &Context) {
        if !self.show_keybindings_overlay {
            return;
        }
        let modal = egui::Modal::new(egui::Id::new("keybindings_modal")).show(ctx, |ui| {
            let accent = ui.visuals().hyperlink_color;
            ui.label(RichText::new("Keybindings").strong().size(HELP_TITLE_SIZE).color(accent));
            ui.separator();
            egui::Grid::new("kb_grid")
                .num_columns(2)
                .spacing(egui::vec2(8.0, 4.0))
                .show(ui, |ui| {
                    for (key, desc) in HELP {
                        ui.code(*key);
                        ui.label(*desc);
                        ui.end_row();
                    }
                });
        });
        if modal.should_close() {
            self.show_keybindings_overlay = false;
        }
    }
}

fn show_button(ui: &mut Ui, button: &PageButton) -> bool {
    let width = ui.available_width();
    ui.add(
        CyberpunkButton::new(button.label.clone())
            .style(button.style)
            .min_size(Vec2::new(width, 0.0)),
    )
    .clicked()
}

impl App for CyberpunkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Key, Modifiers, RawInput};

    fn input(width: f32, time: f64, events: Vec<Event>) -> RawInput {
        RawInput {
            time: Some(time),
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(width, 720.0))),
            events,
            ..Default::default()
        }
    }

    #[test]
    fn page_mounts_both_buttons() {
        let ctx = Context::default();
        let mut app = CyberpunkApp::default();
        for i in 0..3 {
            let _ = ctx.run(input(1280.0, f64::from(i) / 60.0, Vec::new()), |ctx| app.ui(ctx));
        }
        let (loops, mounted) = with_animator(&ctx, |a| (a.active_loops(), a.mounted()));
        assert_eq!(mounted, 2);
        assert_eq!(loops, 6);
        assert!(app.content_height > 0.0);
    }

    #[test]
    fn narrow_layout_still_shows_both_buttons() {
        let ctx = Context::default();
        let mut app = CyberpunkApp::default();
        for i in 0..2 {
            let _ = ctx.run(input(400.0, f64::from(i) / 60.0, Vec::new()), |ctx| app.ui(ctx));
        }
        assert_eq!(with_animator(&ctx, |a| a.mounted()), 2);
    }

    #[test]
    fn d_toggles_debug_overlay() {
        let ctx = Context::default();
        let mut app = CyberpunkApp::default();
        let press_d = Event::Key {
            key: Key::D,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        };
        let _ = ctx.run(input(1280.0, 0.0, vec![press_d]), |ctx| app.ui(ctx));
        assert!(app.show_debug_overlay);
    }

    #[test]
    fn bad_colors_fall_back_to_defaults() {
        let mut page = SettingsPage::default();
        page.buttons[0].glow_color = "cyan".to_string();
        let app = CyberpunkApp::with_settings(&page);
        assert_eq!(app.buttons[0].style.glow, ButtonStyle::default().glow);
        assert_eq!(app.buttons.len(), 2);
    }
}
