use crate::metrics::MetricsRecorder;
use crate::ui_consts::{DEBUG_MONO_FONT_SIZE, UI_MARGIN};
use egui::{FontId, Pos2, Rect, Ui};

/// Build revision baked in by `build.rs`, if git was available.
pub fn build_rev() -> &'static str {
    option_env!("DEMO_GIT_DESCRIBE")
        .or(option_env!("DEMO_GIT_HASH"))
        .unwrap_or("unknown")
}

pub fn lines(metrics: &MetricsRecorder, active_loops: usize, mounted: usize) -> Vec<String> {
    vec![
        format!("FPS: {:.1}", metrics.fps()),
        format!("Loops: {active_loops}"),
        format!("Mounted: {mounted}"),
        format!("Rev: {}", build_rev()),
    ]
}

pub fn render(ui: &mut Ui, metrics: &MetricsRecorder, active_loops: usize, mounted: usize) {
    let text = lines(metrics, active_loops, mounted).join("\n");

    let text_color = ui.style().visuals.strong_text_color();
    let panel_rect: Rect = ui.max_rect();
    let font_id = FontId::monospace(DEBUG_MONO_FONT_SIZE);
    let galley = ui.fonts(|f| f.layout_no_wrap(text, font_id, text_color));
    let pos = Pos2::new(
        panel_rect.right() - UI_MARGIN - galley.size().x,
        panel_rect.top() + UI_MARGIN,
    );
    let painter = ui.painter_at(panel_rect);
    painter.galley(pos, galley, text_color);
}
