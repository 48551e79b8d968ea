use std::sync::Arc;

use egui::{
    epaint::Shadow,
    text::{LayoutJob, TextFormat},
    Color32, CornerRadius, FontId, Galley, Painter, Pos2, Rect, Shape, Stroke, Vec2,
};

use crate::color::additive;
use crate::settings::ButtonSize;

use super::border::{conic_ring, radial_fill};
use super::layers::{Blend, ButtonVisuals, LayerKind};

/// Corner radius of the outer control.
pub const OUTER_RADIUS: f32 = 12.0;
/// Corner radius of layers drawn inside the border.
pub const INNER_RADIUS: f32 = 10.0;
pub const BORDER_WIDTH: f32 = 1.0;
/// Distance between scanlines.
const SCANLINE_STEP: f32 = 3.0;
/// Halo offsets around a label glyph run.
const HALO: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
];

/// Everything a [`Drawer`] needs to paint one button.
pub struct DrawContext<'a> {
    pub painter: &'a Painter,
    pub visuals: &'a ButtonVisuals,
    pub label: &'a str,
    pub size: ButtonSize,
    /// Faded look for disabled buttons
    pub enabled: bool,
}

/// Lays out `label` the way every text layer of a button shows it.
///
/// The galley carries no color of its own; layers tint it when painting.
pub fn label_job(label: &str, size: ButtonSize, scale: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(
        &label.to_uppercase(),
        0.0,
        TextFormat {
            font_id: FontId::proportional(size.font_size() * scale),
            extra_letter_spacing: size.letter_spacing() * scale,
            color: Color32::PLACEHOLDER,
            ..Default::default()
        },
    );
    job
}

pub struct Drawer<'a> {
    ctx: &'a DrawContext<'a>,
    galley: Arc<Galley>,
}

impl<'a> Drawer<'a> {
    pub fn new(ctx: &'a DrawContext<'a>) -> Self {
        let galley = ctx
            .painter
            .layout_job(label_job(ctx.label, ctx.size, ctx.visuals.scale));
        Self { ctx, galley }
    }

    pub fn draw(self) {
        let shapes = self.shapes();
        self.ctx.painter.extend(shapes);
    }

    /// Shapes for every layer, back to front.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut res = Vec::new();
        for layer in &self.ctx.visuals.layers {
            self.layer_shapes(&layer.kind, &mut res);
        }
        res
    }

    fn layer_shapes(&self, kind: &LayerKind, res: &mut Vec<Shape>) {
        let rect = self.ctx.visuals.rect;
        let inner = rect.shrink(BORDER_WIDTH);
        match kind {
            LayerKind::GlowShadow { blur, color } => {
                let shadow = Shadow {
                    offset: [0, 0],
                    blur: *blur,
                    spread: 0,
                    color: self.tint(*color),
                };
                res.push(shadow.as_shape(rect, CornerRadius::same(OUTER_RADIUS as u8)).into());
            }
            LayerKind::Border {
                from_angle,
                accent,
                glow,
            } => {
                let mesh = conic_ring(
                    rect,
                    OUTER_RADIUS,
                    BORDER_WIDTH,
                    *from_angle,
                    self.tint(*accent),
                    self.tint(*glow),
                );
                res.push(Shape::mesh(mesh));
            }
            LayerKind::Backdrop { color } => {
                res.push(Shape::rect_filled(
                    inner,
                    CornerRadius::same(INNER_RADIUS as u8),
                    *color,
                ));
            }
            LayerKind::Sheen { top, mid } => {
                // Two fans approximate a radial falloff from the top edge.
                res.push(Shape::mesh(radial_fill(
                    inner,
                    INNER_RADIUS,
                    inner.center_top(),
                    self.tint(*top),
                    Color32::TRANSPARENT,
                )));
                res.push(Shape::mesh(radial_fill(
                    inner,
                    INNER_RADIUS,
                    inner.center(),
                    self.tint(*mid),
                    Color32::TRANSPARENT,
                )));
            }
            LayerKind::Scanlines { color } => {
                let x = inner.shrink2(Vec2::new(INNER_RADIUS * 0.5, 0.0)).x_range();
                let mut y = inner.top() + SCANLINE_STEP;
                while y < inner.bottom() {
                    res.push(Shape::hline(x, y, Stroke::new(1.0, *color)));
                    y += SCANLINE_STEP;
                }
            }
            LayerKind::Label { color, halo } => {
                let pos = self.label_pos(Vec2::ZERO);
                self.halo(pos, self.tint(*halo), res);
                res.push(Shape::galley(pos, self.galley.clone(), self.tint(*color)));
            }
            LayerKind::Glitch {
                color,
                halo,
                offset,
                blend,
                ..
            } => {
                let pos = self.label_pos(*offset);
                let strength = match blend {
                    Blend::Lighten => 0.85,
                    Blend::Screen => 0.7,
                };
                self.halo(pos, additive(self.tint(*halo), strength * 0.4), res);
                res.push(Shape::galley(
                    pos,
                    self.galley.clone(),
                    additive(self.tint(*color), strength),
                ));
            }
        }
    }

    fn label_pos(&self, offset: Vec2) -> Pos2 {
        let rect = Rect::from_center_size(
            self.ctx.visuals.rect.center() + offset,
            self.galley.size(),
        );
        rect.min
    }

    fn halo(&self, pos: Pos2, color: Color32, res: &mut Vec<Shape>) {
        for d in HALO {
            res.push(Shape::galley(pos + d, self.galley.clone(), color));
        }
    }

    fn tint(&self, c: Color32) -> Color32 {
        if self.ctx.enabled {
            c
        } else {
            c.gamma_multiply(0.4)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_job_uppercases_and_scales() {
        let job = label_job("engage", ButtonSize::Large, 0.5);
        assert_eq!(job.text, "ENGAGE");
        let format = &job.sections[0].format;
        assert_eq!(format.font_id.size, 8.0);
        assert!((format.extra_letter_spacing - 1.6).abs() < 1e-5);
        assert_eq!(format.color, Color32::PLACEHOLDER);
    }
}
