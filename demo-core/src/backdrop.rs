use std::f32::consts::TAU;
use std::sync::Arc;

use egui::{epaint::Mesh, Color32, CornerRadius, Galley, Pos2, Rect, Shape, Vec2};
use egui_cyberpunk::animation::{Ease, Keyframes};
use egui_cyberpunk::color::{additive, fade};
use egui_cyberpunk::draw::{conic_color, rounded_outline};

use crate::settings::SettingsBackdrop;

const ELLIPSE_SEGMENTS: usize = 48;
/// Soft edge of the panel glow, in points.
const GLOW_FEATHER: f32 = 32.0;
/// Opacity multiplier over one flicker cycle.
const FLICKER: Keyframes<'static> = Keyframes::new(&[1.0, 0.7, 1.0, 0.45, 1.0], Ease::InOut);
const HEADING_GLOW: [(f32, Color32, f32); 2] = [
    (2.0, Color32::from_rgb(0x00, 0xf0, 0xff), 0.35),
    (4.0, Color32::from_rgb(0xff, 0x00, 0xea), 0.2),
];

/// Black screen with a radial tint hanging from the top center.
pub fn background(screen: Rect, settings: &SettingsBackdrop) -> Vec<Shape> {
    let center = screen.center_top();
    let radii = Vec2::new(screen.width(), screen.height() * 0.6) * settings.falloff;

    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, settings.top);
    for i in 0..ELLIPSE_SEGMENTS {
        let theta = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
        let (sin, cos) = theta.sin_cos();
        mesh.colored_vertex(center + Vec2::new(cos * radii.x, sin * radii.y), Color32::BLACK);
    }
    let n = ELLIPSE_SEGMENTS as u32;
    for k in 0..n {
        mesh.add_triangle(0, 1 + k, 1 + (k + 1) % n);
    }

    vec![
        Shape::rect_filled(screen, CornerRadius::ZERO, Color32::BLACK),
        Shape::mesh(mesh),
    ]
}

/// Panel glow opacity at host time `time`.
pub fn flicker(time: f64, settings: &SettingsBackdrop) -> f32 {
    let progress = (time.rem_euclid(settings.flicker_period) / settings.flicker_period) as f32;
    settings.flicker_base * FLICKER.sample(progress)
}

/// Conic glow behind the panel, centered just below its bottom edge, feathered outward.
pub fn panel_glow(panel: Rect, radius: f32, opacity: f32, settings: &SettingsBackdrop) -> Shape {
    let origin = Pos2::new(panel.center().x, panel.top() + panel.height() * 1.1);
    let color = |p: Pos2| fade(conic_color(p, origin, 0.0, settings.glow_a, settings.glow_b), opacity);

    let inner = rounded_outline(panel, radius);
    let outer = rounded_outline(panel.expand(GLOW_FEATHER), radius + GLOW_FEATHER);

    let mut mesh = Mesh::default();
    mesh.colored_vertex(panel.center(), color(panel.center()));
    for (i, o) in inner.iter().zip(&outer) {
        mesh.colored_vertex(*i, color(*i));
        mesh.colored_vertex(*o, Color32::TRANSPARENT);
    }

    let n = inner.len() as u32;
    for k in 0..n {
        let next = (k + 1) % n;
        let (i0, o0) = (1 + 2 * k, 2 + 2 * k);
        let (i1, o1) = (1 + 2 * next, 2 + 2 * next);
        mesh.add_triangle(0, i0, i1);
        mesh.add_triangle(i0, o0, i1);
        mesh.add_triangle(o0, o1, i1);
    }
    Shape::mesh(mesh)
}

/// Cyan and magenta halos around the heading text.
pub fn heading_glow(pos: Pos2, galley: &Arc<Galley>) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for (radius, color, strength) in HEADING_GLOW {
        for step in 0..8 {
            let dir = Vec2::angled(TAU * step as f32 / 8.0);
            shapes.push(Shape::galley(
                pos + dir * radius,
                galley.clone(),
                additive(color, strength),
            ));
        }
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flicker_stays_around_base() {
        let settings = SettingsBackdrop::default();
        assert!((flicker(0.0, &settings) - 0.6).abs() < 1e-6);
        assert!((flicker(3.0, &settings) - 0.6).abs() < 1e-6);
        for i in 0..300 {
            let o = flicker(f64::from(i) * 0.01, &settings);
            assert!(o <= 0.6 + 1e-6);
            assert!(o >= 0.6 * 0.45 - 1e-6);
        }
    }

    #[test]
    fn background_fans_from_top_center() {
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0));
        let shapes = background(screen, &SettingsBackdrop::default());
        assert_eq!(shapes.len(), 2);
        let Shape::Mesh(mesh) = &shapes[1] else {
            panic!("expected mesh");
        };
        assert_eq!(mesh.vertices[0].pos, screen.center_top());
        assert!(mesh.is_valid());
    }

    #[test]
    fn panel_glow_fades_out() {
        let panel = Rect::from_min_size(Pos2::ZERO, Vec2::new(768.0, 300.0));
        let Shape::Mesh(mesh) = panel_glow(panel, 24.0, 0.6, &SettingsBackdrop::default()) else {
            panic!("expected mesh");
        };
        assert!(mesh.is_valid());
        assert!(mesh
            .vertices
            .iter()
            .skip(2)
            .step_by(2)
            .all(|v| v.color == Color32::TRANSPARENT));
    }
}
