use std::f32::consts::{FRAC_PI_2, PI};

use egui::{epaint::Mesh, Color32, Pos2, Rect, Vec2};

use crate::color::mix;

/// Arc subdivisions per rounded corner.
const CORNER_SEGMENTS: usize = 8;

/// Color of a conic gradient `accent → glow → accent` at `point`.
///
/// Angles follow CSS: 0° points up and grows clockwise, `from` rotates the
/// whole gradient.
pub fn conic_color(point: Pos2, center: Pos2, from: f32, accent: Color32, glow: Color32) -> Color32 {
    let d = point - center;
    let angle = d.x.atan2(-d.y).to_degrees().rem_euclid(360.0);
    let progress = (angle - from).rem_euclid(360.0) / 360.0;
    mix(accent, glow, 1.0 - (2.0 * progress - 1.0).abs())
}

/// Outline of a rounded rectangle, clockwise from the top-right corner.
pub fn rounded_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius.clamp(0.0, rect.width().min(rect.height()) * 0.5);
    let corners = [
        (Pos2::new(rect.right() - r, rect.top() + r), -FRAC_PI_2),
        (Pos2::new(rect.right() - r, rect.bottom() - r), 0.0),
        (Pos2::new(rect.left() + r, rect.bottom() - r), FRAC_PI_2),
        (Pos2::new(rect.left() + r, rect.top() + r), PI),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let theta = start + FRAC_PI_2 * (i as f32 / CORNER_SEGMENTS as f32);
            points.push(center + r * Vec2::angled(theta));
        }
    }
    points
}

/// Ring of `width` along the inside of `rect`, colored with a conic gradient.
pub fn conic_ring(
    rect: Rect,
    radius: f32,
    width: f32,
    from: f32,
    accent: Color32,
    glow: Color32,
) -> Mesh {
    let outer = rounded_outline(rect, radius);
    let inner = rounded_outline(rect.shrink(width), (radius - width).max(0.0));
    let center = rect.center();

    let mut mesh = Mesh::default();
    for (o, i) in outer.iter().zip(&inner) {
        mesh.colored_vertex(*o, conic_color(*o, center, from, accent, glow));
        mesh.colored_vertex(*i, conic_color(*i, center, from, accent, glow));
    }

    let n = outer.len() as u32;
    for k in 0..n {
        let next = (k + 1) % n;
        let (o0, i0) = (2 * k, 2 * k + 1);
        let (o1, i1) = (2 * next, 2 * next + 1);
        mesh.add_triangle(o0, i0, o1);
        mesh.add_triangle(i0, i1, o1);
    }
    mesh
}

/// Fan over a rounded rect, `center` color at `origin` fading to `edge` color.
pub fn radial_fill(
    rect: Rect,
    radius: f32,
    origin: Pos2,
    center: Color32,
    edge: Color32,
) -> Mesh {
    let outline = rounded_outline(rect, radius);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(origin, center);
    for p in &outline {
        mesh.colored_vertex(*p, edge);
    }
    let n = outline.len() as u32;
    for k in 0..n {
        mesh.add_triangle(0, 1 + k, 1 + (k + 1) % n);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    const ACCENT: Color32 = Color32::from_rgb(255, 0, 234);
    const GLOW: Color32 = Color32::from_rgb(0, 240, 255);

    #[test]
    fn conic_stops() {
        let c = pos2(0.0, 0.0);
        assert_eq!(conic_color(pos2(0.0, -1.0), c, 0.0, ACCENT, GLOW), ACCENT);
        assert_eq!(conic_color(pos2(0.0, 1.0), c, 0.0, ACCENT, GLOW), GLOW);
    }

    #[test]
    fn conic_rotation_moves_stops() {
        let c = pos2(0.0, 0.0);
        // Rotated by 90°, the accent stop points right.
        assert_eq!(conic_color(pos2(1.0, 0.0), c, 90.0, ACCENT, GLOW), ACCENT);
        assert_eq!(conic_color(pos2(-1.0, 0.0), c, 90.0, ACCENT, GLOW), GLOW);
    }

    #[test]
    fn outline_stays_inside_rect() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(120.0, 40.0));
        let pts = rounded_outline(rect, 12.0);
        assert_eq!(pts.len(), 4 * (CORNER_SEGMENTS + 1));
        for p in pts {
            assert!(rect.expand(1e-3).contains(p));
        }
    }

    #[test]
    fn ring_is_closed() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(120.0, 40.0));
        let mesh = conic_ring(rect, 12.0, 1.0, 0.0, ACCENT, GLOW);
        let n = 4 * (CORNER_SEGMENTS + 1);
        assert_eq!(mesh.vertices.len(), 2 * n);
        assert_eq!(mesh.indices.len(), 6 * n);
        assert!(mesh.is_valid());
    }

    #[test]
    fn radial_fill_fans_from_origin() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(80.0, 30.0));
        let mesh = radial_fill(rect, 10.0, rect.center_top(), GLOW, Color32::TRANSPARENT);
        assert_eq!(mesh.vertices[0].color, GLOW);
        assert!(mesh.is_valid());
    }
}
