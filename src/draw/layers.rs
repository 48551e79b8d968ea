use egui::{Color32, Rect, Vec2};

use crate::animation::AnimationFrame;
use crate::color::{hue_rotate, with_alpha};
use crate::ButtonStyle;

/// Hue shift of the accent glitch layer, in degrees.
pub const GLITCH_HUE_SHIFT: f32 = 20.0;
/// Below this glow strength no shadow is drawn.
const GLOW_CUTOFF: f32 = 0.001;

/// How a layer combines with what is already painted underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    Lighten,
    Screen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    /// Soft hover glow around the control
    GlowShadow { blur: u8, color: Color32 },
    /// 1pt conic-gradient ring, rotated by `from_angle` degrees
    Border {
        from_angle: f32,
        accent: Color32,
        glow: Color32,
    },
    Backdrop { color: Color32 },
    /// Radial tint falling off from the top edge
    Sheen { top: Color32, mid: Color32 },
    Scanlines { color: Color32 },
    Label { color: Color32, halo: Color32 },
    Glitch {
        index: usize,
        color: Color32,
        halo: Color32,
        offset: Vec2,
        blend: Blend,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    /// Receives pointer input
    pub interactive: bool,
    /// Exposed to assistive technology
    pub accessible: bool,
}

impl Layer {
    fn decorative(kind: LayerKind) -> Self {
        Self {
            kind,
            interactive: false,
            accessible: false,
        }
    }

    /// Every color this layer paints with.
    pub fn colors(&self) -> Vec<Color32> {
        match &self.kind {
            LayerKind::GlowShadow { color, .. }
            | LayerKind::Backdrop { color }
            | LayerKind::Scanlines { color } => vec![*color],
            LayerKind::Border { accent, glow, .. } => vec![*accent, *glow],
            LayerKind::Sheen { top, mid } => vec![*top, *mid],
            LayerKind::Label { color, halo } | LayerKind::Glitch { color, halo, .. } => {
                vec![*color, *halo]
            }
        }
    }
}

/// Everything needed to paint one frame of a button, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonVisuals {
    /// Rect after hover lift and press scale
    pub rect: Rect,
    pub scale: f32,
    pub layers: Vec<Layer>,
}

impl ButtonVisuals {
    pub fn colors(&self) -> impl Iterator<Item = Color32> + '_ {
        self.layers.iter().flat_map(Layer::colors)
    }

    pub fn glow_shadows(&self) -> impl Iterator<Item = (u8, Color32)> + '_ {
        self.layers.iter().filter_map(|l| match l.kind {
            LayerKind::GlowShadow { blur, color } => Some((blur, color)),
            _ => None,
        })
    }
}

/// Builds the layer stack for a button occupying `rect`.
pub fn plan(style: &ButtonStyle, frame: &AnimationFrame, rect: Rect) -> ButtonVisuals {
    let interaction = frame.interaction;
    let visual = Rect::from_center_size(
        rect.center() + Vec2::new(0.0, interaction.lift),
        rect.size() * interaction.scale,
    );

    let mut layers = Vec::with_capacity(10);

    if interaction.glow > GLOW_CUTOFF {
        for (blur, alpha) in [(24_u8, 0x80_u8), (60, 0x40)] {
            let alpha = (f32::from(alpha) * interaction.glow).round() as u8;
            layers.push(Layer::decorative(LayerKind::GlowShadow {
                blur,
                color: with_alpha(style.glow, alpha),
            }));
        }
    }

    layers.push(Layer::decorative(LayerKind::Border {
        from_angle: frame.border_angle,
        accent: style.accent,
        glow: style.glow,
    }));
    layers.push(Layer::decorative(LayerKind::Backdrop {
        color: Color32::from_black_alpha(204),
    }));
    layers.push(Layer::decorative(LayerKind::Sheen {
        top: with_alpha(style.glow, 36),
        mid: with_alpha(style.accent, 20),
    }));
    layers.push(Layer::decorative(LayerKind::Scanlines {
        color: Color32::from_black_alpha(56),
    }));

    layers.push(Layer {
        kind: LayerKind::Label {
            color: Color32::WHITE,
            halo: with_alpha(style.glow, 0x59),
        },
        interactive: true,
        accessible: true,
    });

    let shifted_accent = hue_rotate(style.accent, GLITCH_HUE_SHIFT);
    let glitch = [(style.glow, Blend::Lighten), (shifted_accent, Blend::Screen)];
    let offsets = frame.glitch_offsets;
    for (index, ((color, blend), offset)) in glitch.into_iter().zip(offsets).enumerate() {
        layers.push(Layer::decorative(LayerKind::Glitch {
            index,
            color,
            halo: with_alpha(color, 0x66),
            offset,
            blend,
        }));
    }

    ButtonVisuals {
        rect: visual,
        scale: interaction.scale,
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::InteractionFrame;
    use crate::color::parse_hex;
    use egui::pos2;

    fn rect() -> Rect {
        Rect::from_min_size(pos2(10.0, 10.0), Vec2::new(200.0, 56.0))
    }

    fn hovered() -> AnimationFrame {
        AnimationFrame {
            interaction: InteractionFrame {
                lift: -1.5,
                scale: 1.0,
                glow: 1.0,
            },
            ..Default::default()
        }
    }

    fn rgb(c: Color32) -> [u8; 3] {
        let [r, g, b, _] = c.to_srgba_unmultiplied();
        [r, g, b]
    }

    #[test]
    fn only_primary_label_is_accessible() {
        let v = plan(&ButtonStyle::default(), &hovered(), rect());
        let accessible: Vec<_> = v.layers.iter().filter(|l| l.accessible).collect();
        assert_eq!(accessible.len(), 1);
        assert!(matches!(accessible[0].kind, LayerKind::Label { .. }));
        assert_eq!(v.layers.iter().filter(|l| l.interactive).count(), 1);
    }

    #[test]
    fn idle_has_no_glow() {
        let v = plan(&ButtonStyle::default(), &AnimationFrame::default(), rect());
        assert_eq!(v.glow_shadows().count(), 0);
        assert_eq!(v.rect, rect());
    }

    #[test]
    fn hover_glow_uses_glow_color() {
        let style = ButtonStyle::default();
        let v = plan(&style, &hovered(), rect());
        let shadows: Vec<_> = v.glow_shadows().collect();
        assert_eq!(shadows.len(), 2);
        assert_eq!(shadows[0], (24, with_alpha(style.glow, 0x80)));
        assert_eq!(shadows[1], (60, with_alpha(style.glow, 0x40)));
        assert!((v.rect.center().y - (rect().center().y - 1.5)).abs() < 1e-4);
    }

    #[test]
    fn press_scales_down_around_center() {
        let frame = AnimationFrame {
            interaction: InteractionFrame {
                lift: 0.0,
                scale: 0.985,
                glow: 1.0,
            },
            ..Default::default()
        };
        let v = plan(&ButtonStyle::default(), &frame, rect());
        assert_eq!(v.rect.center(), rect().center());
        assert!(v.rect.width() < rect().width());
    }

    #[test]
    fn glitch_layers_carry_offsets_and_blends() {
        let frame = AnimationFrame {
            glitch_offsets: [Vec2::new(1.0, -0.5), Vec2::new(-2.0, 1.0)],
            ..hovered()
        };
        let style = ButtonStyle::default();
        let v = plan(&style, &frame, rect());
        let glitches: Vec<_> = v
            .layers
            .iter()
            .filter_map(|l| match &l.kind {
                LayerKind::Glitch {
                    color,
                    offset,
                    blend,
                    ..
                } => Some((*color, *offset, *blend)),
                _ => None,
            })
            .collect();
        assert_eq!(glitches.len(), 2);
        assert_eq!(glitches[0], (style.glow, Vec2::new(1.0, -0.5), Blend::Lighten));
        assert_eq!(glitches[1].0, hue_rotate(style.accent, GLITCH_HUE_SHIFT));
        assert_eq!(glitches[1].2, Blend::Screen);
    }

    #[test]
    fn instances_do_not_leak_colors() {
        let a = ButtonStyle::default()
            .with_glow(parse_hex("#00F0FF").unwrap())
            .with_accent(parse_hex("#FF00EA").unwrap());
        let b = ButtonStyle::default()
            .with_glow(parse_hex("#8AFF00").unwrap())
            .with_accent(parse_hex("#00FFD1").unwrap());

        let va = plan(&a, &hovered(), rect());
        let vb = plan(&b, &hovered(), rect());
        let b_rgb = [rgb(b.glow), rgb(b.accent)];
        let a_rgb = [rgb(a.glow), rgb(a.accent)];

        assert!(va.colors().all(|c| !b_rgb.contains(&rgb(c))));
        assert!(vb.colors().all(|c| !a_rgb.contains(&rgb(c))));
    }

    #[test]
    fn border_angle_is_forwarded() {
        let frame = AnimationFrame {
            border_angle: 123.0,
            ..Default::default()
        };
        let v = plan(&ButtonStyle::default(), &frame, rect());
        assert!(v
            .layers
            .iter()
            .any(|l| matches!(l.kind, LayerKind::Border { from_angle, .. } if from_angle == 123.0)));
    }
}
