use egui::Color32;

use crate::ColorError;

/// Default glow color (`#00f0ff`).
pub const DEFAULT_GLOW: Color32 = Color32::from_rgb(0x00, 0xf0, 0xff);
/// Default accent color (`#ff00ea`).
pub const DEFAULT_ACCENT: Color32 = Color32::from_rgb(0xff, 0x00, 0xea);

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (case-insensitive).
///
/// # Errors
/// Fails if the leading `#` is missing, a digit is not hex or the digit count is off.
pub fn parse_hex(value: &str) -> Result<Color32, ColorError> {
    let trimmed = value.trim();
    let Some(digits) = trimmed.strip_prefix('#') else {
        return Err(ColorError::MissingHash(value.to_string()));
    };

    let mut nibbles = Vec::with_capacity(digits.len());
    for ch in digits.chars() {
        let Some(n) = ch.to_digit(16) else {
            return Err(ColorError::InvalidDigit {
                value: value.to_string(),
                digit: ch,
            });
        };
        nibbles.push(n as u8);
    }

    let [r, g, b, a] = match nibbles.len() {
        3 | 4 => {
            let mut out = [0xff; 4];
            for (slot, n) in out.iter_mut().zip(&nibbles) {
                *slot = n * 0x11;
            }
            out
        }
        6 | 8 => {
            let mut out = [0xff; 4];
            for (slot, pair) in out.iter_mut().zip(nibbles.chunks(2)) {
                *slot = (pair[0] << 4) | pair[1];
            }
            out
        }
        len => {
            return Err(ColorError::InvalidLength {
                value: value.to_string(),
                len,
            })
        }
    };

    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Formats a color as lowercase `#rrggbb` (or `#rrggbbaa` when translucent).
pub fn to_hex(c: Color32) -> String {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Replaces the alpha of `c`, keeping its unmultiplied rgb.
pub fn with_alpha(c: Color32, alpha: u8) -> Color32 {
    let [r, g, b, _] = c.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

/// Scales the alpha of `c` by `factor` in `[0, 1]`.
pub fn fade(c: Color32, factor: f32) -> Color32 {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    let alpha = (f32::from(a) * factor.clamp(0.0, 1.0)).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

/// Linear blend in gamma space, `t = 0` is `a`.
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ca = a.to_srgba_unmultiplied();
    let cb = b.to_srgba_unmultiplied();
    let out: [u8; 4] = std::array::from_fn(|i| {
        (f32::from(ca[i]) + (f32::from(cb[i]) - f32::from(ca[i])) * t).round() as u8
    });
    Color32::from_rgba_unmultiplied(out[0], out[1], out[2], out[3])
}

/// Additive color: zero alpha in premultiplied space makes the painter add
/// it on top of whatever is underneath instead of covering it.
pub fn additive(c: Color32, strength: f32) -> Color32 {
    let s = strength.clamp(0.0, 1.0);
    let [r, g, b, _] = c.to_srgba_unmultiplied();
    Color32::from_rgba_premultiplied(
        (f32::from(r) * s).round() as u8,
        (f32::from(g) * s).round() as u8,
        (f32::from(b) * s).round() as u8,
        0,
    )
}

/// Hue rotation with the same matrix the CSS `hue-rotate()` filter uses.
pub fn hue_rotate(c: Color32, degrees: f32) -> Color32 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let m = [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ];

    let [r, g, b, a] = c.to_srgba_unmultiplied();
    let rgb = [f32::from(r), f32::from(g), f32::from(b)];
    let channel = |row: [f32; 3]| -> u8 {
        (row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2])
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Color32::from_rgba_unmultiplied(channel(m[0]), channel(m[1]), channel(m[2]), a)
}
