mod border;
mod drawer;
mod layers;

pub use self::border::{conic_color, conic_ring, radial_fill, rounded_outline};
pub use self::drawer::{label_job, DrawContext, Drawer, BORDER_WIDTH, INNER_RADIUS, OUTER_RADIUS};
pub use self::layers::{plan, Blend, ButtonVisuals, Layer, LayerKind, GLITCH_HUE_SHIFT};
