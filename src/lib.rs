pub mod animation;
pub mod color;
pub mod draw;

mod button;
mod error;
mod settings;

pub use self::animation::begin_frame;
pub use self::button::CyberpunkButton;
pub use self::error::ColorError;
pub use self::settings::{ButtonAttributes, ButtonConfig, ButtonSize, ButtonStyle};
