use thiserror::Error;

/// Failure to turn a configuration string into a [`egui::Color32`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),

    #[error("color `{value}` has {len} hex digits, expected 3, 4, 6 or 8")]
    InvalidLength { value: String, len: usize },

    #[error("color `{value}` contains non-hex digit '{digit}'")]
    InvalidDigit { value: String, digit: char },
}
