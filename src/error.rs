use thiserror::Error;

/// Contract violations raised by the settings reducers.
///
/// These indicate a caller bug (a widget sending a value the settings can never hold),
/// not a condition the user can reach by drawing.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    #[error("Invalid pen width {0}: must be a positive number")]
    InvalidWidth(f32),
}

/// Result type for settings reducers
pub type SettingsResult<T> = Result<T, SettingsError>;
