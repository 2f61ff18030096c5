//! Error types for engine construction

use thiserror::Error;

/// Result type alias for engine construction
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Invalid engine configuration
///
/// Gameplay never produces errors; only a malformed configuration does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Board too small for a piece or too large to address
    #[error("Invalid board size {width}x{height}: each side must be between {min} and {max} cells")]
    InvalidBoardSize {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
    },

    /// Line-clear blink period of zero
    #[error("Flash interval must be at least 1ms")]
    ZeroFlashInterval,

    /// Board handed to a reset does not match the configured size
    #[error("Board is {width}x{height}, engine is configured for {expected_width}x{expected_height}")]
    BoardSizeMismatch {
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },

    /// Line-clear animation with no blinks
    #[error("Line clears need at least one flash")]
    ZeroFlashCount,
}
