//! Configuration for a GameEngine

use crate::error::{ConfigError, Result};
use crate::pieces::MAX_SHAPE_SIDE;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FLASH_INTERVAL_MS, MAX_FLASHES, RESTART_DELAY_MS};

/// Largest board side the engine accepts
pub const MAX_BOARD_SIDE: usize = 255;

/// Main configuration for a GameEngine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board width in cells
    pub board_width: usize,

    /// Board height in cells
    pub board_height: usize,

    /// Randomizer seed (OS entropy if None)
    pub seed: Option<u64>,

    /// Game-over countdown before the automatic restart (in milliseconds)
    pub restart_delay_ms: u32,

    /// Line-clear blink period (in milliseconds)
    pub flash_interval_ms: u32,

    /// Blinks before cleared rows are removed
    pub max_flashes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            seed: None,
            restart_delay_ms: RESTART_DELAY_MS,
            flash_interval_ms: FLASH_INTERVAL_MS,
            max_flashes: MAX_FLASHES,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions
    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Set the randomizer seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the game-over countdown in milliseconds
    pub fn with_restart_delay_ms(mut self, delay_ms: u32) -> Self {
        self.restart_delay_ms = delay_ms;
        self
    }

    /// Set the line-clear blink period in milliseconds
    pub fn with_flash_interval_ms(mut self, interval_ms: u32) -> Self {
        self.flash_interval_ms = interval_ms;
        self
    }

    /// Set the number of line-clear blinks
    pub fn with_max_flashes(mut self, flashes: u32) -> Self {
        self.max_flashes = flashes;
        self
    }

    /// Check the configuration before a board is built from it
    pub fn validate(&self) -> Result<()> {
        let side_ok = |side: usize| (MAX_SHAPE_SIDE..=MAX_BOARD_SIDE).contains(&side);
        if !side_ok(self.board_width) || !side_ok(self.board_height) {
            return Err(ConfigError::InvalidBoardSize {
                width: self.board_width,
                height: self.board_height,
                min: MAX_SHAPE_SIDE,
                max: MAX_BOARD_SIDE,
            });
        }
        if self.flash_interval_ms == 0 {
            return Err(ConfigError::ZeroFlashInterval);
        }
        if self.max_flashes == 0 {
            return Err(ConfigError::ZeroFlashCount);
        }
        Ok(())
    }
}
