//! Rules configuration.
//!
//! A `RulesConfig` fixes the board shape and the economy of a game. It is
//! stored inside `GameState`, so a state reconstructed from storage keeps
//! the rules it was created with.
//!
//! ```
//! use stonebid::core::RulesConfig;
//!
//! let config = RulesConfig::from_toml_str(
//!     r#"
//!     starting_credits = 150
//!     clock_ms = 300000
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.rows, 10);
//! assert_eq!(config.starting_credits, 150);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Board shape and economy for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Board rows. Split at the midline into the two home halves.
    pub rows: usize,

    /// Board columns.
    pub cols: usize,

    /// Credits each player starts with.
    pub starting_credits: i64,

    /// Clock per player, in milliseconds.
    pub clock_ms: u64,

    /// Maximum stones a player may place during Placement.
    pub max_stones: u8,

    /// Largest movement distance a stone may be assigned.
    pub max_distance: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            starting_credits: 100,
            clock_ms: 10 * 60 * 1000,
            max_stones: 10,
            max_distance: 5,
        }
    }
}

impl RulesConfig {
    /// Parse a config from TOML. Missing keys take their default value.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.rows % 2 != 0 {
            return Err(ConfigError::Invalid(format!(
                "rows must be even and at least 2, got {}",
                self.rows
            )));
        }
        if self.cols == 0 {
            return Err(ConfigError::Invalid("cols must be at least 1".to_string()));
        }
        if self.starting_credits < 0 {
            return Err(ConfigError::Invalid(format!(
                "starting_credits must not be negative, got {}",
                self.starting_credits
            )));
        }
        if self.max_distance == 0 {
            return Err(ConfigError::Invalid("max_distance must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Number of labelled cells in one home half.
    #[must_use]
    pub fn half_size(&self) -> u32 {
        ((self.rows / 2) * self.cols) as u32
    }

    /// Score awarded for a stone standing on an opposing label.
    ///
    /// Low labels are the cheap squares to place on, so they are worth the
    /// most to an invader: `half_size + 1 - label` (51 − label on 10×10).
    #[must_use]
    pub fn positional_value(&self, label: u32) -> i64 {
        if label == 0 {
            0
        } else {
            i64::from(self.half_size()) + 1 - i64::from(label)
        }
    }

    /// Create a config with a custom board shape.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Create a config with custom starting credits.
    #[must_use]
    pub fn with_starting_credits(mut self, credits: i64) -> Self {
        self.starting_credits = credits;
        self
    }

    /// Create a config with a custom per-player clock.
    #[must_use]
    pub fn with_clock_ms(mut self, clock_ms: u64) -> Self {
        self.clock_ms = clock_ms;
        self
    }

    /// Create a config with a custom placement cap.
    #[must_use]
    pub fn with_max_stones(mut self, max_stones: u8) -> Self {
        self.max_stones = max_stones;
        self
    }
}
