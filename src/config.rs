use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_SIZE: u32 = 4;
pub const MIN_SIZE: u32 = 2;
pub const MAX_SIZE: u32 = 64;

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board radius. The backing array is `4*size` wide and `2*size` high.
    pub size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl GameConfig {
    pub fn new(size: u32) -> Result<Self, ConfigError> {
        let config = Self { size };
        config.validate()?;
        Ok(config)
    }

    /// Parses a page location hash such as `#5`.
    ///
    /// Sizes outside `MIN_SIZE..=MAX_SIZE` clamp to the nearest bound;
    /// anything that is not a number falls back to the default size.
    pub fn from_hash(hash: &str) -> Self {
        let digits = hash.trim().trim_start_matches('#');
        let size = match digits.parse::<i64>() {
            Ok(n) => n.clamp(MIN_SIZE as i64, MAX_SIZE as i64) as u32,
            Err(_) => DEFAULT_SIZE,
        };
        Self { size }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::SizeTooSmall {
                size: self.size,
                min: MIN_SIZE,
            });
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hash_parses_clamps_and_falls_back() {
        assert_eq!(GameConfig::from_hash("#5").size, 5);
        assert_eq!(GameConfig::from_hash("7").size, 7);
        assert_eq!(GameConfig::from_hash("#1").size, MIN_SIZE);
        assert_eq!(GameConfig::from_hash("#-3").size, MIN_SIZE);
        assert_eq!(GameConfig::from_hash("#20000").size, MAX_SIZE);
        assert_eq!(GameConfig::from_hash("").size, DEFAULT_SIZE);
        assert_eq!(GameConfig::from_hash("#big").size, DEFAULT_SIZE);
    }

    #[test]
    fn new_rejects_sizes_outside_bounds() {
        assert_eq!(
            GameConfig::new(1).unwrap_err(),
            ConfigError::SizeTooSmall { size: 1, min: 2 }
        );
        assert_eq!(GameConfig::new(2).unwrap().size, 2);
        assert_eq!(GameConfig::new(MAX_SIZE).unwrap().size, MAX_SIZE);
        assert_eq!(
            GameConfig::new(MAX_SIZE + 1).unwrap_err(),
            ConfigError::SizeTooLarge { size: MAX_SIZE + 1, max: MAX_SIZE }
        );
        assert_eq!(GameConfig::default().size, DEFAULT_SIZE);
    }
}
