//! Rule configuration

use crate::error::ConfigError;

/// Tunable rule settings
///
/// Fields missing from a config source take their default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Moves per player before the game is drawn
    pub move_limit: u32, // Default: 200
    /// Run the drive-safety simulation even while already in check.
    /// When false, escapes from check are filtered by the escape enumerator instead.
    pub strict_drive_safety: bool, // Default: false
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            move_limit: 200,
            strict_drive_safety: false,
        }
    }
}

impl RuleConfig {
    /// Parse a (possibly partial) JSON object
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.move_limit == 0 {
            return Err(ConfigError::ZeroMoveLimit);
        }
        Ok(())
    }
}
