use crate::regions::SignatureMode;

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an optional JSON settings file.
pub const CONFIG_ENV: &str = "REGION_LIFE_CONFIG";

/// Highest frame rate that still leaves a whole millisecond between frames.
pub const MAX_FRAME_RATE: u64 = 1000;

/// Largest board, in cells, a settings file may ask for.
pub const MAX_CELLS: usize = 1 << 22;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Side of one cell in pixels.
    pub cell_size: u16,
    pub width: u32,
    pub height: u32,
    /// Generations per second.
    pub frame_rate: u64,
    /// Chance of a cell starting alive when the board is seeded.
    pub density: f64,
    /// Fixed seed for reproducible runs.
    pub seed: Option<u64>,
    pub signature: SignatureMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: 20,
            width: 300,
            height: 300,
            frame_rate: 10,
            density: 0.25,
            seed: None,
            signature: SignatureMode::Absolute,
        }
    }
}

impl Settings {
    /// Reads the file named by [`CONFIG_ENV`], or returns the defaults when
    /// the variable is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.columns() == 0 || self.rows() == 0 {
            return Err(ConfigError::Invalid(format!(
                "a {}x{} canvas holds no {}px cells",
                self.width, self.height, self.cell_size
            )));
        }
        if self.columns().saturating_mul(self.rows()) > MAX_CELLS {
            return Err(ConfigError::Invalid(format!(
                "a {}x{} board is larger than {MAX_CELLS} cells",
                self.columns(),
                self.rows()
            )));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be positive".into()));
        }
        if self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::Invalid(format!(
                "frame_rate {} is above {MAX_FRAME_RATE}",
                self.frame_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Invalid(format!(
                "density {} is outside [0, 1]",
                self.density
            )));
        }

        Ok(())
    }

    pub fn columns(&self) -> usize {
        (self.width / u32::from(self.cell_size.max(1))) as usize
    }

    pub fn rows(&self) -> usize {
        (self.height / u32::from(self.cell_size.max(1))) as usize
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.frame_rate.max(1))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            ConfigError::Parse(error) => write!(f, "malformed settings: {error}"),
            ConfigError::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse(error) => Some(error),
            ConfigError::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_15_by_15_board() {
        let settings = Settings::default();

        assert_eq!(settings.columns(), 15);
        assert_eq!(settings.rows(), 15);
        assert_eq!(settings.frame_interval(), Duration::from_millis(100));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn json_overrides_some_fields() {
        let settings = Settings::from_json(
            r#"{ "cell_size": 10, "width": 640, "seed": 9, "signature": "translated" }"#,
        )
        .unwrap();

        assert_eq!(settings.columns(), 64);
        assert_eq!(settings.rows(), 30);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.signature, SignatureMode::Translated);
        assert_eq!(settings.density, 0.25);
    }

    #[test]
    fn rejects_bad_values() {
        for json in [
            r#"{ "cell_size": 0 }"#,
            r#"{ "width": 10 }"#,
            r#"{ "frame_rate": 0 }"#,
            r#"{ "frame_rate": 2000 }"#,
            r#"{ "cell_size": 1, "width": 4000000000, "height": 4000000000 }"#,
            r#"{ "cell_size": 1, "width": 4096, "height": 4096 }"#,
            r#"{ "density": 1.5 }"#,
            r#"{ "density": -0.1 }"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(ConfigError::Invalid(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn limits_themselves_are_accepted() {
        let settings = Settings::from_json(
            r#"{ "cell_size": 1, "width": 2048, "height": 2048, "frame_rate": 1000 }"#,
        )
        .unwrap();

        assert_eq!(settings.columns() * settings.rows(), MAX_CELLS);
        assert_eq!(settings.frame_interval(), Duration::from_millis(1));
        assert!(!settings.frame_interval().is_zero());
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        assert!(matches!(
            Settings::from_json(r#"{ "speed": 3 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json("{ cell_size: }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "signature": "rotated" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let error = Settings::from_path(Path::new("/nonexistent/region-life.json")).unwrap_err();

        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().contains("region-life.json"));
    }
}
