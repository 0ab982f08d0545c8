use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::data::scale::ScalePolicy;
use crate::data::select::DEFAULT_TOP_N;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "anemia-race.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

/// Run settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CSV with `TIME_PERIOD`, `REF_AREA_LABEL` and `OBS_VALUE` columns.
    pub data_path: PathBuf,
    /// Time each year stays on screen.
    pub frame_interval_ms: u64,
    /// Bars per frame.
    pub top_n: usize,
    pub scale_policy: ScalePolicy,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("DataSources/Interpolated_Data_Anemia.csv"),
            frame_interval_ms: 200,
            top_n: DEFAULT_TOP_N,
            scale_policy: ScalePolicy::Global,
            window_width: 1400.0,
            window_height: 800.0,
        }
    }
}

impl Config {
    /// Load from [`CONFIG_FILE`] in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from a specific path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("{} not found, using default settings", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::NotPositive("frame_interval_ms"));
        }
        if self.top_n == 0 {
            return Err(ConfigError::NotPositive("top_n"));
        }
        if !(self.window_width > 0.0) || !(self.window_height > 0.0) {
            return Err(ConfigError::NotPositive("window size"));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frame_interval(), Duration::from_millis(200));
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let file = write_config(
            "data_path = \"data/anemia.csv\"\n\
             frame_interval_ms = 500\n\
             scale_policy = { per_frame = { lower_bound = 5.0 } }\n",
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/anemia.csv"));
        assert_eq!(config.frame_interval_ms, 500);
        assert_eq!(config.scale_policy, ScalePolicy::PerFrame { lower_bound: 5.0 });
        assert_eq!(config.top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let file = write_config("frame_interval_ms = 0\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::NotPositive("frame_interval_ms"))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("fps = 5\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
