use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dining_core::{ConfigSource, DiningConfig};
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("cannot read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON configuration read from disk.
#[derive(Debug, Clone)]
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfig {
    type Error = ConfigFileError;

    fn load_config(&self) -> Result<DiningConfig, Self::Error> {
        let label = self.path.display().to_string();
        debug!("loading configuration from {label}");
        let raw = fs::read_to_string(&self.path).map_err(|source| ConfigFileError::Read {
            path: label.clone(),
            source,
        })?;
        DiningConfig::from_json(&raw).map_err(|source| ConfigFileError::Parse {
            path: label,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "dining-config-{label}-{}.json",
            std::process::id()
        ))
    }

    #[test]
    fn loads_partial_document() {
        let path = temp_path("partial");
        fs::write(&path, r#"{"menu": [{"name": "Tacos", "price": 3.5}]}"#).unwrap();
        let config = FileConfig::new(&path).load_config().unwrap();
        assert_eq!(config.menu.lookup("tacos"), Some(3.5));
        assert_eq!(config.limits.max, 100);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = FileConfig::new(temp_path("missing-never-written"));
        let err = source.load_config().unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        let err = FileConfig::new(&path).load_config().unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
        let _ = fs::remove_file(path);
    }
}
