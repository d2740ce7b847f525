//! Driver configuration.
//!
//! ```json
//! { "outDir": "build", "generator": "cl" }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Root under which the generator's `gen-<lang>` directory is created.
    pub out_dir: PathBuf,
    /// Registry id of the generator to run.
    pub generator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            generator: "cl".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(GenerateError::io(path, err)),
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.out_dir, PathBuf::from("."));
        assert_eq!(config.generator, "cl");
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = Config::from_json(r#"{ "outDir": "build", "generator": "cl" }"#).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("build"));
        assert_eq!(config.generator, "cl");
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = Config::from_json(r#"{ "outDir": "out" }"#).unwrap();
        assert_eq!(config, Config::default().with_out_dir("out"));
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Config::from_json(r#"{ "outDir": 3 }"#).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration:"));
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("tidl.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tidl.json");
        fs::write(&path, r#"{ "generator": "cl", "outDir": "gen" }"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default().with_out_dir("gen"));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }), "{err}");
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config::default().with_out_dir("a/b").with_generator("cl");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"outDir\""));
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
