use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings from {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the controller talks to its surface. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Call `push_transform` after every accepted gesture.
    pub push_transform: bool,
    /// Coalesce render requests made while paused into one redraw on resume.
    pub defer_render_while_paused: bool,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            push_transform: false,
            defer_render_while_paused: true,
        }
    }
}

impl SurfaceSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SurfaceSettings::default();
        assert!(!settings.push_transform);
        assert!(settings.defer_render_while_paused);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = SurfaceSettings::from_json(r#"{ "push_transform": true }"#).unwrap();
        assert!(settings.push_transform);
        assert!(settings.defer_render_while_paused);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = SurfaceSettings {
            push_transform: true,
            defer_render_while_paused: false,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(SurfaceSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json() {
        let err = SurfaceSettings::from_json("{ push_transform: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SurfaceSettings::load("/nonexistent/pinchview/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("settings.json"));
    }
}
