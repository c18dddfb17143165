use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::editor::ViewMode;
use crate::error::ChartError;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub chords: ChordConfig,
    pub time_signature: TimeSignatureConfig,
    pub sections: SectionConfig,
    pub shrink: ShrinkConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Should be monospace; chord/lyric alignment relies on equal-width cells.
    pub family: String,
    pub size: String,
    /// Columns a tab advances to when rendering.
    pub tab_width: usize,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "DejaVu Sans Mono".to_string(),
            size: "11pt".to_string(),
            tab_width: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChordConfig {
    pub color: String,
    pub bold: bool,
    /// Size of a chord suffix relative to its root, in em.
    pub suffix_scale: f64,
    /// How far the suffix is lifted above the baseline.
    pub suffix_raise: String,
}

impl Default for ChordConfig {
    fn default() -> Self {
        Self {
            color: "#1a4f8b".to_string(),
            bold: true,
            suffix_scale: 0.7,
            suffix_raise: "0.35em".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeSignatureConfig {
    pub digit_scale: f64,
    pub baseline: String,
}

impl Default for TimeSignatureConfig {
    fn default() -> Self {
        Self {
            digit_scale: 0.6,
            baseline: "0.3em".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub label_color: String,
    pub border_stroke: String,
    pub border_inset: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            label_color: "#444444".to_string(),
            border_stroke: "0.5pt".to_string(),
            border_inset: "6pt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShrinkConfig {
    pub scale: f64,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self { scale: 0.8 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// View the editor opens in.
    pub view_mode: ViewMode,
}

impl Config {
    /// The settings shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        // build.rs rejects an unparsable default file
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found.
    ///
    /// An unreadable or invalid file is logged and also falls back to defaults.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(ChartError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Self::compiled_default()
            }
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::compiled_default()
            }
        }
    }

    /// Load config from a TOML file, reporting any failure.
    pub fn try_load(path: &Path) -> Result<Self, ChartError> {
        let content = fs::read_to_string(path).map_err(|source| ChartError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ChartError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
