//! Configuration settings

use std::fs;
use std::path::{Path, PathBuf};

use cvdok_core::{AssemblerConfig, LabelOverrides, Locale, SectionLabels, SECTION_GAP};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up next to the record when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "cvdok.toml";

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for these settings
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Document-wide settings
    pub document: DocumentSettings,
    /// Section title replacements
    pub labels: LabelOverrides,
    /// Extra font files for the typesetter
    pub fonts: FontSettings,
}

/// Document-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocumentSettings {
    /// Language of the section titles
    pub locale: Locale,
}

/// Font settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FontSettings {
    /// Font files; relative paths are resolved against the config file
    pub paths: Vec<PathBuf>,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a file
    ///
    /// Relative font paths are rebased onto the file's directory.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings =
            Self::from_toml_str(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        settings.fonts.paths = settings
            .fonts
            .paths
            .into_iter()
            .map(|p| if p.is_relative() { base.join(p) } else { p })
            .collect();

        Ok(settings)
    }

    /// Settings for a record file
    ///
    /// An explicit path must exist. Otherwise `cvdok.toml` beside the input
    /// is used when present, and defaults when not.
    pub fn resolve(explicit: Option<&Path>, input: &Path) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let beside_input = input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME);
        if beside_input.is_file() {
            Self::load(&beside_input)
        } else {
            Ok(Self::default())
        }
    }

    /// Section titles for the configured locale, with overrides applied
    pub fn section_labels(&self) -> SectionLabels {
        SectionLabels::for_locale(self.document.locale).with_overrides(&self.labels)
    }

    /// Assembler configuration derived from these settings
    pub fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            labels: self.section_labels(),
            section_gap: SECTION_GAP,
        }
    }
}
