use crate::cli::mode::ReportMode;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".speller.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Word lists loaded after the two positional dictionaries
    pub dictionaries: Vec<PathBuf>,

    /// Preset output mode; the user is prompted when unset
    pub mode: Option<ReportMode>,

    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionaries: Vec::new(),
            mode: None,
            output: None,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// One config file as written; keys left out stay `None` and do not override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub dictionaries: Option<Vec<PathBuf>>,
    pub mode: Option<ReportMode>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

/// Values given on the command line; they win over every config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dictionaries: Vec<PathBuf>,
    pub mode: Option<ReportMode>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        Ok(config.apply(overrides))
    }

    pub fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(dictionaries) = layer.dictionaries {
            self.dictionaries = dictionaries;
        }
        if layer.mode.is_some() {
            self.mode = layer.mode;
        }
        if layer.output.is_some() {
            self.output = layer.output;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        self.dictionaries.extend(overrides.dictionaries);
        if overrides.mode.is_some() {
            self.mode = overrides.mode;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "speller").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
