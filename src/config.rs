use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "ASSETEMBED_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "assetembed.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontJob {
    pub source: PathBuf,
    pub output: PathBuf,
    pub generator: String,
}

impl Default for FontJob {
    fn default() -> Self {
        Self {
            source: ["assets", "Hermit", "Hurmit Medium Nerd Font Complete.otf"].iter().collect(),
            output: ["src", "font.cpp"].iter().collect(),
            generator: "genfont".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconJob {
    pub source: PathBuf,
    pub output: PathBuf,
    pub generator: String,
    /// Show the decoded icon in a window before writing.
    pub preview: bool,
}

impl Default for IconJob {
    fn default() -> Self {
        Self {
            source: ["assets", "icon.png"].iter().collect(),
            output: ["src", "icon.cpp"].iter().collect(),
            generator: "genicon".to_string(),
            preview: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    pub font: FontJob,
    pub icon: IconJob,
}

impl EmbedConfig {
    /// Loads `.env`, then the JSON config file if any, then env overrides.
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve working directory")?;
        Self::load_with(|key| env::var(key).ok(), &cwd)
    }

    /// Same as [`EmbedConfig::load`] with variables looked up through `var`
    /// and relative paths resolved against `dir`. Process variables win over
    /// `.env` entries.
    pub fn load_with(var: impl Fn(&str) -> Option<String>, dir: &Path) -> Result<Self> {
        let dotenv = read_dotenv(&dir.join(".env"))?;
        let lookup = |key: &str| var(key).or_else(|| dotenv.get(key).cloned());

        let default_file = dir.join(DEFAULT_CONFIG_FILE);
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(&dir.join(path))?,
            None if default_file.exists() => Self::from_file(&default_file)?,
            None => Self::default(),
        };

        config.apply_overrides(&lookup);
        if let Ok(json) = serde_json::to_string(&config) {
            debug!("Effective config: {json}");
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_slice(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies `APPFONT_*` / `APPICON_*` overrides looked up through `var`.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("APPFONT_SOURCE") {
            self.font.source = v.into();
        }
        if let Some(v) = var("APPFONT_OUTPUT") {
            self.font.output = v.into();
        }
        if let Some(v) = var("APPICON_SOURCE") {
            self.icon.source = v.into();
        }
        if let Some(v) = var("APPICON_OUTPUT") {
            self.icon.output = v.into();
        }
        if let Some(v) = var("APPICON_PREVIEW") {
            let v = v.trim().to_ascii_lowercase();
            self.icon.preview = matches!(v.as_str(), "1" | "true" | "yes");
        }
    }
}

/// Parses the whole `.env` file up front so a bad line rejects all of it.
fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load {}", path.display()));
        },
    };
    let vars = iter
        .collect::<Result<HashMap<_, _>, _>>()
        .with_context(|| format!("Failed to load {}", path.display()))?;
    debug!("Loaded {} variables from {}", vars.len(), path.display());
    Ok(vars)
}
