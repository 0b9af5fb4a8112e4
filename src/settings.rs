use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, Map};
use serde::Deserialize;

use crate::sources::{self, Source};

const SETTINGS_FILE: &str = "name_translations.toml";
const ENV_PREFIX: &str = "NAMES";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Prepended to every `/wiki/...` href to form an entry URL.
    pub base_url: String,
    pub output: PathBuf,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Overrides the built-in catalog when set.
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
}

impl Settings {
    /// Defaults, then `name_translations.toml` if present, then `NAMES_*` env vars.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(SETTINGS_FILE), None)
    }

    /// `env` replaces the process environment when given.
    fn load_from(file: &Path, env: Option<Map<String, String>>) -> Result<Self> {
        Self::from_builder(
            Config::builder()
                .add_source(File::from(file).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX).source(env)),
        )
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        builder
            .set_default("base_url", "https://en.wikipedia.org")?
            .set_default("output", "name_translations.csv")?
            .set_default(
                "user_agent",
                concat!("name_translations/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("timeout_secs", 30)?
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    /// Configured sources, or the built-in catalog.
    pub fn sources(&self) -> Vec<Source> {
        self.sources.clone().unwrap_or_else(sources::catalog)
    }
}
