//! User configuration: `config.toml`.
//!
//! ```toml
//! [user]
//! name = "Pat Doe"
//! email = "pat@example.org"
//! signature = "-- Pat"
//!
//! [help]
//! guide-url = "https://help.submit.example/guide/"
//!
//! [names]
//! given = 1
//!
//! [templates]
//! ACTORS = "${keyword}\n${syntax}"
//! ```
//!
//! Every key is optional. The file is looked up at `--config FILE`, then
//! `$N_SUBMIT_CONFIG_DIR/config.toml`, then `<platform config dir>/n-submit/
//! config.toml`. Only an explicitly named file has to exist.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use n_catalog::help::DEFAULT_GUIDE_URL;
use n_catalog::{HelpOptions, Submitter};
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "N_SUBMIT_CONFIG_DIR";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub user: UserConfig,
    pub help: HelpConfig,
    pub names: NameConfig,
    /// Template source per keyword, replacing the built-in one.
    pub templates: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct UserConfig {
    pub name: String,
    pub email: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HelpConfig {
    pub guide_url: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            guide_url: DEFAULT_GUIDE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NameConfig {
    /// Given names moved behind the comma when `--given` is not passed.
    pub given: usize,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self { given: 1 }
    }
}

impl Config {
    /// Parse configuration text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed text or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from `explicit`, or from the default location when `None`.
    ///
    /// # Errors
    ///
    /// Fails when an explicit file is missing, or any file found is
    /// unreadable or malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.is_file() => path,
                Some(path) => {
                    log::debug!("no config at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                None => {
                    log::warn!("cannot determine the config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    #[must_use]
    pub fn submitter(&self) -> Submitter {
        Submitter {
            name: self.user.name.clone(),
            email: self.user.email.clone(),
            signature: self.user.signature.clone(),
        }
    }

    #[must_use]
    pub fn help_options(&self) -> HelpOptions {
        HelpOptions {
            guide_url: self.help.guide_url.clone(),
        }
    }
}

/// `$N_SUBMIT_CONFIG_DIR/config.toml`, else the platform location.
fn default_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("n-submit").join(CONFIG_FILE))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
