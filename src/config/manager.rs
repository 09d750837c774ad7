use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, LanguageSpec, dedupe_languages, default_languages};
use crate::ui::Style;

/// Settings in the `[phrase]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseConfig {
    /// Translate endpoint, defaults to Glosbe's public API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/phrase/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub phrase: PhraseConfig,
    /// Languages offered in the pair picker, in picker order.
    #[serde(default)]
    pub langs: Vec<LanguageSpec>,
}

/// Configuration after merging CLI arguments, the config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    /// Distinct languages; never contains the same short code twice.
    pub languages: Vec<LanguageSpec>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    /// Replaces the configured list when non-empty.
    pub languages: Vec<LanguageSpec>,
}

/// Resolves configuration: CLI options, then the config file, then defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.phrase.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    if reqwest::Url::parse(&endpoint).is_err() {
        bail!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Fix it via:\n  \
             - CLI option: phrase --endpoint <url>\n  \
             - Config file: [phrase] endpoint in ~/.config/phrase/config.toml"
        );
    }

    let languages = if !options.languages.is_empty() {
        options.languages.clone()
    } else if !config_file.langs.is_empty() {
        config_file.langs.clone()
    } else {
        default_languages()
    };

    for lang in &languages {
        lang.validate()
            .context("Invalid language in configuration")?;
    }

    let (languages, dropped) = dedupe_languages(&languages);
    if !dropped.is_empty() {
        crate::warn!(
            "{} Ignoring repeated language codes: {}",
            Style::warning("Warning:"),
            dropped.join(", ")
        );
    }

    Ok(ResolvedConfig {
        endpoint,
        languages,
    })
}

/// Loads the config file from its default location and resolves it.
pub fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    resolve_config(options, &config_file)
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Config lives at `$XDG_CONFIG_HOME/phrase/config.toml`, falling back
    /// to `~/.config/phrase/config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Like `load`, but a missing file yields the default configuration.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
