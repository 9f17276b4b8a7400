use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wikidown_engine::{Plugin, RenderEnv, RendererBuilder, WikilinkStyle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Renderer settings read from `~/.config/wikidown/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wikilink_style: WikilinkStyle,
    pub disabled_plugins: Vec<Plugin>,
    /// Number every highlighted code block, not only `lang=` ones.
    pub line_numbers: bool,
    /// Prepended to page paths before `./` links are resolved against them.
    pub page_url_prefix: String,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Environment variables in the prefix, e.g. "$WIKI_ROOT/docs"
        config.page_url_prefix =
            Self::expand(&config.page_url_prefix).unwrap_or(config.page_url_prefix);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/wikidown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Every plugin except the disabled ones, plus the line-number setting.
    pub fn renderer_builder(&self) -> RendererBuilder {
        let builder = RendererBuilder::new().line_numbers(self.line_numbers);
        self.disabled_plugins
            .iter()
            .fold(builder, |builder, plugin| builder.without_plugin(*plugin))
    }

    /// Environment for rendering `page`, e.g. `Docs/Page`.
    pub fn render_env(&self, page: &str) -> RenderEnv {
        let prefix = self.page_url_prefix.trim_end_matches('/');
        let page = page.trim_start_matches('/');
        RenderEnv::default()
            .with_wikilink_style(self.wikilink_style)
            .with_page_url(format!("{prefix}/{page}"))
    }

    fn expand(value: &str) -> Option<String> {
        match shellexpand::env(value) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}
