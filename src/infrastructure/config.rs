use std::{fmt, path::Path, path::PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::ticker::Ticker,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Environment variables consulted, in order, when no API key is configured.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 600;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Settings for the search-augmented model call
#[derive(Clone, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// The key never reaches logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_ticker() -> String {
    Ticker::default().to_string()
}

fn default_search_delay_ms() -> u64 {
    DEFAULT_SEARCH_DELAY_MS
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default = "default_ticker")]
    pub default_ticker: String,
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            styles: styles::Styles::default(),
            gemini: GeminiConfig::default(),
            default_ticker: default_ticker(),
            search_delay_ms: default_search_delay_ms(),
        }
    }
}

impl Config {
    /// Load from the user config directory, falling back to built-in defaults.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), |name| std::env::var(name).ok())
    }

    /// Layer the first matching `config.*` file in `config_dir` over the
    /// embedded defaults. A missing file is not an error.
    pub fn load(
        config_dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        cfg.gemini.api_key = resolve_api_key(cfg.gemini.api_key.take(), env);

        if Ticker::parse(&cfg.default_ticker).is_none() {
            return Err(ConfigError::Message(String::from(
                "default_ticker must not be empty",
            )));
        }

        Ok(cfg)
    }

    /// Initial ticker; `default_ticker` is validated on load.
    pub fn initial_ticker(&self) -> Ticker {
        Ticker::parse(&self.default_ticker).unwrap_or_default()
    }
}

/// A configured key wins; otherwise the first non-blank env var.
fn resolve_api_key(
    configured: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    configured
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            API_KEY_ENV_VARS
                .iter()
                .filter_map(|name| env(name))
                .find(|key| !key.trim().is_empty())
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::Action;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "worldaware-config-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_user_file() -> color_eyre::Result<()> {
        let dir = scratch_dir("empty");
        let cfg = Config::load(&dir, no_env)?;

        assert_eq!(cfg.default_ticker, "NVDA");
        assert_eq!(cfg.search_delay_ms, DEFAULT_SEARCH_DELAY_MS);
        assert_eq!(cfg.gemini.model, DEFAULT_MODEL);
        assert_eq!(cfg.gemini.endpoint, DEFAULT_ENDPOINT);
        assert!(cfg.gemini.api_key.is_none());
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)]),
            Some(&Action::Quit)
        );
        assert!(cfg.styles.contains_key("positive"));

        Ok(())
    }

    #[test]
    fn test_user_file_overrides_defaults() -> color_eyre::Result<()> {
        let dir = scratch_dir("user");
        fs::write(
            dir.join("config.json5"),
            r#"{
                default_ticker: "tsla",
                search_delay_ms: 5,
                gemini: { api_key: "from-file", timeout_secs: 3 },
                keybindings: { "<x>": "Quit" },
            }"#,
        )?;

        let cfg = Config::load(&dir, |_| Some("from-env".into()))?;

        assert_eq!(cfg.initial_ticker().as_str(), "TSLA");
        assert_eq!(cfg.search_delay_ms, 5);
        assert_eq!(cfg.gemini.api_key.as_deref(), Some("from-file"));
        assert_eq!(cfg.gemini.timeout_secs, 3);
        assert_eq!(cfg.gemini.model, DEFAULT_MODEL);
        // user binding added, defaults kept
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)]),
            Some(&Action::Quit)
        );
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)]),
            Some(&Action::Refresh)
        );

        Ok(())
    }

    #[test]
    fn test_blank_default_ticker_is_rejected() -> color_eyre::Result<()> {
        let dir = scratch_dir("blank");
        fs::write(dir.join("config.json"), r#"{ "default_ticker": "  " }"#)?;

        assert!(Config::load(&dir, no_env).is_err());

        Ok(())
    }

    #[test]
    fn test_resolve_api_key_order() {
        let env = |name: &str| match name {
            "GEMINI_API_KEY" => Some("   ".to_string()),
            "API_KEY" => Some("fallback".to_string()),
            _ => None,
        };

        assert_eq!(
            resolve_api_key(Some("configured".into()), env).as_deref(),
            Some("configured")
        );
        assert_eq!(resolve_api_key(None, env).as_deref(), Some("fallback"));
        assert_eq!(resolve_api_key(Some("".into()), no_env), None);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let gemini = GeminiConfig {
            api_key: Some("super-secret".into()),
            ..Default::default()
        };
        let debug = format!("{gemini:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
