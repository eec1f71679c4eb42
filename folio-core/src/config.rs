//! Site configuration.
//!
//! Layered with the `config` crate, later sources winning:
//! built-in defaults, then `folio.toml` (or the file named by `FOLIO_CONFIG`),
//! then `FOLIO_*` environment variables with `__` between sections, e.g.
//! `FOLIO_CALENDAR__PASSPHRASE` or `FOLIO_SERVER__PORT`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::calendar::{Clock, DEFAULT_UPCOMING_LIMIT};
use crate::error::{FolioError, FolioResult};
use crate::gate::Gate;

static DEFAULT_CONFIG_PATH: &str = "folio.toml";
static CONFIG_PATH_VAR: &str = "FOLIO_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub server: ServerConfig,
    pub calendar: CalendarConfig,
}

/// Who the site is about and where it lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub author: String,
    pub tagline: String,
    /// Absolute base for canonical URLs
    pub base_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        SiteInfo {
            title: "Jamie Rivera".into(),
            author: "Jamie Rivera".into(),
            tagline: "Engineer, writer, occasional founder.".into(),
            base_url: "http://127.0.0.1:4096".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 4096,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Shared secret for the calendar gate; unset keeps the calendar locked
    #[serde(skip_serializing)]
    pub passphrase: Option<String>,
    pub upcoming_limit: usize,
    /// Event fixture on disk; the bundled fixture is used when unset
    pub fixture: Option<PathBuf>,
    /// IANA zone that decides what "today" is
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            passphrase: None,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            fixture: None,
            timezone: "UTC".into(),
        }
    }
}

impl std::fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<set>"))
            .field("upcoming_limit", &self.upcoming_limit)
            .field("fixture", &self.fixture)
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl CalendarConfig {
    pub fn gate(&self) -> Gate {
        Gate::new(self.passphrase.clone())
    }

    pub fn clock(&self) -> FolioResult<Clock> {
        Clock::for_zone(&self.timezone)
    }

    /// Fixture path with `~` expanded
    pub fn fixture_path(&self) -> Option<PathBuf> {
        self.fixture
            .as_ref()
            .map(|p| PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned()))
    }
}

impl SiteConfig {
    /// `$FOLIO_CONFIG`, or `folio.toml` in the working directory
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load from the default file location and the process environment.
    pub fn load() -> FolioResult<Self> {
        Self::load_from(&Self::config_path(), None)
    }

    /// Load from `path` (optional, may not exist) plus environment variables.
    ///
    /// `env` replaces the process environment when given, which keeps tests
    /// independent of whatever `FOLIO_*` variables happen to be set.
    pub fn load_from(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> FolioResult<Self> {
        let config: SiteConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| FolioError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FolioError::Config(e.to_string()))?;

        if config.calendar.upcoming_limit == 0 {
            return Err(FolioError::Config(
                "calendar.upcoming_limit must be at least 1".into(),
            ));
        }

        Ok(config)
    }

    /// Write a commented-out config file with every option at its default.
    pub fn create_default_config(path: &Path) -> FolioResult<()> {
        let defaults = SiteConfig::default();
        let contents = format!(
            "\
# folio configuration
# Every value can also be set from the environment, e.g. FOLIO_SITE__TITLE.

[site]
# title = \"{title}\"
# author = \"{author}\"
# tagline = \"{tagline}\"
# base_url = \"{base_url}\"

[server]
# host = \"{host}\"
# port = {port}

[calendar]
# Prefer FOLIO_CALENDAR__PASSPHRASE over writing the secret here.
# passphrase = \"\"
# upcoming_limit = {limit}
# fixture = \"~/calendar/events.json\"
# timezone = \"{timezone}\"
",
            title = defaults.site.title,
            author = defaults.site.author,
            tagline = defaults.site.tagline,
            base_url = defaults.site.base_url,
            host = defaults.server.host,
            port = defaults.server.port,
            limit = defaults.calendar.upcoming_limit,
            timezone = defaults.calendar.timezone,
        );

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                FolioError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FolioError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
