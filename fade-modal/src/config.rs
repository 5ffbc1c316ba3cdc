//! Configuration for fade-modal hosts.
//!
//! Configuration is loaded from a TOML file and provides the modal defaults
//! (title, labels, timing) plus the window and logging settings used by the
//! demo host. Every section is optional and falls back to its defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::filter::Directive;

use crate::error::ConfigError;
use crate::presentation::{DEFAULT_DISMISS_LABEL, DEFAULT_TITLE};
use crate::visibility::{FadeDuration, DEFAULT_ENTRANCE_DELAY_MS, DEFAULT_FADE_MS};

/// Top-level configuration loaded from `modal.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal: ModalSettings,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Defaults for `Modal` props. Provide it as Dioxus context to change the
/// entrance delay of every modal below it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalSettings {
    pub title: String,
    pub dismiss_label: String,
    pub fade_duration_ms: u64,
    pub entrance_delay_ms: u64,
    pub max_width: Option<u32>,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    /// Default level for every target.
    pub level: String,
    /// Per-target levels, e.g. `"fade_modal::visibility" = "trace"`.
    pub targets: BTreeMap<String, String>,
    /// Drop info and below from the webview stack (`wry`, `tao`,
    /// `dioxus_desktop`).
    pub quiet_webview: bool,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            dismiss_label: DEFAULT_DISMISS_LABEL.to_string(),
            fade_duration_ms: DEFAULT_FADE_MS,
            entrance_delay_ms: DEFAULT_ENTRANCE_DELAY_MS,
            max_width: None,
        }
    }
}

impl ModalSettings {
    #[must_use]
    pub fn fade(&self) -> FadeDuration {
        FadeDuration::from_millis(self.fade_duration_ms)
    }

    #[must_use]
    pub fn entrance_delay(&self) -> Duration {
        Duration::from_millis(self.entrance_delay_ms)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "fade-modal".to_string(),
            width: 960.0,
            height: 720.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            level: "info".to_string(),
            targets: BTreeMap::new(),
            quiet_webview: true,
        }
    }
}

impl ModalConfig {
    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str::<ModalConfig>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the modal cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modal.max_width == Some(0) {
            return Err(ConfigError::Invalid {
                field: "modal.max_width",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.modal.fade_duration_ms > 0
            && self.modal.entrance_delay_ms >= self.modal.fade_duration_ms
        {
            return Err(ConfigError::Invalid {
                field: "modal.entrance_delay_ms",
                reason: format!(
                    "must be shorter than fade_duration_ms ({})",
                    self.modal.fade_duration_ms
                ),
            });
        }
        if let Err(err) = self.logging.level.parse::<Directive>() {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: err.to_string(),
            });
        }
        for (target, level) in &self.logging.targets {
            if let Err(err) = format!("{target}={level}").parse::<Directive>() {
                return Err(ConfigError::Invalid {
                    field: "logging.targets",
                    reason: format!("`{target}`: {err}"),
                });
            }
        }
        Ok(())
    }

    /// Set the default modal title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.modal.title = title.into();
        self
    }

    /// Set the default dismiss button label.
    #[must_use]
    pub fn with_dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.modal.dismiss_label = label.into();
        self
    }

    /// Set the fade duration in milliseconds.
    #[must_use]
    pub fn with_fade_duration_ms(mut self, millis: u64) -> Self {
        self.modal.fade_duration_ms = millis;
        self
    }

    /// Set the content box width cap in pixels.
    #[must_use]
    pub fn with_max_width(mut self, width: u32) -> Self {
        self.modal.max_width = Some(width);
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the level of one tracing target (e.g. `fade_modal::visibility`).
    #[must_use]
    pub fn with_target_level(
        mut self,
        target: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        self.logging.targets.insert(target.into(), level.into());
        self
    }
}
