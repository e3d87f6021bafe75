// SPDX-License-Identifier: GPL-3.0-only

//! Persisted toast configuration and the runtime settings derived from it.

use std::time::Duration;

use cosmic::cosmic_config;
use cosmic::cosmic_config::{cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};
use serde::{Deserialize, Serialize};

use crate::app_settings;

/// Which user affordances may dismiss a toast before its timer runs out.
///
/// Both affordances drive the same manual-dismiss transition; this only
/// decides which of them a mounted toast responds to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DismissTrigger {
    /// Swipe down on the toast.
    #[default]
    Swipe,
    /// Press the close button rendered inside the toast.
    Button,
    /// Either of the above.
    Both,
}

impl DismissTrigger {
    /// Returns `true` if a swipe-down gesture dismisses the toast.
    pub fn accepts_swipe(self) -> bool {
        matches!(self, Self::Swipe | Self::Both)
    }

    /// Returns `true` if the toast shows a dismiss button.
    pub fn accepts_button(self) -> bool {
        matches!(self, Self::Button | Self::Both)
    }
}

/// User configuration that persists between application runs.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Auto-hide delay used when a request does not carry its own.
    pub default_duration_ms: u64,
    /// Lower bound applied to every auto-hide delay.
    pub min_duration_ms: u64,
    /// Affordances that dismiss a toast early.
    pub dismiss_trigger: DismissTrigger,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: app_settings::DEFAULT_DURATION_MS,
            min_duration_ms: app_settings::MIN_DURATION_MS,
            dismiss_trigger: DismissTrigger::default(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults for anything missing.
    pub fn load() -> Self {
        cosmic_config::Config::new(app_settings::APP_ID, Self::VERSION)
            .map(|context| match Self::get_entry(&context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for err in errors {
                        tracing::warn!("Ignoring invalid toast config entry: {:?}", err);
                    }
                    config
                }
            })
            .unwrap_or_else(|err| {
                tracing::debug!("No toast config available, using defaults: {:?}", err);
                Self::default()
            })
    }
}

/// Timing and interaction settings used by the lifecycle controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    /// Auto-hide delay for requests that leave it unspecified.
    pub default_duration: Duration,
    /// Shortest auto-hide delay; shorter requests are clamped up to it.
    pub min_duration: Duration,
    /// Length of the slide-in transition.
    pub show_animation: Duration,
    /// Length of the slide-out transition.
    pub hide_animation: Duration,
    /// Affordances that dismiss a toast early.
    pub dismiss_trigger: DismissTrigger,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ToastSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_duration: Duration::from_millis(config.default_duration_ms),
            min_duration: Duration::from_millis(config.min_duration_ms),
            show_animation: Duration::from_millis(app_settings::SHOW_ANIMATION_MS),
            hide_animation: Duration::from_millis(app_settings::HIDE_ANIMATION_MS),
            dismiss_trigger: config.dismiss_trigger,
        }
    }
}

impl ToastSettings {
    /// Resolves the auto-hide delay for a request.
    ///
    /// A missing duration falls back to `default_duration`; anything shorter
    /// than `min_duration` (including zero) is clamped up to it.
    pub fn hide_delay(&self, requested: Option<Duration>) -> Duration {
        requested
            .unwrap_or(self.default_duration)
            .max(self.min_duration)
    }

    /// Returns a copy with a different dismiss trigger.
    pub fn with_dismiss_trigger(mut self, trigger: DismissTrigger) -> Self {
        self.dismiss_trigger = trigger;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_app_settings() {
        let config = Config::default();
        assert_eq!(config.default_duration_ms, 1500);
        assert_eq!(config.min_duration_ms, app_settings::SHOW_ANIMATION_MS);
        assert_eq!(config.dismiss_trigger, DismissTrigger::Swipe);
    }

    #[test]
    fn test_config_version() {
        assert_eq!(
            Config::VERSION,
            app_settings::APP_VERSION,
            "Config::VERSION should match APP_VERSION"
        );
    }

    #[test]
    fn test_hide_delay_uses_default_when_unspecified() {
        let settings = ToastSettings::default();
        assert_eq!(settings.hide_delay(None), Duration::from_millis(1500));
        assert_eq!(
            settings.hide_delay(Some(Duration::from_secs(2))),
            Duration::from_secs(2)
        );
    }

    /// Zero-length windows would let the timer fire before the slide-in ends.
    #[test]
    fn test_hide_delay_clamps_short_durations() {
        let settings = ToastSettings::default();
        assert_eq!(
            settings.hide_delay(Some(Duration::ZERO)),
            settings.min_duration
        );
        assert_eq!(
            settings.hide_delay(Some(Duration::from_millis(1))),
            Duration::from_millis(300)
        );
        assert!(settings.hide_delay(Some(Duration::ZERO)) >= settings.show_animation);
    }

    #[test]
    fn test_settings_from_custom_config() {
        let config = Config {
            default_duration_ms: 4000,
            min_duration_ms: 500,
            dismiss_trigger: DismissTrigger::Both,
        };
        let settings = ToastSettings::from(&config);
        assert_eq!(settings.default_duration, Duration::from_secs(4));
        assert_eq!(settings.min_duration, Duration::from_millis(500));
        assert_eq!(settings.dismiss_trigger, DismissTrigger::Both);
        assert_eq!(settings.hide_animation, Duration::from_millis(400));
    }

    #[test]
    fn test_dismiss_trigger_affordances() {
        assert!(DismissTrigger::Swipe.accepts_swipe());
        assert!(!DismissTrigger::Swipe.accepts_button());
        assert!(!DismissTrigger::Button.accepts_swipe());
        assert!(DismissTrigger::Button.accepts_button());
        assert!(DismissTrigger::Both.accepts_swipe());
        assert!(DismissTrigger::Both.accepts_button());
    }

    /// Persisted values are the variant names.
    #[test]
    fn test_dismiss_trigger_serialized_names() {
        assert_eq!(serde_json::to_string(&DismissTrigger::Both).unwrap(), "\"Both\"");
        let parsed: DismissTrigger = serde_json::from_str("\"Button\"").unwrap();
        assert_eq!(parsed, DismissTrigger::Button);
        assert!(serde_json::from_str::<DismissTrigger>("\"Tap\"").is_err());
    }
}
