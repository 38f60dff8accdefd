use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Tunables for the scroll choreography and the contact block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Pin span as a multiple of the viewport height.
    pub pin_span_ratio: f64,
    /// Where the look-ahead point sits inside the viewport, from the top.
    pub look_ahead_fraction: f64,
    pub nav_reveal_offset: f64,
    /// Seconds the smoothed playhead needs to catch up with the scrollbar.
    pub scrub_lag_secs: f64,
    /// Viewport fraction a reveal section's top must cross to play.
    pub reveal_start_fraction: f64,
    pub contact_email: String,
    pub support_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pin_span_ratio: 1.3,
            look_ahead_fraction: 1.0 / 3.0,
            nav_reveal_offset: 100.0,
            scrub_lag_secs: 0.6,
            reveal_start_fraction: 0.8,
            contact_email: "hello@xertai.io".to_string(),
            support_email: "support@xertai.io".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config compiled into the binary, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring embedded site config: {}", err);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f64, bool); 5] = [
            ("pin_span_ratio", self.pin_span_ratio, self.pin_span_ratio > 0.0),
            (
                "look_ahead_fraction",
                self.look_ahead_fraction,
                (0.0..=1.0).contains(&self.look_ahead_fraction),
            ),
            ("nav_reveal_offset", self.nav_reveal_offset, self.nav_reveal_offset >= 0.0),
            ("scrub_lag_secs", self.scrub_lag_secs, self.scrub_lag_secs >= 0.0),
            (
                "reveal_start_fraction",
                self.reveal_start_fraction,
                (0.0..=1.0).contains(&self.reveal_start_fraction),
            ),
        ];
        // NaN fails every comparison above, so it lands here too.
        for (field, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = SiteConfig::from_json(EMBEDDED).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "pin_span_ratio": 2.0 }"#).unwrap();
        assert_eq!(config.pin_span_ratio, 2.0);
        assert_eq!(config.nav_reveal_offset, 100.0);
        assert_eq!(config.contact_email, "hello@xertai.io");
    }

    #[test]
    fn zero_span_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "pin_span_ratio": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { field: "pin_span_ratio", .. }
        ));
    }

    #[test]
    fn look_ahead_outside_viewport_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "look_ahead_fraction": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { field: "look_ahead_fraction", .. }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ pin_span_ratio: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
