//! Dashboard Settings
//!
//! Read once at startup from the page location and `localStorage`.

use std::sync::OnceLock;

use log::Level;
use web_sys::window;

/// `localStorage` key overriding the log level
const LOG_LEVEL_KEY: &str = "agrifuture_log_level";

static SETTINGS: OnceLock<DashboardSettings> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Level handed to the console logger
    pub log_level: Level,
    /// Served from localhost
    pub debug_mode: bool,
    /// DOM id of the profit chart container
    pub chart_element_id: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            chart_element_id: "profit-trend-chart".to_string(),
        }
    }
}

impl DashboardSettings {
    /// Build settings from the hostname and stored overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = is_dev_host(&hostname);
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(LOG_LEVEL_KEY) {
                if let Some(level) = parse_log_level(&raw) {
                    settings.log_level = level;
                }
            }
        }

        settings
    }
}

fn is_dev_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

/// Parse a level name, case-insensitive. Unknown names give `None`.
pub fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Load settings (first call reads the environment)
pub fn init_settings() -> &'static DashboardSettings {
    SETTINGS.get_or_init(DashboardSettings::from_environment)
}

/// Current settings, defaults if `init_settings` was never called
pub fn get_settings() -> &'static DashboardSettings {
    SETTINGS.get_or_init(DashboardSettings::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(Level::Debug));
        assert_eq!(parse_log_level(" WARN "), Some(Level::Warn));
        assert_eq!(parse_log_level("Trace"), Some(Level::Trace));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.log_level, Level::Info);
        assert!(!settings.debug_mode);
        assert_eq!(settings.chart_element_id, "profit-trend-chart");
    }

    #[test]
    fn test_dev_hosts() {
        assert!(is_dev_host("localhost"));
        assert!(is_dev_host("127.0.0.1"));
        assert!(!is_dev_host("farm.example.com"));
    }
}
