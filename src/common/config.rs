/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // Refresh Loop
    pub const DEFAULT_REFRESH_SECS: u64 = 2;
    pub const MIN_REFRESH_SECS: u64 = 1;
    pub const MAX_REFRESH_SECS: u64 = 10;

    // Data Collection
    pub const SAMPLE_INTERVAL_MS: u64 = 1000; // Averaging window for per-thread usage

    // Usage Band Thresholds (inclusive upper bounds, percent)
    pub const LOW_THRESHOLD: f64 = 25.0;
    pub const MEDIUM_THRESHOLD: f64 = 50.0;
    pub const HIGH_THRESHOLD: f64 = 75.0;

    // Logging
    pub const DEFAULT_LOG_FILTER: &'static str = "coreview=warn";
}

/// Environment-specific configuration
pub struct EnvConfig;

impl EnvConfig {
    /// Checks a refresh interval against the accepted range and builds the
    /// user-facing message for anything outside it.
    pub fn validate_refresh_secs(rate: i64) -> Result<u64, String> {
        let range = AppConfig::MIN_REFRESH_SECS as i64..=AppConfig::MAX_REFRESH_SECS as i64;
        if range.contains(&rate) {
            Ok(rate as u64)
        } else {
            Err(format!(
                "Invalid refresh rate: {rate}. Please provide a value between {} and {} seconds.",
                AppConfig::MIN_REFRESH_SECS,
                AppConfig::MAX_REFRESH_SECS
            ))
        }
    }

    pub fn sample_interval() -> std::time::Duration {
        std::time::Duration::from_millis(AppConfig::SAMPLE_INTERVAL_MS)
    }
}

/// UI Theme configuration
pub struct ThemeConfig;

impl ThemeConfig {
    /// Foreground color of the filled run for each usage band.
    pub fn band_color(band: crate::ui::UsageBand) -> crossterm::style::Color {
        use crate::ui::UsageBand;
        use crossterm::style::Color;

        match band {
            UsageBand::Low => Color::DarkGreen,
            UsageBand::Medium => Color::DarkYellow,
            UsageBand::High => Color::Red, // bright red, reads as orange next to critical
            UsageBand::Critical => Color::DarkRed,
        }
    }
}
