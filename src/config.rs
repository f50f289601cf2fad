use std::time::Duration;

pub const APP_TITLE: &str = "TEKS Coverage Heatmap";
pub const APP_DESCRIPTION: &str =
    "Visualize TEKS standards coverage across teachers and time periods";
pub const DEFAULT_EXPORT_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(4);
pub const DEFAULT_COVERAGE_SEED: u64 = 20_240_501;

const SEED_ENV: &str = "TEKS_HEATMAP_SEED";
const EXPORT_DELAY_ENV: &str = "TEKS_HEATMAP_EXPORT_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub title: String,
    pub description: String,
    pub export_delay: Duration,
    pub toast_lifetime: Duration,
    pub coverage_seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            description: APP_DESCRIPTION.to_string(),
            export_delay: DEFAULT_EXPORT_DELAY,
            toast_lifetime: DEFAULT_TOAST_LIFETIME,
            coverage_seed: DEFAULT_COVERAGE_SEED,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparsable overrides are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(seed) = parse_override::<u64>(&lookup, SEED_ENV) {
            config.coverage_seed = seed;
        }
        if let Some(millis) = parse_override::<u64>(&lookup, EXPORT_DELAY_ENV) {
            config.export_delay = Duration::from_millis(millis);
        }
        config
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring invalid config override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_when_valid() {
        let config = DashboardConfig::from_lookup(|key| match key {
            SEED_ENV => Some("99".to_string()),
            EXPORT_DELAY_ENV => Some(" 250 ".to_string()),
            _ => None,
        });

        assert_eq!(config.coverage_seed, 99);
        assert_eq!(config.export_delay, Duration::from_millis(250));
        assert_eq!(config.title, APP_TITLE);
    }

    #[test]
    fn invalid_override_falls_back_to_default() {
        let config = DashboardConfig::from_lookup(|key| match key {
            SEED_ENV => Some("not-a-number".to_string()),
            _ => None,
        });

        assert_eq!(config, DashboardConfig::default());
    }
}
