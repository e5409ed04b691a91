//! Runtime configuration read from environment variables.
//!
//! The binary loads `.env` with `dotenv` first, so values may come from
//! either the process environment or that file.

/// Report format selector.
pub const ENV_FORMAT: &str = "IPV4_INSPECT_FORMAT";
/// Optional `addr/cidr` network every address is tested against.
pub const ENV_NETWORK: &str = "IPV4_INSPECT_NETWORK";
/// `false` hides the `/cidr` suffix in rendered addresses.
pub const ENV_SHOW_MASK: &str = "IPV4_INSPECT_SHOW_MASK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub network: Option<String>,
    pub show_mask: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            network: None,
            show_mask: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unknown values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = match format.trim().to_ascii_lowercase().as_str() {
                "json" => OutputFormat::Json,
                "text" | "" => OutputFormat::Text,
                other => {
                    log::warn!("Unknown {ENV_FORMAT}={other}, using text");
                    OutputFormat::Text
                }
            };
        }

        config.network = lookup(ENV_NETWORK)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        if let Some(show) = lookup(ENV_SHOW_MASK) {
            match show.trim().parse::<bool>() {
                Ok(show) => config.show_mask = show,
                Err(_) => log::warn!("Unknown {ENV_SHOW_MASK}={show}, showing masks"),
            }
        }

        log::debug!("config: {config:?}");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(config.show_mask);
    }

    #[test]
    fn test_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FORMAT, "JSON"),
            (ENV_NETWORK, " 10.0.0.0/8 "),
            (ENV_SHOW_MASK, "false"),
        ]));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.network.as_deref(), Some("10.0.0.0/8"));
        assert!(!config.show_mask);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FORMAT, "yaml"),
            (ENV_NETWORK, ""),
            (ENV_SHOW_MASK, "maybe"),
        ]));
        assert_eq!(config, Config::default());
    }
}
