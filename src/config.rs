const DEFAULT_LINE_ID: &str = "district";
const DEFAULT_BUCKET: &str = "tfl-arrivals-bucket";
const DEFAULT_REGION: &str = "eu-west-2";
const DEFAULT_API_BASE: &str = "https://api.tfl.gov.uk";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub line_id: String,
    pub bucket: String,
    pub region: String,
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_id: DEFAULT_LINE_ID.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            region: DEFAULT_REGION.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Reads overrides from `LINE_ID`, `BUCKET`, `AWS_REGION` and `TFL_API_BASE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |name: &str, default: String| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            line_id: var("LINE_ID", defaults.line_id),
            bucket: var("BUCKET", defaults.bucket),
            region: var("AWS_REGION", defaults.region),
            api_base: var("TFL_API_BASE", defaults.api_base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.line_id, "district");
        assert_eq!(config.bucket, "tfl-arrivals-bucket");
        assert_eq!(config.region, "eu-west-2");
        assert_eq!(config.api_base, "https://api.tfl.gov.uk");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LINE_ID", "victoria"),
            ("BUCKET", "snapshots"),
            ("TFL_API_BASE", "http://127.0.0.1:9000"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.line_id, "victoria");
        assert_eq!(config.bucket, "snapshots");
        assert_eq!(config.region, "eu-west-2");
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(|name| match name {
            "LINE_ID" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.line_id, "district");
    }
}
