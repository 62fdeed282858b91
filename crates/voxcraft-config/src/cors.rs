use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
///
/// Browsers calling the API from the web studio need this enabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed request headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Headers the browser may read from responses
    #[serde(default)]
    pub expose_headers: Vec<String>,
    /// Allow credentials
    #[serde(default)]
    pub credentials: bool,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either a wildcard "*" or an explicit list of values
///
/// A list containing "*" collapses to `Any`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAnyOrArray")]
pub enum AnyOrArray {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnyOrArray {
    One(String),
    Many(Vec<String>),
}

impl From<RawAnyOrArray> for AnyOrArray {
    fn from(raw: RawAnyOrArray) -> Self {
        let values = match raw {
            RawAnyOrArray::One(value) => vec![value],
            RawAnyOrArray::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Self::Any
        } else {
            Self::List(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_string() {
        let config: CorsConfig = toml::from_str(r#"origins = "*""#).unwrap();
        assert_eq!(config.origins, AnyOrArray::Any);
    }

    #[test]
    fn single_origin_string() {
        let config: CorsConfig = toml::from_str(r#"origins = "https://studio.voxcraft.dev""#).unwrap();
        assert_eq!(
            config.origins,
            AnyOrArray::List(vec!["https://studio.voxcraft.dev".to_string()])
        );
    }

    #[test]
    fn list_with_wildcard_collapses() {
        let config: CorsConfig = toml::from_str(r#"headers = ["content-type", "*"]"#).unwrap();
        assert_eq!(config.headers, AnyOrArray::Any);
    }

    #[test]
    fn defaults_allow_everything() {
        let config: CorsConfig = toml::from_str("").unwrap();
        assert_eq!(config.origins, AnyOrArray::Any);
        assert_eq!(config.methods, AnyOrArray::Any);
        assert!(config.max_age_duration().is_none());
    }
}
