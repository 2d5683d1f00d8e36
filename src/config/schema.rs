//! Configuration schema definitions.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Version embedded at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root configuration handed to the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Build version. Never read from the environment or flags.
    #[serde(skip, default = "default_version")]
    pub version: String,

    /// Enable verbose (debug level) output.
    #[serde(deserialize_with = "strict_bool")]
    pub debug: bool,

    /// Host the status API binds to.
    pub server_host: String,

    /// Port the status API binds to.
    #[serde(deserialize_with = "strict_u64")]
    pub server_port: u64,
}

impl Config {
    /// Dotted keys that can be overridden from the environment.
    pub const KEYS: [&'static str; 3] = ["debug", "server_host", "server_port"];
}

/// A typed value from defaults and flags, or raw text from the environment.
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Typed(T),
    Text(String),
}

/// Accept an unsigned integer or its plain decimal spelling. Floats, signs,
/// exponents and `nan`/`inf` are rejected rather than rounded.
fn strict_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Raw::<u64>::deserialize(deserializer)? {
        Raw::Typed(value) => Ok(value),
        Raw::Text(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => text
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid unsigned integer {text:?}: {e}"))),
        Raw::Text(text) => Err(de::Error::custom(format!(
            "invalid unsigned integer {text:?}"
        ))),
    }
}

/// Accept a boolean or one of the usual literal spellings (`1`, `t`, `true`,
/// `0`, `f`, `false` and their capitalised forms).
fn strict_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Raw::<bool>::deserialize(deserializer)? {
        Raw::Typed(value) => Ok(value),
        Raw::Text(text) => match text.as_str() {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            _ => Err(de::Error::custom(format!("invalid boolean {text:?}"))),
        },
    }
}

fn default_version() -> String {
    VERSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            server_host: "localhost".to_string(),
            server_port: 10222,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.debug);
        assert_eq!(config.server_host, "localhost");
        assert_eq!(config.server_port, 10222);
        assert_eq!(config.version, VERSION);
    }
}
