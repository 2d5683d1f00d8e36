//! Configuration resolution from defaults, environment and CLI flags.

use std::collections::HashMap;

use ::config::{Environment, Map};

use crate::config::schema::Config;

/// Error type for configuration resolution.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The merged values do not fit the shape of [`Config`].
    #[error("otlpinf start up error (config): {0}")]
    Decode(#[from] ::config::ConfigError),
}

/// Values captured from the command line.
///
/// `None` (or `false` for `debug`) means the flag was not given, so the
/// environment or the default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub debug: bool,
    pub server_host: Option<String>,
    pub server_port: Option<u64>,
}

/// Namespace of the keys in the nested schema; `OTLP_INF_SERVER_PORT` is
/// accepted as an alias of `SERVER_PORT`.
pub const ENV_NAMESPACE: &str = "otlp_inf";

/// Map a dotted configuration key to its environment variable name.
///
/// `otlp_inf.server_port` becomes `OTLP_INF_SERVER_PORT`.
pub fn env_var_name(key: &str) -> String {
    key.replace('.', "_").to_uppercase()
}

/// Resolve the configuration against the process environment.
pub fn resolve(flags: FlagOverrides) -> Result<Config, ConfigError> {
    resolve_with_env(flags, std::env::vars())
}

/// Resolve the configuration against an explicit set of environment variables.
pub fn resolve_with_env<I>(flags: FlagOverrides, vars: I) -> Result<Config, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = Config::default();

    let config: Config = ::config::Config::builder()
        .set_default("debug", defaults.debug)?
        .set_default("server_host", defaults.server_host)?
        .set_default("server_port", defaults.server_port)?
        // Values stay strings; the schema parses them strictly.
        .add_source(Environment::default().source(Some(known_keys(vars))))
        .set_override_option("debug", flags.debug.then_some(true))?
        .set_override_option("server_host", flags.server_host)?
        .set_override_option("server_port", flags.server_port)?
        .build()?
        .try_deserialize()?;

    tracing::trace!(?config, "configuration resolved");
    Ok(config)
}

/// Keep the variables that name a schema key, re-keyed by the bare key.
///
/// The flat name wins when both it and the namespaced alias are set.
fn known_keys<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let vars: HashMap<String, String> = vars.into_iter().collect();

    Config::KEYS
        .iter()
        .filter_map(|key| {
            let names = [
                env_var_name(key),
                env_var_name(&format!("{ENV_NAMESPACE}.{key}")),
            ];
            names
                .iter()
                .find_map(|name| vars.get(name))
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}
