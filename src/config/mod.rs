//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! hardcoded defaults (schema.rs)
//!     → environment variables (loader.rs, SERVER_PORT style names)
//!     → explicitly supplied CLI flags (FlagOverrides)
//!     → Config (immutable, handed to the service)
//! ```
//!
//! # Design Decisions
//! - Config is resolved once per process launch and never mutated afterwards
//! - Later layers win: flags > environment > defaults
//! - Only keys the schema knows about are looked up in the environment

pub mod loader;
pub mod schema;

pub use loader::{env_var_name, resolve, resolve_with_env, ConfigError, FlagOverrides, ENV_NAMESPACE};
pub use schema::Config;
