//! # altwise Config
//!
//! Builds the [`ClientConfig`](altwise_protocols::ClientConfig) handed to the
//! suggestion pipeline. Values are merged per key: explicit overrides win,
//! then the TOML file, then the process environment.

mod error;
mod loader;
mod resolve;
mod schema;

pub use error::ConfigError;
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use resolve::{ConfigOverrides, EnvSource, ProcessEnv, ResolvedConfig, resolve};
pub use schema::*;
