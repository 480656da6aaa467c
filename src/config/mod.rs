//! Configuration store for cs.
//!
//! Locates `~/.cs/config.yaml`, writes a commented default on first run, and
//! parses the file into [`Config`]. The file is read fresh on every
//! invocation and never written back once it exists.

mod model;
mod operations;
pub mod template;


// Re-export public API
pub use model::{Config, Environment};
pub use operations::{config_path_in, ensure_default_config, resolve_config_path};
