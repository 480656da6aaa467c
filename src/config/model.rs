//! Configuration model: named environments and their variable overlays.

use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};

/// The parsed contents of `~/.cs/config.yaml`.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Environments keyed by name. Never absent: a missing or null
    /// `environments` section parses as an empty map.
    #[serde(deserialize_with = "null_as_default")]
    pub environments: BTreeMap<String, Environment>,
}

/// A single named environment.
///
/// ```yaml
/// glm:
///   target: "claude"
///   environment:
///     ANTHROPIC_MODEL: "glm-4.6"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Environment {
    /// Command line to run: executable followed by whitespace-separated arguments.
    #[serde(default)]
    pub target: String,

    /// Variables added to (or overriding) the inherited environment.
    #[serde(
        rename = "environment",
        default,
        deserialize_with = "null_as_default"
    )]
    pub variables: HashMap<String, String>,
}

/// Treat an explicit YAML null (`key:` or `key: ~`) like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
