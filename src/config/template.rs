//! Content written to the configuration file on first run.

/// Name of the environment shipped in the default configuration.
pub const DEFAULT_ENVIRONMENT: &str = "glm";

/// Default `config.yaml` content.
///
/// Kept as literal text rather than serialized from [`super::Config`] so the
/// explanatory comments survive.
pub const DEFAULT_CONFIG_YAML: &str = r#"# cs configuration file
# Each entry under `environments` is selected with `cs <name>`.

environments:
  # GLM models served through an Anthropic-compatible endpoint
  glm:
    target: "claude"  # command to run, arguments separated by spaces
    environment:
      CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC: "1"
      ANTHROPIC_BASE_URL: "https://open.bigmodel.cn/api/anthropic"
      ANTHROPIC_AUTH_TOKEN: "your-glm-api-key"
      ANTHROPIC_MODEL: "glm-4.6"
      ANTHROPIC_SMALL_FAST_MODEL: "glm-4.5-air"
      ANTHROPIC_DEFAULT_SONNET_MODEL: "glm-4.6"
      ANTHROPIC_DEFAULT_OPUS_MODEL: "glm-4.6"
      ANTHROPIC_DEFAULT_HAIKU_MODEL: "glm-4.5-air"
      API_TIMEOUT_MS: "3000000"

# Add more environments below, for example:
#   myenv:
#     target: "node server.js"
#     environment:
#       PORT: "3000"
#       NODE_ENV: "production"
"#;
