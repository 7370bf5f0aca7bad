use std::path::PathBuf;

use ::config::{Environment, File, FileFormat, builder::DefaultState};
use eyre::{Result, WrapErr};
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

const CONFIG_FILE: &str = "opsboard";
const ENV_PREFIX: &str = "OPSBOARD";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Base URL of the remote workflow API, e.g. `https://automation.example.com/v1`.
    pub workflow_api_url: Url,
    pub workflow_api_key: SecretString,
    /// JSON file of user records to seed the roster with.
    #[serde(default)]
    pub roster_seed: Option<PathBuf>,
}

impl Config {
    /// Reads `opsboard.toml` from the working directory if present, then
    /// `OPSBOARD_*` environment variables on top.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            ::config::Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Self::from_builder(
            ::config::Config::builder().add_source(File::from_str(contents, FileFormat::Toml)),
        )
    }

    fn from_builder(builder: ::config::ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .wrap_err("failed to read configuration")?
            .try_deserialize()
            .wrap_err("invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn parses_toml() {
        let config = Config::from_toml(
            r#"
            workflow_api_url = "https://automation.example.com/v1"
            workflow_api_key = "sk-test"
            roster_seed = "seed/users.json"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.workflow_api_url.as_str(),
            "https://automation.example.com/v1"
        );
        assert_eq!(config.workflow_api_key.expose_secret(), "sk-test");
        assert_eq!(config.roster_seed, Some(PathBuf::from("seed/users.json")));
    }

    #[test]
    fn roster_seed_is_optional() {
        let config = Config::from_toml(
            r#"
            workflow_api_url = "http://localhost:9000"
            workflow_api_key = "sk-test"
            "#,
        )
        .unwrap();

        assert!(config.roster_seed.is_none());
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let error = Config::from_toml(r#"workflow_api_url = "http://localhost:9000""#).unwrap_err();
        assert!(format!("{error:?}").contains("workflow_api_key"));
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let config = Config::from_toml(
            r#"
            workflow_api_url = "http://localhost:9000"
            workflow_api_key = "sk-very-secret"
            "#,
        )
        .unwrap();

        assert!(!format!("{config:?}").contains("sk-very-secret"));
    }
}
