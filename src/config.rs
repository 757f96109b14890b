//! Layered configuration: defaults, an optional JSON file, then `GEMINI_*`
//! environment variables.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{client::DEFAULT_BASE_URL, error::Error, models::DEFAULT_MODEL};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "GEMINI_";

const CONFIG_DIR: &str = "gemini-vision";
const CONFIG_FILE: &str = "config.json";

/// Settings for talking to the Gemini API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key (`GEMINI_API_KEY`)
    pub api_key: Option<String>,
    /// Model identifier (`GEMINI_MODEL`)
    pub model: String,
    /// API host (`GEMINI_BASE_URL`)
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the user config file and the environment.
    ///
    /// The file lives at `<config dir>/gemini-vision/config.json` and is
    /// optional. Environment variables override it.
    pub fn load() -> Result<Self, Error> {
        let figment = match Self::default_path() {
            Some(path) => Self::figment_from(path),
            None => Self::figment_from_env(),
        };
        Ok(figment.extract()?)
    }

    /// Builds the provider stack for an explicit config file.
    pub fn figment_from(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file(path.as_ref()))
            .merge(env_layer())
    }

    fn figment_from_env() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(env_layer())
    }

    /// Location of the user config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Returns the API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the key is unset or blank.
    pub fn api_key(&self) -> Result<&str, Error> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::configuration(format!("{API_KEY_ENV} environment variable must be set"))
            })
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// `GEMINI_*` variables as plain strings.
///
/// `Env` parses values, which would turn a numeric key into an integer and
/// `true` into a bool; every setting here is text.
fn env_layer() -> Serialized<BTreeMap<String, String>> {
    let values = Env::prefixed(ENV_PREFIX)
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect::<BTreeMap<_, _>>();
    Serialized::defaults(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "");
            let config: Config =
                Config::figment_from(jail.directory().join("none.json")).extract()?;
            assert_eq!(config.model, "gemini-2.0-flash");
            assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
            Ok(())
        });
    }

    #[test]
    fn reads_api_key_and_model_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "test_key");
            jail.set_env("GEMINI_MODEL", "gemini-1.5-pro");
            let config: Config =
                Config::figment_from(jail.directory().join("none.json")).extract()?;
            assert_eq!(config.api_key().unwrap(), "test_key");
            assert_eq!(config.model, "gemini-1.5-pro");
            Ok(())
        });
    }

    #[test]
    fn env_values_stay_text() {
        Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "1234567890");
            jail.set_env("GEMINI_MODEL", "true");
            jail.set_env("GEMINI_BASE_URL", "007");
            let config: Config =
                Config::figment_from(jail.directory().join("none.json")).extract()?;
            assert_eq!(config.api_key().unwrap(), "1234567890");
            assert_eq!(config.model, "true");
            assert_eq!(config.base_url, "007");
            Ok(())
        });
    }

    #[test]
    fn load_without_key_is_configuration_error() {
        Jail::expect_with(|jail| {
            let home = jail.directory().to_path_buf();
            jail.set_env("HOME", home.display());
            jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
            jail.set_env("GEMINI_API_KEY", "");
            let config = Config::load().expect("config loads");
            assert!(matches!(config.api_key(), Err(Error::Configuration(_))));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.json",
                r#"{ "api_key": "from-file", "model": "gemini-1.5-flash" }"#,
            )?;
            jail.set_env("GEMINI_API_KEY", "from-env");
            let config: Config = Config::figment_from("config.json").extract()?;
            assert_eq!(config.api_key().unwrap(), "from-env");
            assert_eq!(config.model, "gemini-1.5-flash");
            Ok(())
        });
    }

    #[test]
    fn missing_api_key_is_configuration_error() {
        let err = Config::default().api_key().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err
            .to_string()
            .contains("GEMINI_API_KEY environment variable must be set"));
    }

    #[test]
    fn blank_api_key_is_configuration_error() {
        for key in ["", "   "] {
            let config = Config::default().with_api_key(key);
            assert!(matches!(config.api_key(), Err(Error::Configuration(_))));
        }
    }
}
