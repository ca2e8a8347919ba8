mod api;
pub mod defaults;
mod validation;

use crate::api::ClientConfig;
use crate::cli::Args;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use validation::expand_env_var_in_string;

use defaults::{
    default_base_url, default_verbose, is_truthy, non_empty, API_KEY_ENV, BASE_URL_ENV,
    VERBOSE_ENV,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

/// Contents of a `.catapi.yaml` / `catapi.json` file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => FileConfig::load_from(path)?,
            None => FileConfig::load()?,
        };

        Ok(Self::resolve(args, &file_config, |name| env::var(name).ok()))
    }

    /// Merge the sources, highest priority first: CLI flags, environment,
    /// config file, defaults.
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, env_lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(args.api_key.clone())
            .or_else(|| non_empty(env_lookup(API_KEY_ENV)))
            .or_else(|| {
                non_empty(
                    file_config
                        .api
                        .key
                        .as_deref()
                        .map(expand_env_var_in_string),
                )
                // an unresolved ${VAR} is not a usable key
                .filter(|k| !k.contains("${"))
            });

        let base_url = non_empty(args.base_url.clone())
            .or_else(|| non_empty(env_lookup(BASE_URL_ENV)))
            .or_else(|| non_empty(file_config.api.base_url.clone()))
            .unwrap_or_else(default_base_url);

        let verbose = args.verbose
            || non_empty(env_lookup(VERBOSE_ENV))
                .map(|v| is_truthy(&v))
                .or(file_config.session.verbose)
                .unwrap_or_else(default_verbose);

        Config {
            api_key,
            base_url,
            verbose,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_key.clone()).with_base_url(self.base_url.clone())
    }
}

impl FileConfig {
    /// Load the first config file found in [`FileConfig::get_config_paths`],
    /// or defaults when there is none.
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".catapi.yaml"),
            PathBuf::from(".catapi.yml"),
            PathBuf::from(".catapi.json"),
        ];

        if let Some(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("catapi.yaml"));
            paths.push(config_dir.join("catapi.yml"));
            paths.push(config_dir.join("catapi.json"));
        }

        paths
    }

    pub fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("catapi"))
    }

    /// Write an example YAML config to `path`. Existing files are left alone.
    pub fn write_example(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists: {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let example = FileConfig {
            api: ApiConfig {
                key: Some(format!("${{{}}}", API_KEY_ENV)),
                base_url: Some(default_base_url()),
            },
            session: SessionConfig {
                verbose: Some(default_verbose()),
            },
        };

        let body = serde_yaml::to_string(&example).context("Failed to serialize example config")?;
        let contents = format!(
            "# catapi configuration\n# api.key may reference environment variables as ${{VAR_NAME}}\n{}",
            body
        );

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
