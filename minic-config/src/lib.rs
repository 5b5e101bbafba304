use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "minic.toml";

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("config file {0} already exists")]
    AlreadyExists(PathBuf),
}

/// How declaration lines are told apart from uses during semantic analysis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationMode {
    /// A line whose trimmed text starts with a type keyword is never checked for uses.
    #[default]
    LinePrefix,
    /// Identifiers are visited left to right and a declared name is never checked as a use.
    Positional,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub declaration_mode: DeclarationMode,
    pub show_locations: bool,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            declaration_mode: raw_config.declaration_mode.unwrap_or_default(),
            show_locations: raw_config.show_locations.unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn to_toml(&self) -> Result<String> {
        let raw_config = RawConfig {
            declaration_mode: Some(self.declaration_mode),
            show_locations: Some(self.show_locations),
        };

        Ok(toml::to_string(&raw_config)?)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawConfig {
    declaration_mode: Option<DeclarationMode>,
    show_locations: Option<bool>,
}

fn convert_from_toml(config: &str, path: &Path) -> Result<Config> {
    let raw_config: RawConfig = toml::from_str(config).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw_config.into())
}

/// Reads a config file at an explicit path. The file must exist.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    convert_from_toml(&config, path)
}

/// Looks for `minic.toml` in `root_dir`, falling back to the defaults when there is none.
pub fn load_config<P: AsRef<Path>>(root_dir: Option<P>) -> Result<Config> {
    let Some(root_dir) = root_dir else { return Ok(Config::default()) };

    let config_path = root_dir.as_ref().join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(Config::default());
    }

    load_config_file(config_path)
}

/// Writes the default config into `root_dir` and returns where it was written.
pub fn write_default_config<P: AsRef<Path>>(root_dir: P) -> Result<PathBuf> {
    let config_path = root_dir.as_ref().join(CONFIG_FILE);
    if config_path.exists() {
        return Err(Error::AlreadyExists(config_path));
    }

    let content = Config::default().to_toml()?;
    std::fs::write(&config_path, content).map_err(|source| Error::Write {
        path: config_path.clone(),
        source,
    })?;

    Ok(config_path)
}
