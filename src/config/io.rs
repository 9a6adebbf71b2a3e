use super::models::ConsentOptions;
use super::tables::ConfigTables;
use super::validation::ValidationError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from reading or writing a consent configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid consent options: {0}")]
    Invalid(#[from] ValidationError),
}

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> ConsentOptions {
    match read_config(path) {
        Ok(options) => options,
        Err(err) => {
            warn!(path = %path.display(), "Falling back to default consent options: {err}");
            ConsentOptions::default()
        }
    }
}

/// Read, parse and validate a configuration file.
pub fn read_config(path: &Path) -> Result<ConsentOptions, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Loaded consent config");
    let options = parse_config(&contents)?;
    options.validate()?;
    Ok(options)
}

/// Parse the sectioned TOML layout. Missing sections and keys take their
/// default values. No validation happens here.
pub fn parse_config(contents: &str) -> Result<ConsentOptions, ConfigError> {
    let tables: ConfigTables = toml::from_str(contents)?;
    let options = ConsentOptions::from(tables);
    debug!(
        revision = options.revision,
        categories = options.categories.len(),
        "Parsed consent options"
    );
    Ok(options)
}

pub fn serialize_config(options: &ConsentOptions) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(&ConfigTables::from(options))?)
}

pub fn save_config(path: &Path, options: &ConsentOptions) -> Result<(), ConfigError> {
    let contents = serialize_config(options)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Saved consent config");
    Ok(())
}
