use std::io::ErrorKind;
use std::path::PathBuf;

use super::ConfigError;

/// Source of raw config text. `Ok(None)` means there is no config yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
}

pub struct FileContentConfigProvider {
    path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Io {
                path: self.path.display().to_string(),
                source: err,
            }),
        }
    }
}

/// In-memory provider, used when the config text is already at hand.
pub struct StaticContentConfigProvider {
    content: Option<String>,
}

impl StaticContentConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }
}

impl ConfigContentProvider for StaticContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.content.clone())
    }
}
