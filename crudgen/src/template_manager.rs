//! Model template resolution
//!
//! The bundled stock template is used unless a custom template path is configured.
//! A custom path may name the template file itself or a directory holding
//! `model.stub`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{CrudGenError, Result};
use crate::render::static_templates::MODEL_STUB;

/// File looked up inside a custom template directory
pub const MODEL_TEMPLATE_FILE: &str = "model.stub";

/// Where the model template comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Template shipped with the generator
    Bundled,
    /// Template read from disk
    Custom(PathBuf),
}

impl TemplateSource {
    /// Short description for user feedback
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled template".to_string(),
            Self::Custom(path) => path.display().to_string(),
        }
    }
}

/// Resolves and loads the model template
pub struct TemplateManager {
    source: TemplateSource,
}

impl TemplateManager {
    /// Create a template manager for the given configuration
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        let source = config
            .custom_template_path
            .as_deref()
            .map_or(TemplateSource::Bundled, |path| {
                TemplateSource::Custom(Self::resolve_path(path))
            });

        Self { source }
    }

    /// Template file for a custom path
    fn resolve_path(path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(MODEL_TEMPLATE_FILE)
        } else {
            path.to_path_buf()
        }
    }

    /// Where the template will be loaded from
    #[must_use]
    pub const fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Load the template text
    ///
    /// # Errors
    ///
    /// Returns an error if a custom template cannot be read.
    pub fn load(&self) -> Result<String> {
        match &self.source {
            TemplateSource::Bundled => Ok(MODEL_STUB.to_string()),
            TemplateSource::Custom(path) => {
                fs::read_to_string(path).map_err(|source| CrudGenError::Template {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_by_default() {
        let manager = TemplateManager::new(&GeneratorConfig::default());
        assert_eq!(manager.source(), &TemplateSource::Bundled);
        assert_eq!(manager.load().unwrap(), MODEL_STUB);
    }

    #[test]
    fn test_custom_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MODEL_TEMPLATE_FILE), "class {{table}}").unwrap();

        let config = GeneratorConfig {
            custom_template_path: Some(dir.path().to_path_buf()),
            ..GeneratorConfig::default()
        };
        let manager = TemplateManager::new(&config);

        assert_eq!(
            manager.source(),
            &TemplateSource::Custom(dir.path().join(MODEL_TEMPLATE_FILE))
        );
        assert_eq!(manager.load().unwrap(), "class {{table}}");
    }

    #[test]
    fn test_custom_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eloquent.stub");
        fs::write(&path, "{{fillable}}").unwrap();

        let config = GeneratorConfig {
            custom_template_path: Some(path.clone()),
            ..GeneratorConfig::default()
        };
        let manager = TemplateManager::new(&config);

        assert_eq!(manager.source().describe(), path.display().to_string());
        assert_eq!(manager.load().unwrap(), "{{fillable}}");
    }

    #[test]
    fn test_missing_custom_template() {
        let config = GeneratorConfig {
            custom_template_path: Some(PathBuf::from("/nonexistent/templates")),
            ..GeneratorConfig::default()
        };

        let err = TemplateManager::new(&config).load().unwrap_err();
        assert!(matches!(err, CrudGenError::Template { .. }));
        assert!(err.to_string().contains("/nonexistent/templates"));
    }
}
