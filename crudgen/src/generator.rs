//! Model generator orchestrator
//!
//! Coordinates one generation run: validate the inputs, describe the table,
//! normalize its columns, load the template, render it, and fill in the class
//! namespace and name. The result is a [`GeneratedFile`]; writing it is left to
//! the caller.

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::{MissingInputError, Result};
use crate::render::TemplateRenderer;
use crate::schema::{ColumnDescriptor, SchemaNormalizer, SchemaSource, TableModel};
use crate::target::ClassTarget;
use crate::template_manager::TemplateManager;

/// What to generate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRequest {
    /// Class name, optionally namespaced (`Post`, `Admin/Role`)
    pub name: String,
    /// Physical table name
    pub table: String,
    /// Table prefix; overrides the configured one when set
    pub prefix: Option<String>,
}

impl ModelRequest {
    /// Create a request without a prefix override
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            prefix: None,
        }
    }

    /// Set the prefix override
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Check that the class name and table are present
    ///
    /// # Errors
    ///
    /// Returns [`MissingInputError`] naming the first absent input.
    pub fn validate(&self, config: &GeneratorConfig) -> Result<ClassTarget, MissingInputError> {
        let target = ClassTarget::resolve(&self.name, config)?;
        if self.table.is_empty() {
            return Err(MissingInputError::table());
        }
        Ok(target)
    }
}

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Generates model classes from table metadata
pub struct ModelGenerator {
    config: GeneratorConfig,
    templates: TemplateManager,
}

impl ModelGenerator {
    /// Create a generator with the given configuration
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let templates = TemplateManager::new(&config);
        Self { config, templates }
    }

    /// Describe and normalize a table without rendering anything
    ///
    /// # Errors
    ///
    /// Returns an error if the table name is empty or the source fails.
    pub async fn inspect(
        &self,
        source: &dyn SchemaSource,
        table: &str,
        prefix: Option<&str>,
    ) -> Result<TableModel> {
        if table.is_empty() {
            return Err(MissingInputError::table().into());
        }
        let columns = source.describe(table).await?;
        Ok(SchemaNormalizer::normalize(
            table,
            self.config.prefix(prefix),
            &columns,
        )?)
    }

    /// Generate the model file for `request`, reading columns from `source`
    ///
    /// Both the class name and the table are checked before the source is queried.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The class name or table is empty
    /// - The schema source cannot describe the table
    /// - A custom template cannot be read
    pub async fn generate(
        &self,
        source: &dyn SchemaSource,
        request: &ModelRequest,
    ) -> Result<GeneratedFile> {
        request.validate(&self.config)?;

        let columns = source.describe(&request.table).await?;
        self.generate_from_columns(request, &columns)
    }

    /// Generate the model file for `request` from already-fetched columns
    ///
    /// # Errors
    ///
    /// Returns an error if the class name or table is empty, or if a custom
    /// template cannot be read.
    pub fn generate_from_columns(
        &self,
        request: &ModelRequest,
        columns: &[ColumnDescriptor],
    ) -> Result<GeneratedFile> {
        let target = request.validate(&self.config)?;
        let model = SchemaNormalizer::normalize(
            &request.table,
            self.config.prefix(request.prefix.as_deref()),
            columns,
        )?;
        let template = self.templates.load()?;

        tracing::info!(
            class = target.qualified_name(),
            table = %model.table_name,
            columns = columns.len(),
            template = %self.templates.source().describe(),
            "rendering model"
        );

        let rendered = TemplateRenderer::render(&template, &model);
        let content = target.apply(&rendered);

        Ok(GeneratedFile {
            path: target.path().clone(),
            content,
            description: format!(
                "model {} for table {}",
                target.qualified_name(),
                request.table
            ),
        })
    }
}
