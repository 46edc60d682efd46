//! CLI command implementations

mod inspect;
mod model;

pub use inspect::InspectCommand;
pub use model::ModelCommand;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::config::GeneratorConfig;
use crate::error::MissingInputError;
use crate::schema::{JsonSchemaSource, MySqlSchemaSource, SchemaSource};

/// Where table metadata is read from
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Read column descriptors from a JSON file instead of the database
    #[arg(long, value_name = "FILE")]
    pub schema_file: Option<PathBuf>,

    /// Database connection string (defaults to config or `DATABASE_URL`)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Configuration file (defaults to `./crudgen.toml`)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the generator configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is invalid.
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::load_from(path),
            None => GeneratorConfig::load(),
        };
        config.context("Failed to load configuration")
    }

    /// Open the schema source selected by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if no source is configured or the database is unreachable.
    pub async fn open(&self, config: &GeneratorConfig) -> Result<Box<dyn SchemaSource>> {
        if let Some(path) = &self.schema_file {
            tracing::debug!(path = %path.display(), "using descriptor file");
            return Ok(Box::new(JsonSchemaSource::new(path)));
        }

        let url = self
            .database_url
            .clone()
            .or_else(|| config.database_url())
            .context("No schema source: pass --schema-file or set DATABASE_URL")?;

        let source = MySqlSchemaSource::connect(&url)
            .await
            .context("Failed to connect to database")?;
        Ok(Box::new(source))
    }
}

/// Print the usage line for a missing input
pub(crate) fn print_usage(missing: &MissingInputError) {
    eprintln!(
        "{} {}",
        style("Missing").red().bold(),
        style(missing.field).yellow().bold()
    );
    eprintln!("{} {}", style("Command:").cyan(), missing.usage());
}
