//! Print the normalized model of a table

use anyhow::{Context, Result};
use clap::Args;

use super::{print_usage, SourceArgs};
use crate::error::MissingInputError;
use crate::generator::ModelGenerator;

/// Show how a table's columns are classified
#[derive(Debug, Clone, Args)]
pub struct InspectCommand {
    /// Table to read columns from
    #[arg(long)]
    pub table: Option<String>,

    /// Prefix removed from the table name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Schema source and configuration options
    #[command(flatten)]
    pub source: SourceArgs,
}

impl InspectCommand {
    /// Execute the inspect command
    ///
    /// # Errors
    ///
    /// Returns an error if the table is missing or cannot be described.
    pub async fn execute(&self) -> Result<()> {
        let Some(table) = self.table.as_deref().filter(|table| !table.is_empty()) else {
            let missing = MissingInputError::table();
            print_usage(&missing);
            return Err(missing.into());
        };

        let config = self.source.load_config()?;
        let source = self.source.open(&config).await?;
        let generator = ModelGenerator::new(config);

        let model = generator
            .inspect(source.as_ref(), table, self.prefix.as_deref())
            .await
            .with_context(|| format!("Failed to inspect table '{table}'"))?;

        println!("{}", serde_json::to_string_pretty(&model)?);
        Ok(())
    }
}
