//! Model generation command
//!
//! ```bash
//! crudgen model Post --table=blog_posts --prefix=blog_
//! crudgen model Admin/Role --table=roles --schema-file=schema.json --stdout
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use super::{print_usage, SourceArgs};
use crate::generator::{ModelGenerator, ModelRequest};

/// Generate a model class from a table
#[derive(Debug, Clone, Args)]
pub struct ModelCommand {
    /// Class name (e.g. `Post`, `Admin/Role`)
    pub name: Option<String>,

    /// Table to read columns from
    #[arg(long)]
    pub table: Option<String>,

    /// Prefix removed from the table name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Print the generated class instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Project root the output path is relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Schema source and configuration options
    #[command(flatten)]
    pub source: SourceArgs,
}

impl ModelCommand {
    /// Execute the model command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The class name or table is missing
    /// - The schema source cannot be opened or queried
    /// - The template cannot be read
    /// - The output file cannot be written
    pub async fn execute(&self) -> Result<()> {
        let config = self.source.load_config()?;
        let request = ModelRequest {
            name: self.name.clone().unwrap_or_default(),
            table: self.table.clone().unwrap_or_default(),
            prefix: self.prefix.clone(),
        };

        if let Err(missing) = request.validate(&config) {
            print_usage(&missing);
            return Err(missing.into());
        }

        let source = self.source.open(&config).await?;
        let generator = ModelGenerator::new(config);
        let file = generator
            .generate(source.as_ref(), &request)
            .await
            .with_context(|| format!("Failed to generate model for table '{}'", request.table))?;

        if self.stdout {
            print!("{}", file.content);
            return Ok(());
        }

        let full_path = self.root.join(&file.path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&full_path, &file.content)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))?;

        println!(
            "{} {} ({})",
            style("✓").green(),
            style(full_path.display()).bold(),
            style(&file.description).dim()
        );

        Ok(())
    }
}
