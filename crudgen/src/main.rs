//! crudgen CLI tool
//!
//! # Usage
//!
//! ```bash
//! crudgen model Post --table=blog_posts --prefix=blog_
//! crudgen inspect --table=blog_posts --schema-file=schema.json
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use crudgen::commands::{InspectCommand, ModelCommand};
use crudgen::observability;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate model classes from database tables", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a model class based on a table
    Model(ModelCommand),
    /// Print the normalized columns of a table as JSON
    Inspect(InspectCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    match cli.command {
        Commands::Model(command) => command.execute().await,
        Commands::Inspect(command) => command.execute().await,
    }
}
