//! crudgen library
//!
//! Generates Eloquent model classes from the column metadata of an existing table.
//!
//! The pipeline is one-directional:
//!
//! ```text
//! SchemaSource → Vec<ColumnDescriptor> → SchemaNormalizer → TableModel → TemplateRenderer → text
//! ```
//!
//! # Example
//!
//! ```
//! use crudgen::render::{static_templates::MODEL_STUB, TemplateRenderer};
//! use crudgen::schema::{ColumnDescriptor, SchemaNormalizer};
//!
//! let columns = vec![
//!     ColumnDescriptor::primary_key("id", "int(10) unsigned"),
//!     ColumnDescriptor::new("title", "varchar(255)"),
//!     ColumnDescriptor::new("created_at", "timestamp"),
//!     ColumnDescriptor::new("updated_at", "timestamp"),
//! ];
//! let model = SchemaNormalizer::normalize("posts", "", &columns)?;
//! let source = TemplateRenderer::render(MODEL_STUB, &model);
//! assert!(source.contains("protected $table = 'posts';"));
//! # Ok::<(), crudgen::error::MissingInputError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod observability;
pub mod render;
pub mod schema;
pub mod target;
pub mod template_manager;

pub use config::GeneratorConfig;
pub use error::{CrudGenError, MissingInputError};
pub use generator::{GeneratedFile, ModelGenerator, ModelRequest};
pub use render::{Placeholder, TemplateHelpers, TemplateRenderer};
pub use schema::{
    AbstractType, Attribute, ColumnDescriptor, SchemaNormalizer, SchemaSource, TableModel,
    TargetType,
};
pub use target::ClassTarget;
pub use template_manager::{TemplateManager, TemplateSource};
