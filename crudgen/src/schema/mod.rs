//! Table schema normalization
//!
//! Turns the raw column metadata of one table into a [`TableModel`]: the primary
//! key, the timestamp columns, the fillable fields, and a documented type for every
//! column. The model is everything the renderer needs and holds no reference back
//! to the raw descriptors.

pub mod column_type;
pub mod source;

pub use column_type::{AbstractType, TargetType};
pub use source::{JsonSchemaSource, MySqlSchemaSource, SchemaSource};

use serde::{Deserialize, Serialize};

use crate::error::MissingInputError;

/// Name fragment marking a "created at" column
const CREATED_FRAGMENT: &str = "create";

/// Name fragment marking an "updated at" column
const UPDATED_FRAGMENT: &str = "update";

/// Raw metadata for one table column, as reported by the schema source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column identifier
    pub name: String,
    /// Declared type, e.g. `varchar(255)`
    #[serde(rename = "type", alias = "declared_type")]
    pub declared_type: String,
    /// Whether the column is (part of) the primary key
    #[serde(default, rename = "primary_key", alias = "is_primary_key")]
    pub is_primary_key: bool,
}

impl ColumnDescriptor {
    /// Create a non-key column descriptor
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_primary_key: false,
        }
    }

    /// Create a primary-key column descriptor
    pub fn primary_key(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            is_primary_key: true,
            ..Self::new(name, declared_type)
        }
    }
}

/// One documented column of the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Column name
    pub field: String,
    /// Normalized column kind
    pub abstract_type: AbstractType,
    /// Type written into documentation
    pub target_type: TargetType,
}

/// Normalized view of a table, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableModel {
    /// Physical table name with the configured prefix removed
    pub table_name: String,
    /// Primary key column, if any column is flagged as one
    pub primary_key: Option<String>,
    /// Column tracking creation time
    pub created_at_column: Option<String>,
    /// Column tracking modification time
    pub updated_at_column: Option<String>,
    /// Columns open to mass assignment, in table order
    pub fillable_fields: Vec<String>,
    /// Every column with its documented type, in table order
    pub attributes: Vec<Attribute>,
}

impl TableModel {
    /// Both timestamp columns, when the table defines the pair
    #[must_use]
    pub fn timestamp_columns(&self) -> Option<(&str, &str)> {
        match (&self.created_at_column, &self.updated_at_column) {
            (Some(created), Some(updated)) => Some((created.as_str(), updated.as_str())),
            _ => None,
        }
    }
}

/// How a non-key column is used by the generated model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnRole {
    CreatedAt,
    UpdatedAt,
    Fillable,
}

impl ColumnRole {
    /// Classify a non-key column by its name; `create` is checked before `update`
    fn of(name: &str) -> Self {
        if name.contains(CREATED_FRAGMENT) {
            Self::CreatedAt
        } else if name.contains(UPDATED_FRAGMENT) {
            Self::UpdatedAt
        } else {
            Self::Fillable
        }
    }
}

/// Builds [`TableModel`]s from column descriptors
pub struct SchemaNormalizer;

impl SchemaNormalizer {
    /// Normalize the columns of `table` into a [`TableModel`]
    ///
    /// Columns are processed in order. A primary-key column becomes the model's key
    /// (the last one wins if several are flagged). Other columns whose name contains
    /// `create` or `update` become the timestamp columns (again the last match wins);
    /// everything else is fillable. Every column gets an attribute entry.
    ///
    /// When `prefix` is non-empty its first occurrence anywhere in `table` is removed
    /// to form the model's table name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::schema::{ColumnDescriptor, SchemaNormalizer};
    /// let columns = vec![
    ///     ColumnDescriptor::primary_key("id", "int(10)"),
    ///     ColumnDescriptor::new("title", "varchar(255)"),
    ///     ColumnDescriptor::new("created_at", "timestamp"),
    /// ];
    /// let model = SchemaNormalizer::normalize("blog_posts", "blog_", &columns).unwrap();
    /// assert_eq!(model.table_name, "posts");
    /// assert_eq!(model.primary_key.as_deref(), Some("id"));
    /// assert_eq!(model.fillable_fields, vec!["title"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MissingInputError`] if `table` is empty.
    pub fn normalize(
        table: &str,
        prefix: &str,
        columns: &[ColumnDescriptor],
    ) -> Result<TableModel, MissingInputError> {
        if table.is_empty() {
            return Err(MissingInputError::table());
        }

        let mut model = TableModel {
            table_name: Self::strip_prefix(table, prefix),
            ..TableModel::default()
        };

        for column in columns {
            let name = &column.name;
            if column.is_primary_key {
                tracing::debug!(column = %name, "primary key");
                model.primary_key = Some(name.clone());
            } else {
                let role = ColumnRole::of(name);
                tracing::debug!(column = %name, ?role, "classified column");
                match role {
                    ColumnRole::CreatedAt => model.created_at_column = Some(name.clone()),
                    ColumnRole::UpdatedAt => model.updated_at_column = Some(name.clone()),
                    ColumnRole::Fillable => model.fillable_fields.push(name.clone()),
                }
            }

            let abstract_type = AbstractType::from_declared(&column.declared_type);
            model.attributes.push(Attribute {
                field: name.clone(),
                abstract_type,
                target_type: abstract_type.target_type(),
            });
        }

        tracing::debug!(
            table = %model.table_name,
            columns = model.attributes.len(),
            fillable = model.fillable_fields.len(),
            primary_key = ?model.primary_key,
            "normalized table"
        );

        Ok(model)
    }

    /// Remove the first occurrence of `prefix` from `table`
    ///
    /// The match is not anchored: `my_prefix_data` with `prefix_` becomes `my_data`.
    #[must_use]
    pub fn strip_prefix(table: &str, prefix: &str) -> String {
        if prefix.is_empty() {
            table.to_string()
        } else {
            table.replacen(prefix, "", 1)
        }
    }
}
