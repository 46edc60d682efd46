//! Schema sources
//!
//! A [`SchemaSource`] returns the ordered column descriptors of one table. The
//! generator only depends on the trait; the live MySQL source and the JSON file
//! source are the two shipped implementations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::mysql::MySqlPool;
use sqlx::FromRow;

use super::ColumnDescriptor;
use crate::error::{CrudGenError, Result};

/// Provides column metadata for a table
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Columns of `table`, in the order the database defines them
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be described.
    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;
}

/// One row of `information_schema.COLUMNS`
#[derive(Debug, Clone, FromRow)]
struct ColumnRow {
    field: String,
    column_type: String,
    column_key: String,
}

impl From<ColumnRow> for ColumnDescriptor {
    fn from(row: ColumnRow) -> Self {
        Self {
            name: row.field,
            declared_type: row.column_type,
            is_primary_key: row.column_key == "PRI",
        }
    }
}

/// Reads column metadata from a live MySQL database
pub struct MySqlSchemaSource {
    pool: MySqlPool,
}

impl MySqlSchemaSource {
    /// Connect to the database at `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(url).await?;
        Ok(Self { pool })
    }

    /// Split `schema.table` into its parts; a bare name uses the current database
    fn split_table(table: &str) -> (Option<&str>, &str) {
        match table.split_once('.') {
            Some((schema, name)) => (Some(schema), name),
            None => (None, table),
        }
    }
}

#[async_trait]
impl SchemaSource for MySqlSchemaSource {
    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let (schema, name) = Self::split_table(table);

        let rows = sqlx::query_as::<_, ColumnRow>(
            r"
            SELECT CAST(COLUMN_NAME AS CHAR) AS field,
                   CAST(COLUMN_TYPE AS CHAR) AS column_type,
                   CAST(COLUMN_KEY AS CHAR) AS column_key
            FROM information_schema.COLUMNS
            WHERE TABLE_SCHEMA = COALESCE(?, DATABASE()) AND TABLE_NAME = ?
            ORDER BY ORDINAL_POSITION
            ",
        )
        .bind(schema)
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(table, columns = rows.len(), "described table");

        if rows.is_empty() {
            return Err(CrudGenError::schema(format!("table '{table}' doesn't exist")));
        }

        Ok(rows.into_iter().map(ColumnDescriptor::from).collect())
    }
}

/// Layout of a descriptor file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptorFile {
    /// Columns of a single table
    Columns(Vec<ColumnDescriptor>),
    /// Columns keyed by table name
    Tables(BTreeMap<String, Vec<ColumnDescriptor>>),
}

/// Reads column metadata from a JSON file
///
/// The file holds either an array of column descriptors, used for any table, or an
/// object mapping table names to such arrays:
///
/// ```json
/// {
///   "users": [
///     { "name": "id", "type": "int(10) unsigned", "primary_key": true },
///     { "name": "email", "type": "varchar(255)" }
///   ]
/// }
/// ```
pub struct JsonSchemaSource {
    path: PathBuf,
}

impl JsonSchemaSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SchemaSource for JsonSchemaSource {
    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let columns = match serde_json::from_str::<DescriptorFile>(&content)? {
            DescriptorFile::Columns(columns) => columns,
            DescriptorFile::Tables(mut tables) => tables.remove(table).ok_or_else(|| {
                CrudGenError::schema(format!(
                    "table '{table}' not found in {}",
                    self.path.display()
                ))
            })?,
        };

        tracing::debug!(table, columns = columns.len(), path = %self.path.display(), "described table");
        Ok(columns)
    }
}
