//! Column type system for model generation
//!
//! Raw declared types such as `varchar(255)` or `decimal(10,2)` are reduced to
//! their leading keyword and looked up in a fixed table to get an [`AbstractType`].
//! The abstract type then maps to the coarser [`TargetType`] used in the generated
//! `@property` documentation.
//!
//! # Declared type keywords
//!
//! ```text
//! tinyint, smallint                     → small-integer
//! bit, mediumint, int, integer          → integer
//! bigint                                → big-integer
//! float, double, real                   → float
//! decimal, numeric                      → decimal
//! tinytext, mediumtext, longtext, text  → text
//! longblob, blob                        → binary
//! varchar, string, char, enum           → string
//! datetime                              → datetime
//! year, date                            → date
//! time                                  → time
//! timestamp                             → timestamp
//! anything else                         → string
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading type keyword, with an optional parameter group that is ignored
static DECLARED_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)(?:\(([^\)]+)\))?").expect("Invalid regex"));

/// Declared type keyword → abstract type
static ABSTRACT_TYPES: phf::Map<&'static str, AbstractType> = phf::phf_map! {
    "tinyint" => AbstractType::SmallInteger,
    "bit" => AbstractType::Integer,
    "smallint" => AbstractType::SmallInteger,
    "mediumint" => AbstractType::Integer,
    "int" => AbstractType::Integer,
    "integer" => AbstractType::Integer,
    "bigint" => AbstractType::BigInteger,
    "float" => AbstractType::Float,
    "double" => AbstractType::Float,
    "real" => AbstractType::Float,
    "decimal" => AbstractType::Decimal,
    "numeric" => AbstractType::Decimal,
    "tinytext" => AbstractType::Text,
    "mediumtext" => AbstractType::Text,
    "longtext" => AbstractType::Text,
    "longblob" => AbstractType::Binary,
    "blob" => AbstractType::Binary,
    "text" => AbstractType::Text,
    "varchar" => AbstractType::String,
    "string" => AbstractType::String,
    "char" => AbstractType::String,
    "datetime" => AbstractType::DateTime,
    "year" => AbstractType::Date,
    "date" => AbstractType::Date,
    "time" => AbstractType::Time,
    "timestamp" => AbstractType::Timestamp,
    "enum" => AbstractType::String,
};

/// Abstract type name → documentation type; absent entries are `string`
static TARGET_TYPES: phf::Map<&'static str, TargetType> = phf::phf_map! {
    "smallint" => TargetType::Integer,
    "integer" => TargetType::Integer,
    "bigint" => TargetType::Integer,
    "boolean" => TargetType::Boolean,
    "float" => TargetType::Double,
    "binary" => TargetType::Resource,
};

/// Logical column kind, independent of the database's type spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractType {
    /// Auto-increment primary key
    PrimaryKey,
    /// 64-bit auto-increment primary key
    BigPrimaryKey,
    /// Short string
    String,
    /// Long text
    Text,
    /// Small integer
    SmallInteger,
    /// Integer
    Integer,
    /// 64-bit integer
    BigInteger,
    /// Floating point
    Float,
    /// Fixed-point decimal
    Decimal,
    /// Date and time
    DateTime,
    /// Timestamp
    Timestamp,
    /// Time of day
    Time,
    /// Calendar date
    Date,
    /// Binary blob
    Binary,
    /// Boolean
    Boolean,
    /// Currency amount
    Money,
}

impl AbstractType {
    /// Resolve the abstract type of a raw declared type
    ///
    /// Only the leading keyword matters; it is compared case-insensitively and any
    /// parenthesized parameters are ignored. Unknown keywords fall back to `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::schema::AbstractType;
    /// assert_eq!(AbstractType::from_declared("decimal(10,2)"), AbstractType::Decimal);
    /// assert_eq!(AbstractType::from_declared("INT(11) unsigned"), AbstractType::Integer);
    /// assert_eq!(AbstractType::from_declared("geometry"), AbstractType::String);
    /// ```
    #[must_use]
    pub fn from_declared(declared_type: &str) -> Self {
        declared_keyword(declared_type)
            .and_then(|keyword| ABSTRACT_TYPES.get(keyword.as_str()).copied())
            .unwrap_or(Self::String)
    }

    /// Documentation type for this abstract type
    #[must_use]
    pub fn target_type(self) -> TargetType {
        TARGET_TYPES
            .get(self.as_str())
            .copied()
            .unwrap_or(TargetType::String)
    }

    /// Canonical name of the abstract type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryKey => "pk",
            Self::BigPrimaryKey => "bigpk",
            Self::String => "string",
            Self::Text => "text",
            Self::SmallInteger => "smallint",
            Self::Integer => "integer",
            Self::BigInteger => "bigint",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Date => "date",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::Money => "money",
        }
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type name written into generated `@property` tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
    /// `double`
    Double,
    /// `resource` (binary data)
    Resource,
    /// `string`
    String,
}

impl TargetType {
    /// Name as it appears in documentation comments
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Resource => "resource",
            Self::String => "string",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased leading keyword of a declared type, if it starts with one
fn declared_keyword(declared_type: &str) -> Option<String> {
    DECLARED_TYPE
        .captures(declared_type)
        .and_then(|captures| captures.get(1))
        .map(|keyword| keyword.as_str().to_lowercase())
}
