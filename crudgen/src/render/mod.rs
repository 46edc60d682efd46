//! Template rendering
//!
//! Substitutes the placeholders of a model template with sections derived from a
//! [`TableModel`]. Each `{{name}}` token is replaced in a single left-to-right pass,
//! so text inserted for one placeholder is never scanned again.
//!
//! | Placeholder | Replacement |
//! |---|---|
//! | `{{table}}` | table name (left as-is when empty) |
//! | `{{primaryKey}}` | primary key column (left as-is when absent) |
//! | `{{timestamps}}` | `CREATED_AT`/`UPDATED_AT` constants, or `$timestamps = true` |
//! | `{{fillable}}` | one quoted column per line |
//! | `{{attribute}}` | one `'column' => 'Label',` pair per line |
//! | `{{comment}}` | one `@property type $column` tag per line |

pub mod helpers;
pub mod static_templates;

pub use helpers::TemplateHelpers;

use crate::schema::TableModel;

/// Continuation between `$fillable` entries
const FILLABLE_SEPARATOR: &str = "\n        ";

/// Continuation between attribute label entries
const ATTRIBUTE_SEPARATOR: &str = "\n            ";

/// Continuation between `@property` tags inside a doc block
const COMMENT_SEPARATOR: &str = "\n * ";

/// A named slot in a model template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{{table}}`
    Table,
    /// `{{primaryKey}}`
    PrimaryKey,
    /// `{{timestamps}}`
    Timestamps,
    /// `{{fillable}}`
    Fillable,
    /// `{{attribute}}`
    Attribute,
    /// `{{comment}}`
    Comment,
}

impl Placeholder {
    /// Every placeholder the renderer understands
    pub const ALL: [Self; 6] = [
        Self::Table,
        Self::PrimaryKey,
        Self::Timestamps,
        Self::Fillable,
        Self::Attribute,
        Self::Comment,
    ];

    /// Name between the braces
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::PrimaryKey => "primaryKey",
            Self::Timestamps => "timestamps",
            Self::Fillable => "fillable",
            Self::Attribute => "attribute",
            Self::Comment => "comment",
        }
    }

    /// Full token as written in templates
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Table => "{{table}}",
            Self::PrimaryKey => "{{primaryKey}}",
            Self::Timestamps => "{{timestamps}}",
            Self::Fillable => "{{fillable}}",
            Self::Attribute => "{{attribute}}",
            Self::Comment => "{{comment}}",
        }
    }

}

/// Renders model templates
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Render `template` for `model`
    ///
    /// Unknown `{{...}}` tokens, and the `{{table}}`/`{{primaryKey}}` tokens when the
    /// model has no value for them, are copied to the output unchanged. Rendering
    /// never fails and the output depends only on the inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::render::TemplateRenderer;
    /// # use crudgen::schema::{ColumnDescriptor, SchemaNormalizer};
    /// let columns = vec![
    ///     ColumnDescriptor::primary_key("id", "int"),
    ///     ColumnDescriptor::new("title", "varchar(80)"),
    ///     ColumnDescriptor::new("body", "text"),
    /// ];
    /// let model = SchemaNormalizer::normalize("posts", "", &columns).unwrap();
    ///
    /// let out = TemplateRenderer::render("[{{fillable}}] key={{primaryKey}}", &model);
    /// assert_eq!(out, "['title',\n        'body',] key=id");
    /// ```
    #[must_use]
    pub fn render(template: &str, model: &TableModel) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let tail = &rest[start..];

            let matched = Placeholder::ALL
                .into_iter()
                .find(|placeholder| tail.starts_with(placeholder.token()));

            rest = match matched {
                Some(placeholder) => {
                    let token = placeholder.token();
                    match Self::substitution(placeholder, model) {
                        Some(text) => output.push_str(&text),
                        None => output.push_str(token),
                    }
                    &tail[token.len()..]
                }
                None => {
                    output.push('{');
                    &tail[1..]
                }
            };
        }
        output.push_str(rest);

        output
    }

    /// Replacement text for `placeholder`, or `None` to leave the token in place
    #[must_use]
    pub fn substitution(placeholder: Placeholder, model: &TableModel) -> Option<String> {
        match placeholder {
            Placeholder::Table => {
                Some(model.table_name.clone()).filter(|table| !table.is_empty())
            }
            Placeholder::PrimaryKey => model.primary_key.clone(),
            Placeholder::Timestamps => Some(Self::timestamps_block(model)),
            Placeholder::Fillable => Some(Self::fillable_lines(model).join(FILLABLE_SEPARATOR)),
            Placeholder::Attribute => {
                Some(Self::attribute_lines(model).join(ATTRIBUTE_SEPARATOR))
            }
            Placeholder::Comment => Some(Self::comment_lines(model).join(COMMENT_SEPARATOR)),
        }
    }

    /// Timestamp declaration for the model class
    ///
    /// Names both columns when the table has the pair; otherwise turns on the
    /// conventional `created_at`/`updated_at` tracking.
    #[must_use]
    pub fn timestamps_block(model: &TableModel) -> String {
        match model.timestamp_columns() {
            Some((created, updated)) => format!(
                "/**
     * The name of the \"created at\" column.
     *
     * @var string
     */
    const CREATED_AT = {};

    /**
     * The name of the \"updated at\" column.
     *
     * @var string
     */
    const UPDATED_AT = {};",
                TemplateHelpers::quote(created),
                TemplateHelpers::quote(updated),
            ),
            None => "/**
     * Indicates if the model should be timestamped.
     *
     * @var bool
     */
    public $timestamps = true;"
                .to_string(),
        }
    }

    /// `'column',` for each fillable field
    #[must_use]
    pub fn fillable_lines(model: &TableModel) -> Vec<String> {
        model
            .fillable_fields
            .iter()
            .map(|field| format!("{},", TemplateHelpers::quote(field)))
            .collect()
    }

    /// `'column' => 'Label',` for each attribute
    #[must_use]
    pub fn attribute_lines(model: &TableModel) -> Vec<String> {
        model
            .attributes
            .iter()
            .map(|attribute| {
                format!(
                    "{} => {},",
                    TemplateHelpers::quote(&attribute.field),
                    TemplateHelpers::quote(&TemplateHelpers::humanize(&attribute.field))
                )
            })
            .collect()
    }

    /// `@property type $column` for each attribute
    #[must_use]
    pub fn comment_lines(model: &TableModel) -> Vec<String> {
        model
            .attributes
            .iter()
            .map(|attribute| format!("@property {} ${}", attribute.target_type, attribute.field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::static_templates::MODEL_STUB;
    use super::*;
    use crate::schema::{ColumnDescriptor, SchemaNormalizer};

    fn model() -> TableModel {
        let columns = vec![
            ColumnDescriptor::primary_key("id", "int(10) unsigned"),
            ColumnDescriptor::new("user_name", "varchar(64)"),
            ColumnDescriptor::new("score", "double"),
            ColumnDescriptor::new("created_at", "timestamp"),
            ColumnDescriptor::new("updated_at", "timestamp"),
        ];
        SchemaNormalizer::normalize("app_users", "app_", &columns).unwrap()
    }

    #[test]
    fn test_placeholder_tokens() {
        assert_eq!(Placeholder::PrimaryKey.token(), "{{primaryKey}}");
        for placeholder in Placeholder::ALL {
            assert_eq!(placeholder.token(), format!("{{{{{}}}}}", placeholder.name()));
        }
    }

    #[test]
    fn test_fillable_lines() {
        assert_eq!(TemplateRenderer::fillable_lines(&model()), vec!["'user_name',", "'score',"]);
        assert_eq!(
            TemplateRenderer::render("{{fillable}}", &model()),
            "'user_name',\n        'score',"
        );
    }

    #[test]
    fn test_attribute_lines() {
        assert_eq!(
            TemplateRenderer::attribute_lines(&model()),
            vec![
                "'id' => 'Id',",
                "'user_name' => 'User Name',",
                "'score' => 'Score',",
                "'created_at' => 'Created At',",
                "'updated_at' => 'Updated At',",
            ]
        );
        assert!(TemplateRenderer::render("{{attribute}}", &model())
            .starts_with("'id' => 'Id',\n            'user_name' => 'User Name',"));
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(
            TemplateRenderer::render("{{comment}}", &model()),
            "@property integer $id\n * @property string $user_name\n * @property double $score\n * @property string $created_at\n * @property string $updated_at"
        );
    }

    #[test]
    fn test_structured_timestamps() {
        let block = TemplateRenderer::render("{{timestamps}}", &model());
        assert!(block.contains("const CREATED_AT = 'created_at';"));
        assert!(block.contains("const UPDATED_AT = 'updated_at';"));
        assert!(!block.contains("$timestamps"));
    }

    #[test]
    fn test_unpaired_timestamp_uses_convention() {
        let columns = vec![
            ColumnDescriptor::primary_key("id", "int"),
            ColumnDescriptor::new("created_time", "datetime"),
            ColumnDescriptor::new("body", "text"),
        ];
        let model = SchemaNormalizer::normalize("posts", "", &columns).unwrap();

        let block = TemplateRenderer::render("{{timestamps}}", &model);
        assert!(block.contains("public $timestamps = true;"));
        assert!(!block.contains("CREATED_AT"));
    }

    #[test]
    fn test_absent_values_leave_tokens() {
        let model = TableModel::default();
        assert_eq!(
            TemplateRenderer::render("t={{table}} pk={{primaryKey}}", &model),
            "t={{table}} pk={{primaryKey}}"
        );
    }

    #[test]
    fn test_empty_model_renders_blank_sections() {
        let model = SchemaNormalizer::normalize("empty", "", &[]).unwrap();
        assert_eq!(
            TemplateRenderer::render("[{{fillable}}][{{attribute}}][{{comment}}]", &model),
            "[][][]"
        );
    }

    #[test]
    fn test_unknown_and_unterminated_tokens_are_kept() {
        let out = TemplateRenderer::render("{{other}} {{table}} {{table", &model());
        assert_eq!(out, "{{other}} users {{table");
        assert_eq!(TemplateRenderer::render("{{{table}}}", &model()), "{users}");
    }

    #[test]
    fn test_inserted_text_is_not_rescanned() {
        let columns = vec![ColumnDescriptor::new("{{table}}", "varchar(8)")];
        let model = SchemaNormalizer::normalize("odd", "", &columns).unwrap();
        assert_eq!(TemplateRenderer::render("{{fillable}}", &model), "'{{table}}',");
    }

    #[test]
    fn test_stock_template() {
        let out = TemplateRenderer::render(MODEL_STUB, &model());

        assert!(out.contains("protected $table = 'users';"));
        assert!(out.contains("protected $primaryKey = 'id';"));
        assert!(out.contains("    protected $fillable = [\n        'user_name',\n        'score',\n    ];"));
        assert!(out.contains(" * @property integer $id\n * @property string $user_name"));
        assert!(out.contains("    const CREATED_AT = 'created_at';"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = TemplateRenderer::render(MODEL_STUB, &model());
        let second = TemplateRenderer::render(MODEL_STUB, &model());
        assert_eq!(first, second);
    }
}
