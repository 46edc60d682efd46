//! Text helpers for rendered model sections

/// Helpers shared by the section builders
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Human-readable label for a column name
    ///
    /// The name is split on underscores, each segment gets an uppercase first letter,
    /// and the segments are joined with single spaces. Leading empty segments are
    /// dropped so `_id` reads `Id`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::render::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::humanize("user_first_name"), "User First Name");
    /// assert_eq!(TemplateHelpers::humanize("order_total_amount"), "Order Total Amount");
    /// assert_eq!(TemplateHelpers::humanize("userID"), "UserID");
    /// ```
    #[must_use]
    pub fn humanize(field: &str) -> String {
        field.split('_').fold(String::new(), |mut label, word| {
            if !label.is_empty() {
                label.push(' ');
            }
            label.push_str(&Self::upper_first(word));
            label
        })
    }

    /// Uppercase the first character, leaving the rest untouched
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::render::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::upper_first("name"), "Name");
    /// assert_eq!(TemplateHelpers::upper_first("iD"), "ID");
    /// assert_eq!(TemplateHelpers::upper_first(""), "");
    /// ```
    #[must_use]
    pub fn upper_first(word: &str) -> String {
        let mut chars = word.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Single-quoted string literal
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::render::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::quote("title"), "'title'");
    /// assert_eq!(TemplateHelpers::quote("it's"), r"'it\'s'");
    /// ```
    #[must_use]
    pub fn quote(value: &str) -> String {
        let escaped = value.replace('\\', r"\\").replace('\'', r"\'");
        format!("'{escaped}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(TemplateHelpers::humanize("user_first_name"), "User First Name");
        assert_eq!(TemplateHelpers::humanize("id"), "Id");
        assert_eq!(TemplateHelpers::humanize("createdAt"), "CreatedAt");
        assert_eq!(TemplateHelpers::humanize(""), "");
    }

    #[test]
    fn test_humanize_empty_segments() {
        assert_eq!(TemplateHelpers::humanize("_id"), "Id");
        assert_eq!(TemplateHelpers::humanize("user__name"), "User  Name");
        assert_eq!(TemplateHelpers::humanize("name_"), "Name ");
    }

    #[test]
    fn test_upper_first_non_ascii() {
        assert_eq!(TemplateHelpers::upper_first("été"), "Été");
    }

    #[test]
    fn test_quote_escapes_backslash() {
        assert_eq!(TemplateHelpers::quote(r"a\b"), r"'a\\b'");
    }
}
