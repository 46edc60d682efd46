//! Generated class location
//!
//! Resolves the user-supplied class name into a fully qualified class, the file it
//! is written to, and the namespace/class tokens in the rendered template.
//!
//! ```text
//! name "Post",        namespace override none         → App\Post          app/Post.php
//! name "Post",        namespace override App\Models   → App\Models\Post   app/Models/Post.php
//! name "Admin/Role",  namespace override none         → App\Admin\Role    app/Admin/Role.php
//! name "App\Tag",     any override                    → App\Tag           app/Tag.php
//! name "Appointment", namespace override none         → App\Appointment   app/Appointment.php
//! ```

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::MissingInputError;

/// Namespace separator
const SEPARATOR: char = '\\';

/// Template token replaced with the class namespace
pub const NAMESPACE_TOKEN: &str = "DummyNamespace";

/// Template token replaced with the root namespace
pub const ROOT_NAMESPACE_TOKEN: &str = "DummyRootNamespace";

/// Template token replaced with the bare class name
pub const CLASS_TOKEN: &str = "DummyClass";

/// Fully qualified class and its output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTarget {
    qualified: String,
    root_namespace: String,
    path: PathBuf,
}

impl ClassTarget {
    /// Resolve a class name against the configured namespaces
    ///
    /// # Errors
    ///
    /// Returns [`MissingInputError`] if `name` is empty or only separators.
    pub fn resolve(name: &str, config: &GeneratorConfig) -> Result<Self, MissingInputError> {
        let name = name
            .trim_start_matches(['/', SEPARATOR])
            .replace('/', "\\");
        if name.trim_matches(SEPARATOR).is_empty() {
            return Err(MissingInputError::name());
        }

        let root = config.root_namespace.trim_matches(SEPARATOR).to_string();
        let rooted = format!("{root}{SEPARATOR}");
        let qualified = if name.starts_with(&rooted) {
            name
        } else {
            let default_namespace = config
                .namespace_override
                .as_deref()
                .unwrap_or(&root)
                .trim_matches(SEPARATOR);
            format!("{default_namespace}{SEPARATOR}{name}")
        };

        let relative = qualified.replacen(&rooted, "", 1).replace(SEPARATOR, "/");
        let path = config
            .app_path
            .join(format!("{}.php", relative.trim_start_matches('/')));

        Ok(Self {
            qualified,
            root_namespace: root,
            path,
        })
    }

    /// Fully qualified class name
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    /// Namespace of the class
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.qualified
            .rsplit_once(SEPARATOR)
            .map_or("", |(namespace, _)| namespace)
    }

    /// Class name without its namespace
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.qualified
            .rsplit_once(SEPARATOR)
            .map_or(self.qualified.as_str(), |(_, class)| class)
    }

    /// Output file, relative to the project root
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Replace the namespace and class tokens in rendered text
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        content
            .replace(NAMESPACE_TOKEN, self.namespace())
            .replace(
                ROOT_NAMESPACE_TOKEN,
                &format!("{}{SEPARATOR}", self.root_namespace),
            )
            .replace(CLASS_TOKEN, self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_namespace(namespace: &str) -> GeneratorConfig {
        GeneratorConfig {
            namespace_override: Some(namespace.to_string()),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_root_namespace_by_default() {
        let target = ClassTarget::resolve("Post", &GeneratorConfig::default()).unwrap();
        assert_eq!(target.qualified_name(), "App\\Post");
        assert_eq!(target.namespace(), "App");
        assert_eq!(target.class_name(), "Post");
        assert_eq!(target.path(), &PathBuf::from("app/Post.php"));
    }

    #[test]
    fn test_namespace_override() {
        let target = ClassTarget::resolve("Post", &with_namespace("App\\Models")).unwrap();
        assert_eq!(target.qualified_name(), "App\\Models\\Post");
        assert_eq!(target.namespace(), "App\\Models");
        assert_eq!(target.path(), &PathBuf::from("app/Models/Post.php"));
    }

    #[test]
    fn test_nested_name() {
        let target = ClassTarget::resolve("Admin/Role", &GeneratorConfig::default()).unwrap();
        assert_eq!(target.qualified_name(), "App\\Admin\\Role");
        assert_eq!(target.class_name(), "Role");
        assert_eq!(target.path(), &PathBuf::from("app/Admin/Role.php"));
    }

    #[test]
    fn test_already_qualified_name() {
        let target = ClassTarget::resolve("\\App\\Tag", &with_namespace("App\\Models")).unwrap();
        assert_eq!(target.qualified_name(), "App\\Tag");
        assert_eq!(target.path(), &PathBuf::from("app/Tag.php"));
    }

    #[test]
    fn test_name_sharing_root_prefix() {
        for name in ["Appointment", "Apple", "Application"] {
            let target = ClassTarget::resolve(name, &GeneratorConfig::default()).unwrap();
            assert_eq!(target.qualified_name(), format!("App\\{name}"));
            assert_eq!(target.namespace(), "App");
            assert_eq!(target.class_name(), name);
            assert_eq!(target.path(), &PathBuf::from(format!("app/{name}.php")));
        }

        let target = ClassTarget::resolve("Appointment", &with_namespace("App\\Models")).unwrap();
        assert_eq!(target.qualified_name(), "App\\Models\\Appointment");
        assert_eq!(target.path(), &PathBuf::from("app/Models/Appointment.php"));
        assert_eq!(
            target.apply("namespace DummyNamespace;\nclass DummyClass"),
            "namespace App\\Models;\nclass Appointment"
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            ClassTarget::resolve("", &GeneratorConfig::default()).unwrap_err(),
            MissingInputError::name()
        );
        assert!(ClassTarget::resolve("//", &GeneratorConfig::default()).is_err());
    }

    #[test]
    fn test_apply_tokens() {
        let target = ClassTarget::resolve("Post", &with_namespace("App\\Models")).unwrap();
        let out = target.apply("namespace DummyNamespace;\nuse DummyRootNamespaceUser;\nclass DummyClass");
        assert_eq!(out, "namespace App\\Models;\nuse App\\User;\nclass Post");
    }
}
