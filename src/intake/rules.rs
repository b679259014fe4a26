//! Configuration for the validation stage.

use crate::source::FileSource;
use dyn_clone::DynClone;
use std::fmt;

/// Default maximum file size: 10 MiB.
pub const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;
/// Default minimum file size: 1 byte (empty files are rejected).
pub const DEFAULT_MIN_SIZE: u64 = 1;

/// A caller-supplied validation rule, applied after the built-in checks.
///
/// Rules are trait objects so a rule set stays `Clone`; implement
/// [`Clone`] on the concrete type and the blanket `DynClone` impl does the
/// rest.
///
/// # Examples
///
/// ```
/// use filedrop::intake::rules::CustomRule;
/// use filedrop::source::FileSource;
///
/// #[derive(Clone)]
/// struct NoSpacesInName;
///
/// impl CustomRule for NoSpacesInName {
///     fn name(&self) -> &str {
///         "no-spaces"
///     }
///
///     fn check(&self, file: &dyn FileSource) -> Result<(), String> {
///         if file.name().contains(' ') {
///             Err("file name contains spaces".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait CustomRule: DynClone + Send + Sync {
    /// A short name identifying the rule in error messages.
    fn name(&self) -> &str;
    /// Checks the candidate file, returning a rejection reason on failure.
    fn check(&self, file: &dyn FileSource) -> Result<(), String>;
}

dyn_clone::clone_trait_object!(CustomRule);

/// The rule set a candidate file is checked against.
///
/// All fields have defaults; construct with [`ValidationRules::default`] and
/// override with the fluent setters. Allow-lists are `None` by default,
/// meaning "anything goes" for that dimension.
#[derive(Clone)]
pub struct ValidationRules {
    /// Maximum file size in bytes. Larger files are rejected.
    pub max_size: u64,
    /// Minimum file size in bytes. Smaller files are rejected.
    pub min_size: u64,
    /// MIME types to accept. `None` accepts any type.
    pub allowed_mime_types: Option<Vec<String>>,
    /// File extensions (lowercase, no dot) to accept. `None` accepts any.
    pub allowed_extensions: Option<Vec<String>>,
    /// Optional rule applied after the built-in checks.
    pub custom_rule: Option<Box<dyn CustomRule>>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            allowed_mime_types: None,
            allowed_extensions: None,
            custom_rule: None,
        }
    }
}

// Manual Debug because Box<dyn CustomRule> does not implement it.
impl fmt::Debug for ValidationRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRules")
            .field("max_size", &self.max_size)
            .field("min_size", &self.min_size)
            .field("allowed_mime_types", &self.allowed_mime_types)
            .field("allowed_extensions", &self.allowed_extensions)
            .field("custom_rule", &self.custom_rule.as_ref().map(|r| r.name()))
            .finish()
    }
}

impl ValidationRules {
    /// Sets the maximum file size in bytes.
    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    /// Sets the minimum file size in bytes.
    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = bytes;
        self
    }

    /// Restricts accepted MIME types to the given list.
    pub fn allowed_mime_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_mime_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts accepted extensions to the given list.
    ///
    /// Extensions are normalized to lowercase with any leading dot stripped,
    /// so `".TXT"` and `"txt"` configure the same rule.
    pub fn allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = Some(
            extensions
                .into_iter()
                .map(|e| e.into().trim_start_matches('.').to_lowercase())
                .collect(),
        );
        self
    }

    /// Installs a custom rule, applied after the built-in checks.
    pub fn custom_rule(mut self, rule: impl CustomRule + 'static) -> Self {
        self.custom_rule = Some(Box::new(rule));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = ValidationRules::default();
        assert_eq!(rules.max_size, 10 * 1024 * 1024);
        assert_eq!(rules.min_size, 1);
        assert!(rules.allowed_mime_types.is_none());
        assert!(rules.allowed_extensions.is_none());
        assert!(rules.custom_rule.is_none());
    }

    #[test]
    fn test_extensions_are_normalized() {
        let rules = ValidationRules::default().allowed_extensions([".TXT", "Csv", "md"]);
        assert_eq!(
            rules.allowed_extensions,
            Some(vec!["txt".to_string(), "csv".to_string(), "md".to_string()])
        );
    }

    #[test]
    fn test_debug_names_custom_rule() {
        #[derive(Clone)]
        struct Always;
        impl CustomRule for Always {
            fn name(&self) -> &str {
                "always"
            }
            fn check(&self, _file: &dyn crate::source::FileSource) -> Result<(), String> {
                Ok(())
            }
        }

        let rules = ValidationRules::default().custom_rule(Always);
        let debug = format!("{rules:?}");
        assert!(debug.contains("always"));
    }
}
