//! Checks a candidate file against a rule set.

use crate::errors::{Error, Result, RuleViolation};
use crate::intake::rules::ValidationRules;
use crate::source::FileSource;

/// Validates a candidate file against the configured rules.
///
/// Checks run in a fixed order, short-circuiting on the first failure:
///
/// 1. maximum size
/// 2. minimum size
/// 3. MIME type allow-list
/// 4. extension allow-list
/// 5. custom rule
///
/// # Errors
/// Returns [`Error::Validation`] carrying the file name and a
/// [`RuleViolation`] identifying the rule that rejected the file.
pub fn validate(file: &dyn FileSource, rules: &ValidationRules) -> Result<()> {
    let size = file.size();
    if size > rules.max_size {
        return Err(violation(
            file,
            RuleViolation::TooLarge {
                size,
                max: rules.max_size,
            },
        ));
    }
    if size < rules.min_size {
        return Err(violation(
            file,
            RuleViolation::TooSmall {
                size,
                min: rules.min_size,
            },
        ));
    }

    if let Some(ref allowed) = rules.allowed_mime_types {
        if !allowed.iter().any(|m| m == file.mime_type()) {
            return Err(violation(
                file,
                RuleViolation::MimeNotAllowed(file.mime_type().to_string()),
            ));
        }
    }

    if let Some(ref allowed) = rules.allowed_extensions {
        match extension_of(file.name()) {
            Some(ext) if allowed.contains(&ext) => {}
            Some(ext) => return Err(violation(file, RuleViolation::ExtensionNotAllowed(ext))),
            None => return Err(violation(file, RuleViolation::MissingExtension)),
        }
    }

    if let Some(ref rule) = rules.custom_rule {
        if let Err(reason) = rule.check(file) {
            return Err(violation(
                file,
                RuleViolation::Custom {
                    rule: rule.name().to_string(),
                    reason,
                },
            ));
        }
    }

    Ok(())
}

fn violation(file: &dyn FileSource, violation: RuleViolation) -> Error {
    Error::Validation {
        file: file.name().to_string(),
        violation,
    }
}

/// Extracts a file name's extension: the lowercased substring after the
/// final `.`. A name without a dot has no extension.
pub(crate) fn extension_of(name: &str) -> Option<String> {
    name.rfind('.').map(|idx| name[idx + 1..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn text_file(name: &str, content: &str) -> MemorySource {
        MemorySource::new(name, "text/plain", content)
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("notes.TXT"), Some("txt".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of(".gitignore"), Some("gitignore".to_string()));
        assert_eq!(extension_of("trailing."), Some(String::new()));
        assert_eq!(extension_of("Makefile"), None);
    }

    #[test]
    fn test_valid_file_passes_all_rules() {
        let rules = ValidationRules::default()
            .allowed_mime_types(["text/plain"])
            .allowed_extensions(["txt"]);
        let file = text_file("ok.txt", "content");
        assert!(validate(&file, &rules).is_ok());
    }

    #[test]
    fn test_too_large() {
        let rules = ValidationRules::default().max_size(4);
        let file = text_file("big.txt", "12345");
        match validate(&file, &rules) {
            Err(Error::Validation { file, violation }) => {
                assert_eq!(file, "big.txt");
                assert_eq!(violation, RuleViolation::TooLarge { size: 5, max: 4 });
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_fails_default_min_size() {
        let rules = ValidationRules::default();
        let file = text_file("empty.txt", "");
        match validate(&file, &rules) {
            Err(Error::Validation { violation, .. }) => {
                assert_eq!(violation, RuleViolation::TooSmall { size: 0, min: 1 });
            }
            other => panic!("expected TooSmall, got {other:?}"),
        }
    }

    #[test]
    fn test_mime_not_allowed() {
        let rules = ValidationRules::default().allowed_mime_types(["application/json"]);
        let file = text_file("notes.txt", "hi");
        match validate(&file, &rules) {
            Err(Error::Validation { violation, .. }) => {
                assert_eq!(
                    violation,
                    RuleViolation::MimeNotAllowed("text/plain".to_string())
                );
            }
            other => panic!("expected MimeNotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_not_allowed() {
        let rules = ValidationRules::default().allowed_extensions(["csv"]);
        let file = text_file("notes.TXT", "hi");
        match validate(&file, &rules) {
            Err(Error::Validation { violation, .. }) => {
                assert_eq!(
                    violation,
                    RuleViolation::ExtensionNotAllowed("txt".to_string())
                );
            }
            other => panic!("expected ExtensionNotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_fails_allow_list() {
        let rules = ValidationRules::default().allowed_extensions(["txt"]);
        let file = text_file("Makefile", "hi");
        match validate(&file, &rules) {
            Err(Error::Validation { violation, .. }) => {
                assert_eq!(violation, RuleViolation::MissingExtension);
            }
            other => panic!("expected MissingExtension, got {other:?}"),
        }
    }

    #[test]
    fn test_size_checked_before_mime() {
        // Both rules would fail; the size check wins because it runs first.
        let rules = ValidationRules::default()
            .max_size(1)
            .allowed_mime_types(["application/json"]);
        let file = text_file("a.txt", "12345");
        match validate(&file, &rules) {
            Err(Error::Validation { violation, .. }) => {
                assert!(matches!(violation, RuleViolation::TooLarge { .. }));
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_rule_runs_last() {
        #[derive(Clone)]
        struct RejectDrafts;
        impl crate::intake::rules::CustomRule for RejectDrafts {
            fn name(&self) -> &str {
                "reject-drafts"
            }
            fn check(&self, file: &dyn FileSource) -> std::result::Result<(), String> {
                if file.name().starts_with("draft") {
                    Err("drafts are not accepted".to_string())
                } else {
                    Ok(())
                }
            }
        }

        let rules = ValidationRules::default().custom_rule(RejectDrafts);
        assert!(validate(&text_file("final.txt", "x"), &rules).is_ok());
        match validate(&text_file("draft.txt", "x"), &rules) {
            Err(Error::Validation { violation, .. }) => match violation {
                RuleViolation::Custom { rule, reason } => {
                    assert_eq!(rule, "reject-drafts");
                    assert!(reason.contains("drafts"));
                }
                other => panic!("expected Custom, got {other:?}"),
            },
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
