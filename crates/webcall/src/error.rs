//! Error types for web call assembly.
//!
//! Every error in this crate represents caller misuse of the builder rather
//! than an environmental failure: a failed operation aborts entirely and
//! leaves the builder state unchanged.

use std::fmt;
use thiserror::Error;

/// Which of the builder's two argument mappings a value was registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// A placeholder substitution in the path template.
    Path,
    /// A key/value pair appended to the query string.
    Query,
}

impl ArgumentKind {
    /// Returns the argument kind as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Main error type for web call assembly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A path value was registered for a name with no matching placeholder
    /// in the template.
    #[error("no element {{{name}}} in path {template}")]
    NoSuchPathElement {
        /// The placeholder name that was not found.
        name: String,
        /// The template that was searched.
        template: String,
    },

    /// A path or query name was registered twice. Carries both the rejected
    /// value and the one already stored.
    #[error("duplicate {kind} argument: {name}:{new_value} can't overwrite {name}:{existing_value}")]
    DuplicateArgument {
        /// Whether the collision was in the path or query mapping.
        kind: ArgumentKind,
        /// The name registered twice.
        name: String,
        /// The value the second registration attempted to store.
        new_value: String,
        /// The value stored by the first registration.
        existing_value: String,
    },

    /// Placeholder syntax remained after all registered substitutions were
    /// applied. Carries the partially-substituted path.
    #[error("incomplete path substitutions, resulting path: {0}")]
    IncompletePath(String),

    /// The base URL given for joining could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Specialized result type for web call assembly.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoSuchPathElement { .. } => "NO_SUCH_PATH_ELEMENT",
            Self::DuplicateArgument { .. } => "DUPLICATE_ARGUMENT",
            Self::IncompletePath(_) => "INCOMPLETE_PATH",
            Self::InvalidBaseUrl(_) => "INVALID_BASE_URL",
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidBaseUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::NoSuchPathElement {
                name: "alpha".to_string(),
                template: "/base".to_string(),
            }
            .error_code(),
            "NO_SUCH_PATH_ELEMENT"
        );
        assert_eq!(
            Error::DuplicateArgument {
                kind: ArgumentKind::Path,
                name: "alpha".to_string(),
                new_value: "b".to_string(),
                existing_value: "a".to_string(),
            }
            .error_code(),
            "DUPLICATE_ARGUMENT"
        );
        assert_eq!(
            Error::IncompletePath("/base/{alpha}".to_string()).error_code(),
            "INCOMPLETE_PATH"
        );
        assert_eq!(
            Error::InvalidBaseUrl("test".to_string()).error_code(),
            "INVALID_BASE_URL"
        );
    }

    #[test]
    fn test_no_such_path_element_display() {
        let err = Error::NoSuchPathElement {
            name: "charlie".to_string(),
            template: "/base/{alpha}".to_string(),
        };
        assert_eq!(err.to_string(), "no element {charlie} in path /base/{alpha}");
    }

    #[test]
    fn test_duplicate_argument_display_carries_both_values() {
        let err = Error::DuplicateArgument {
            kind: ArgumentKind::Query,
            name: "charlie".to_string(),
            new_value: "new".to_string(),
            existing_value: "old".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate query argument: charlie:new can't overwrite charlie:old"
        );
    }

    #[test]
    fn test_incomplete_path_display() {
        let err = Error::IncompletePath("/base/a/next/{bravo}".to_string());
        assert_eq!(
            err.to_string(),
            "incomplete path substitutions, resulting path: /base/a/next/{bravo}"
        );
    }

    #[test]
    fn test_argument_kind_names() {
        assert_eq!(ArgumentKind::Path.name(), "path");
        assert_eq!(ArgumentKind::Query.name(), "query");
        assert_eq!(ArgumentKind::Query.to_string(), "query");
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let call_err: Error = err.into();
        assert!(matches!(call_err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = Error::IncompletePath("/x/{y}".to_string());
        assert_eq!(err, err.clone());
        assert_ne!(err, Error::IncompletePath("/x/{z}".to_string()));
    }
}
