//! Translator error types
//!
//! Error codes:
//! - SEARCHBRIDGE_UNSUPPORTED_QUERY_KIND (REJECT)

use std::fmt;

/// Severity levels for translator errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Input rejected; nothing was produced
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Translator error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateErrorCode {
    /// Node kind outside the supported set for its position
    UnsupportedQueryKind,
}

impl TranslateErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            TranslateErrorCode::UnsupportedQueryKind => "SEARCHBRIDGE_UNSUPPORTED_QUERY_KIND",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for TranslateErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Where in the tree a node was being translated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateContext {
    /// Direct `translate` call on the node
    TopLevel,
    /// Non-boolean clause of a boolean query
    BooleanClause,
}

impl TranslateContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslateContext::TopLevel => "top-level",
            TranslateContext::BooleanClause => "boolean clause",
        }
    }
}

/// Translator error with context
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateError {
    code: TranslateErrorCode,
    message: String,
    kind: String,
    context: TranslateContext,
}

impl TranslateError {
    /// Create an unsupported query kind error
    pub fn unsupported_kind(kind: impl Into<String>, context: TranslateContext) -> Self {
        let kind = kind.into();
        Self {
            code: TranslateErrorCode::UnsupportedQueryKind,
            message: format!(
                "Unsupported query kind '{}' in {} position",
                kind,
                context.as_str()
            ),
            kind,
            context,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> TranslateErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending node kind
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns where the node was encountered
    pub fn context(&self) -> TranslateContext {
        self.context
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for TranslateError {}

/// Result type for translator operations
pub type TranslateResult<T> = Result<T, TranslateError>;
