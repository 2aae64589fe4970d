//! Structured error types shared across the dollar game crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GameError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph, partition, and game operations.
///
/// Every variant is an expected outcome that callers branch on. None of them
/// indicate a bug in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum GameError {
    /// An edge already connects the requested endpoints.
    #[error("duplicate edge: {0}")]
    DuplicateEdge(ErrorInfo),
    /// A node with the requested id is already live.
    #[error("duplicate node: {0}")]
    DuplicateNode(ErrorInfo),
    /// The graph is not connected, so the requested quantity is undefined.
    #[error("graph not connected: {0}")]
    NotConnected(ErrorInfo),
    /// No sequence of integers satisfies the partition constraints.
    #[error("infeasible partition: {0}")]
    Infeasible(ErrorInfo),
    /// A referenced node or edge does not exist.
    #[error("not found: {0}")]
    NotFound(ErrorInfo),
    /// Configuration could not be parsed or failed validation.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GameError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GameError::DuplicateEdge(info)
            | GameError::DuplicateNode(info)
            | GameError::NotConnected(info)
            | GameError::Infeasible(info)
            | GameError::NotFound(info)
            | GameError::Config(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Returns a copy of the error with an extra context entry.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            GameError::DuplicateEdge(info) => {
                GameError::DuplicateEdge(info.with_context(key, value))
            }
            GameError::DuplicateNode(info) => {
                GameError::DuplicateNode(info.with_context(key, value))
            }
            GameError::NotConnected(info) => GameError::NotConnected(info.with_context(key, value)),
            GameError::Infeasible(info) => GameError::Infeasible(info.with_context(key, value)),
            GameError::NotFound(info) => GameError::NotFound(info.with_context(key, value)),
            GameError::Config(info) => GameError::Config(info.with_context(key, value)),
        }
    }
}
