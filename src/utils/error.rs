//! Error and diagnostic types.
//!
//! Rendering itself never fails: every rule returns a string for every
//! input and degrades through fallbacks. `RenderError` covers only the
//! fallible edges (template IO, serialized-tree decoding). Diagnostics
//! are advisory and never change control flow.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone)]
pub enum RenderError {
    /// Template or input file could not be read
    IoError { message: String },
    /// Serialized node tree could not be decoded
    InvalidInput { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::IoError { message } => write!(f, "IO error: {}", message),
            RenderError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::InvalidInput {
            message: err.to_string(),
        }
    }
}

impl RenderError {
    pub fn invalid(message: impl Into<String>) -> Self {
        RenderError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Severity level for render diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Warnings (yellow) - e.g., unsupported inline type, missing reference
    Warning,
    /// Informational (cyan) - e.g., dropped unknown block, heading fallback
    Info,
}

/// An advisory note produced while rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Diagnostic kind as string (e.g., "unknown block", "missing reference")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// ANSI color code for this diagnostic's severity.
    pub fn color_code(&self) -> &'static str {
        match self.severity {
            Severity::Warning => "\x1b[33m", // yellow
            Severity::Info => "\x1b[36m",    // cyan
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Rendered output with the diagnostics collected along the way.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(content: String, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            content,
            diagnostics,
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
