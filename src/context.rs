//! Render options and per-call render state.

use std::path::PathBuf;

use asciitex_ir::Document;

use crate::utils::error::{Diagnostic, Severity};

/// Caller-supplied knobs for a render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Directory holding preamble/macro template overrides. When unset
    /// the embedded templates are used.
    pub data_dir: Option<PathBuf>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// State threaded through the render rules: the document's attributes
/// and reference registry, plus the diagnostics collected so far.
///
/// The table engine's span state is the one other piece of mutable
/// state in the pipeline, and that never leaves a single table render.
pub struct RenderContext<'a> {
    pub doc: &'a Document,
    pub options: &'a RenderOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RenderContext<'a> {
    pub fn new(doc: &'a Document, options: &'a RenderOptions) -> Self {
        Self {
            doc,
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Document-level attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.doc.attributes.str(key)
    }

    /// Resolved reference label for a cross-reference id.
    pub fn reflabel(&self, id: &str) -> Option<&str> {
        self.doc.references.get(id).map(String::as_str)
    }

    pub fn warn(&mut self, kind: &str, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::new(Severity::Warning, kind, message));
    }

    pub fn info(&mut self, kind: &str, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::new(Severity::Info, kind, message));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
