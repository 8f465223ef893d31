//! asciitex - renders parsed AsciiDoc node trees to LaTeX.
//!
//! The input tree comes from an external parser (see the
//! `asciitex-ir` crate for its shape); this crate walks it and emits
//! LaTeX: heading commands per document class, lists, figures,
//! tabulars with merged cells, math spans and cross-references.
//!
//! ```
//! use asciitex::{render_document, RenderOptions};
//! use asciitex_ir::{Block, BlockKind, Document, Node};
//!
//! let mut doc = Document::default();
//! doc.embedded = true;
//! doc.blocks = vec![Node::Block(Block::with_content(
//!     BlockKind::Paragraph,
//!     "hello world",
//! ))];
//! let out = render_document(&doc, &RenderOptions::new()).unwrap();
//! assert!(out.content.contains("hello world"));
//! ```

pub mod context;
pub mod counters;
pub mod document;
pub mod pipeline;
pub mod postprocess;
pub mod registry;
pub mod render;
pub mod tex;
pub mod utils;

pub use asciitex_ir as ir;

pub use context::{RenderContext, RenderOptions};
pub use counters::Counters;
pub use document::render_document;
pub use render::render_node;
pub use utils::error::{Diagnostic, RenderError, RenderOutput, Severity};
