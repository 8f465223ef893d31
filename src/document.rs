//! Whole-document assembly: preamble, front matter, body and the final
//! post-processing pass.

use std::fs;

use asciitex_ir::{Document, Doctype};

use crate::context::{RenderContext, RenderOptions};
use crate::pipeline;
use crate::postprocess;
use crate::tex;
use crate::utils::error::{RenderError, RenderOutput};

const PREAMBLE_ARTICLE: &str = include_str!("../templates/preamble_article.tex");
const PREAMBLE_BOOK: &str = include_str!("../templates/preamble_book.tex");
const MACROS: &str = include_str!("../templates/asciidoc_macros.tex");

const RULE: &str =
    "% ======================================================================\n";

/// Render a document to LaTeX.
///
/// Embedded documents (or `header` = `no`) get the body only; full
/// documents get the doctype preamble, the shared macro definitions,
/// the front matter and the document environment around it. The
/// post-processor runs once over the final string either way.
pub fn render_document(
    doc: &Document,
    options: &RenderOptions,
) -> Result<RenderOutput, RenderError> {
    let mut ctx = RenderContext::new(doc, options);
    let body = if doc.blocks.is_empty() {
        doc.content.clone()
    } else {
        pipeline::render_blocks(&doc.blocks, &mut ctx)
    };

    let headless = doc.embedded || doc.attributes.str("header") == Some("no");
    let mut out = String::new();

    if !headless {
        out.push_str(RULE);
        out.push_str("% Generated by asciitex\n");
        out.push_str(&load_template(options, preamble_name(doc.doctype), preamble_default(doc.doctype))?);
        out.push('\n');

        out.push_str(RULE);
        out.push_str("% Macros and environments for asciidoc constructs\n");
        out.push_str(&load_template(options, "asciidoc_macros.tex", MACROS)?);
        out.push('\n');

        out.push_str(RULE);
        out.push_str("% Front matter\n");
        out.push_str(&tex::cmd("title", &[doc.doctitle.as_deref().unwrap_or("")]));
        out.push('\n');
        out.push_str(&tex::cmd("author", &[doc.author.as_deref().unwrap_or("")]));
        out.push('\n');
        out.push_str(&tex::cmd("date", &[doc.revdate.as_deref().unwrap_or("")]));
        out.push_str("\n\n\n\n");

        out.push_str(&tex::begin_env("document"));
        out.push('\n');
        if !doc.attributes.contains("notitle") {
            out.push_str(&tex::cmd("maketitle", &[]));
        }
        out.push('\n');
        if doc.attributes.contains("toc") {
            out.push_str(&tex::cmd("tableofcontents", &[]));
        }
        out.push('\n');
    }

    out.push_str(&body);
    out.push('\n');

    if !headless {
        out.push_str(&tex::end_env("document"));
        out.push('\n');
    }

    Ok(RenderOutput::with_diagnostics(
        postprocess::postprocess(&out),
        ctx.take_diagnostics(),
    ))
}

fn preamble_name(doctype: Doctype) -> &'static str {
    match doctype {
        Doctype::Article => "preamble_article.tex",
        Doctype::Book => "preamble_book.tex",
    }
}

fn preamble_default(doctype: Doctype) -> &'static str {
    match doctype {
        Doctype::Article => PREAMBLE_ARTICLE,
        Doctype::Book => PREAMBLE_BOOK,
    }
}

/// Template content: an override file from the data directory when one
/// is configured, the embedded copy otherwise. Read as opaque text,
/// never parsed.
fn load_template(
    options: &RenderOptions,
    name: &str,
    default: &'static str,
) -> Result<String, RenderError> {
    match &options.data_dir {
        Some(dir) => Ok(fs::read_to_string(dir.join(name))?),
        None => Ok(default.to_string()),
    }
}
