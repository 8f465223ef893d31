//! Render rules for inline nodes.

use asciitex_ir::{AnchorType, Inline, InlineKind, QuotedType};

use crate::context::RenderContext;
use crate::registry;
use crate::render::block::{resolve_target, resolve_width};
use crate::tex;

/// Marker the upstream parser leaves around passthrough text.
const PASS_START: char = '\u{96}';

pub fn render(inline: &Inline, ctx: &mut RenderContext) -> String {
    match &inline.kind {
        InlineKind::Quoted(quoted) => render_quoted(quoted, inline, ctx),
        InlineKind::Anchor(anchor) => render_anchor(*anchor, inline, ctx),
        InlineKind::Break => format!("{} \\\\", text_of(inline)),
        InlineKind::Footnote => tex::cmd("footnote", &[text_of(inline)]),
        InlineKind::Callout => {
            ctx.info("inline callout", "callouts are not rendered");
            String::new()
        }
        InlineKind::IndexTerm { visible } => index_term(*visible, inline),
        InlineKind::Image => inline_image(inline, ctx),
        InlineKind::Unknown(name) => {
            ctx.warn(
                "unknown inline",
                format!("kind '{}' falls back to raw text", name),
            );
            text_of(inline).to_string()
        }
    }
}

fn text_of(inline: &Inline) -> &str {
    inline.text.as_deref().unwrap_or("")
}

fn render_quoted(quoted: &QuotedType, inline: &Inline, ctx: &mut RenderContext) -> String {
    let text = text_of(inline);
    match quoted {
        QuotedType::Monospaced => {
            if text.contains(PASS_START) {
                // Passthrough text keeps its escapes; verb leaves it be.
                format!("\\verb€{}€", text)
            } else {
                tex::cmd("texttt", &[text])
            }
        }
        QuotedType::Emphasis => tex::cmd("textit", &[text]),
        QuotedType::Strong => tex::cmd("textbf", &[text]),
        QuotedType::Double => format!("``{}''", text),
        QuotedType::Single => format!("`{}'", text),
        QuotedType::Mark => tex::cmd("colorbox", &["yellow", text]),
        QuotedType::Superscript => tex::cmd("textsuperscript", &[text]),
        QuotedType::Subscript => tex::cmd("textsubscript", &[text]),
        QuotedType::AsciiMath => {
            ctx.warn("inline math", "asciimath is not supported, emitting verbatim");
            format!("\\verb€{}€", text)
        }
        QuotedType::LatexMath => format!("\\( {} \\)", tex::escape_math(text)),
        QuotedType::Unquoted => {
            let role = inline.attributes.str("role");
            match registry::color_for_role(role) {
                Some(color) => tex::cmd(color, &[text]),
                None => text.to_string(),
            }
        }
        QuotedType::Unknown(name) => {
            ctx.warn(
                "unknown inline",
                format!("quoted type '{}' falls back to raw text", name),
            );
            text.to_string()
        }
    }
}

fn render_anchor(anchor: AnchorType, inline: &Inline, ctx: &mut RenderContext) -> String {
    match anchor {
        AnchorType::Link => {
            let target = inline.target.as_deref().unwrap_or("");
            tex::cmd("href", &[target, text_of(inline)])
        }
        AnchorType::Ref => {
            let id = inline
                .id
                .as_deref()
                .or(inline.target.as_deref())
                .unwrap_or("");
            tex::label(id)
        }
        AnchorType::Xref => {
            let refid = inline.attributes.str("refid").unwrap_or("");
            let reftext = resolve_reftext(refid, inline, ctx);
            tex::cmd("hyperlink", &[&tex::normalize_id(refid), &reftext])
        }
    }
}

/// Explicit link text wins; otherwise the document registry supplies
/// the reference label, dot-stripped and parenthesized when purely
/// numeric (a bare section or equation number).
fn resolve_reftext(refid: &str, inline: &Inline, ctx: &mut RenderContext) -> String {
    if let Some(text) = &inline.text {
        return text.clone();
    }
    match ctx.reflabel(refid) {
        Some(label) => {
            let cleaned = label.replace('.', "");
            if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) {
                format!("({})", cleaned)
            } else {
                cleaned
            }
        }
        None => {
            ctx.warn(
                "missing reference",
                format!("no registry entry for id '{}'", refid),
            );
            String::new()
        }
    }
}

/// Hidden index terms arrive as a comma-separated attribute; LaTeX
/// nests them with `!`.
fn index_term(visible: bool, inline: &Inline) -> String {
    if visible {
        let text = text_of(inline);
        format!("{}{}", tex::cmd("index", &[text]), text)
    } else {
        let terms = inline
            .attributes
            .str("terms")
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("!");
        tex::cmd("index", &[&terms])
    }
}

fn inline_image(inline: &Inline, ctx: &mut RenderContext) -> String {
    let attrs = &inline.attributes;
    let width = resolve_width(attrs.str("width").or_else(|| attrs.str("pdfwidth")));
    let uri = resolve_target(inline.target.as_deref().unwrap_or(""), ctx);
    format!(" \\includegraphics[width={}]{{{}}} ", width, uri)
}
