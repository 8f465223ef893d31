//! Render rules for block nodes.

use asciitex_ir::{Block, BlockKind, Doctype};
use lazy_static::lazy_static;
use regex::Regex;

use crate::context::RenderContext;
use crate::registry;
use crate::tex;

pub fn render(block: &Block, ctx: &mut RenderContext) -> String {
    match &block.kind {
        BlockKind::Section => section(block, ctx),
        BlockKind::Paragraph => paragraph(block),
        BlockKind::Listing => listing(block, ctx),
        BlockKind::Literal => literal(block),
        BlockKind::Admonition => admonition(block),
        BlockKind::Quote => quote(block),
        BlockKind::Open => open(block),
        BlockKind::Example => example(block),
        BlockKind::Sidebar => sidebar(block),
        BlockKind::Verse => tex::env("verse", &[], &block.content),
        BlockKind::Stem => format!("\\[{}\\]", block.content),
        BlockKind::Pass | BlockKind::Preamble => block.content.clone(),
        BlockKind::PageBreak => "\n\\vfill\\eject\n".to_string(),
        BlockKind::Toc => toc(ctx),
        BlockKind::FloatingTitle => floating_title(block, ctx),
        BlockKind::Image => image(block, ctx),
        BlockKind::Environment => environment(block),
        BlockKind::Unknown(name) => {
            ctx.info("unknown block", format!("dropped block of kind '{}'", name));
            String::new()
        }
    }
}

/// Pick the heading command for the node's level, falling back to the
/// deepest command the document class supports.
fn heading_command(level: u8, doctype: Doctype, ctx: &mut RenderContext) -> &'static str {
    let tags = registry::section_commands(doctype);
    match tags.get(level as usize) {
        Some(command) => command,
        None => {
            let fallback = tags[tags.len() - 1];
            ctx.warn(
                "heading level",
                format!(
                    "LaTeX {:?} does not support heading level {}, uses {} instead",
                    doctype, level, fallback
                ),
            );
            fallback
        }
    }
}

fn section(block: &Block, ctx: &mut RenderContext) -> String {
    let command = heading_command(block.level, ctx.doc.doctype, ctx);
    let star = if block.numbered { "" } else { "*" };
    let title = tex::escape_text(block.title.as_deref().unwrap_or(""));
    let mut out = tex::cmd(&format!("{}{}", command, star), &[&title]);
    out.push('\n');
    out.push_str(&block.content);
    out
}

fn paragraph(block: &Block) -> String {
    let mut title = String::new();
    if let Some(text) = &block.title {
        title = tex::cmd("blockTitle", &[&tex::escape_text(text)]);
        title.push('\n');
    }

    let role = block.attributes.str("role");
    let mut content = tex::escape_text(&block.content);
    if let Some(color) = registry::color_for_role(role) {
        content = tex::cmd(color, &[&content]);
    }
    if let Some(alignment) = registry::alignment_for_role(role) {
        content = tex::env(alignment, &[], &content);
    }

    format!("{}{}\n\n", title, content)
}

/// Verbatim content, never escaped. The environment depends on the
/// configured source highlighter.
fn listing(block: &Block, ctx: &RenderContext) -> String {
    let language = block.attributes.str("language").unwrap_or("");
    match ctx.attr("source-highlighter") {
        Some("pygment") => tex::env("minted", &[language], &block.content),
        Some("lstlisting") => {
            let options = format!("frame = single, language={}", language);
            tex::env_opt("lstlisting", &options, &[], &block.content)
        }
        _ => tex::env("verbatim", &[], &block.content),
    }
}

fn literal(block: &Block) -> String {
    let heading = match (&block.id, &block.title) {
        (Some(id), Some(title)) => tex::hypertarget(Some(id), title),
        (None, Some(title)) => title.clone(),
        _ => String::new(),
    };
    if heading.is_empty() {
        tex::env("verbatim", &[], &block.content)
    } else {
        let mut out = tex::region("bf", &[&heading]);
        out.push_str("\\vspace{-1\\baselineskip}\n");
        out.push_str(&tex::env("verbatim", &[], &block.content));
        out
    }
}

/// Multi-line admonition content arrives pre-escaped from upstream;
/// escaping it again would double-escape. Single-line content is raw.
fn admonition(block: &Block) -> String {
    let single_line = !block.content.trim_end_matches('\n').contains('\n');
    let content = if single_line {
        tex::escape_text(&block.content)
    } else {
        block.content.clone()
    };
    let style = block.style.as_deref().unwrap_or("note");
    let mut out = tex::cmd("begin", &["admonition", style]);
    out.push('\n');
    out.push_str(&content);
    out.push('\n');
    out.push_str(&tex::cmd("end", &["admonition"]));
    out.push('\n');
    out
}

/// Three mutually exclusive shapes, in priority order: attributed,
/// titled, plain.
fn quote(block: &Block) -> String {
    if let Some(attribution) = block.attributes.str("attribution") {
        let citetitle = match block.attributes.str("citetitle") {
            Some(citetitle) => format!("{} \\\\", tex::region("bf", &[citetitle])),
            None => String::new(),
        };
        tex::env("aquote", &[attribution, &citetitle], &block.content)
    } else if let Some(title) = &block.title {
        tex::env("tquote", &[title], &block.content)
    } else {
        tex::env("quotation", &[], &block.content)
    }
}

fn open(block: &Block) -> String {
    if block.attributes.str("role") == Some("text-center") {
        tex::env("center", &[], &block.content)
    } else {
        block.content.clone()
    }
}

fn example(block: &Block) -> String {
    let mut content = match &block.title {
        Some(title) => format!("-- {}.\n{}", tex::region("bf", &[title]), block.content),
        None => block.content.clone(),
    };
    if let Some(id) = &block.id {
        let first_line = block.content.lines().next().unwrap_or("");
        content = format!("{}\n{}", tex::hypertarget(Some(id), first_line), content);
    }
    tex::env("example", &[], &content)
}

fn sidebar(block: &Block) -> String {
    let content = match &block.id {
        Some(id) => tex::hypertarget(Some(id), block.content.trim_end()),
        None => block.content.clone(),
    };
    match &block.title {
        Some(title) => {
            let heading = tex::env("bf", &[], title);
            tex::env("sidebar", &[], &format!("{}\n{}", heading, content.trim_end()))
        }
        None => tex::env("sidebar", &[], &content),
    }
}

fn toc(ctx: &RenderContext) -> String {
    if ctx.attr("toc-placement") == Some("macro") {
        tex::cmd("tableofcontents", &[])
    } else {
        String::new()
    }
}

/// Out-of-range levels clamp to the deepest command, without the
/// diagnostic sections emit.
fn floating_title(block: &Block, ctx: &RenderContext) -> String {
    let tags = registry::section_commands(ctx.doc.doctype);
    let command = tags
        .get(block.level as usize)
        .copied()
        .unwrap_or(tags[tags.len() - 1]);
    format!(
        "\\{}*{{{}}}\n\n{}\n\n",
        command,
        block.title.as_deref().unwrap_or(""),
        block.content
    )
}

lazy_static! {
    /// Extracts the original upload name from a noteshare image URL.
    static ref NOTESHARE_RX: Regex = Regex::new(r"image.*original/(.*)\?").unwrap();
}

/// Resolve an image width attribute against the fixed unit table.
/// Anything unrecognized, including a missing width, means full text
/// width.
pub(crate) fn resolve_width(width: Option<&str>) -> String {
    let Some(width) = width else {
        return "\\textwidth".to_string();
    };
    if width.contains("mm") {
        format!("{}mm", leading_float(width))
    } else if width.contains("cm") {
        format!("{}cm", leading_float(width))
    } else if width.contains("in") {
        format!("{}in", leading_float(width))
    } else if width.contains('%') {
        format!("{}\\textwidth", leading_float(width) / 100.0)
    } else {
        "\\textwidth".to_string()
    }
}

/// Leading numeric prefix of a string, or 0.0 when there is none.
fn leading_float(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        if ch.is_ascii_digit() {
            end = i + ch.len_utf8();
        } else if ch == '.' && !seen_dot && end == i {
            seen_dot = true;
            end = i + 1;
        } else {
            break;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Join the imagesdir base path and apply the noteshare target
/// extraction when the document asks for it. A noteshare URL that does
/// not match yields a literal "undefined" placeholder.
pub(crate) fn resolve_target(target: &str, ctx: &mut RenderContext) -> String {
    let mut raw = target.to_string();
    if let Some(dir) = ctx.attr("imagesdir") {
        if !dir.is_empty() {
            raw = format!("{}/{}", dir.trim_end_matches('/'), raw);
        }
    }
    if ctx.attr("noteshare") == Some("yes") {
        match NOTESHARE_RX.captures(&raw) {
            Some(captures) => captures[1].to_string(),
            None => {
                ctx.warn(
                    "image target",
                    format!("noteshare target '{}' has no original path", raw),
                );
                "undefined".to_string()
            }
        }
    } else {
        raw
    }
}

fn image(block: &Block, ctx: &mut RenderContext) -> String {
    let attrs = &block.attributes;
    let width = resolve_width(attrs.str("width"));
    let image = resolve_target(attrs.str("target").unwrap_or(""), ctx);

    let caption = match &block.title {
        Some(title) => format!("\\caption{{{}}}", title),
        None => String::new(),
    };
    let align = if attrs.str("align") == Some("center") {
        "\\centering"
    } else {
        ""
    };

    // Floats switch to a wrapfigure and force the caption off.
    let float = attrs.str("float");
    let (figure_type, ftext_width, caption) = match float {
        Some(_) => ("wrapfigure", width.clone(), String::new()),
        None => ("figure", String::new(), caption),
    };
    let position = match float {
        Some("left") => "{l}",
        Some("right") => "{r}",
        _ => "[h]",
    };

    format!(
        "\\begin{{{ft}}}{pos}{{{fw}}}\n\\centering\\includegraphics[width={w}]{{{img}}}\n{caption}\n{align}\n\\end{{{ft}}}\n",
        ft = figure_type,
        pos = position,
        fw = ftext_width,
        w = width,
        img = image,
        caption = caption,
        align = align,
    )
}

// ---------------------------------------------------------------------------
// Open blocks mapped onto named LaTeX environments. The environment
// name travels in the node's style; `equation`, `eqalign` and
// `listing` get dedicated shapes, everything else maps onto an
// environment of the same name.

fn environment(block: &Block) -> String {
    match block.style.as_deref() {
        Some("equation") => handle_equation(block),
        Some("eqalign") => handle_eqalign(block),
        Some("listing") => handle_env_listing(block),
        Some(name) => handle_plain(block, name),
        None => block.content.clone(),
    }
}

fn label_line(block: &Block) -> String {
    match &block.id {
        Some(id) => format!("{}\n", tex::label(id)),
        None => String::new(),
    }
}

fn has_option(block: &Block, option: &str) -> bool {
    block
        .attributes
        .str("options")
        .map_or(false, |options| options.contains(option))
}

fn handle_equation(block: &Block) -> String {
    if has_option(block, "numbered") {
        let content = tex::hypertarget(block.id.as_deref(), block.content.trim());
        tex::env("equation", &[], &format!("{}{}", label_line(block), content))
    } else {
        tex::env(
            "equation*",
            &[],
            &format!("{}{}", label_line(block), block.content.trim()),
        )
    }
}

fn handle_eqalign(block: &Block) -> String {
    let content = tex::env(
        "aligned",
        &[],
        &format!("{}{}", label_line(block), block.content.trim()),
    );
    if has_option(block, "numbered") {
        tex::env("align", &[], &content)
    } else {
        tex::env("align*", &[], &content)
    }
}

fn handle_env_listing(block: &Block) -> String {
    let label = match &block.id {
        Some(id) => tex::label(id),
        None => String::new(),
    };
    let content = tex::env("verbatim", &[], &block.content);
    tex::env("listing", &[&label], &content)
}

fn handle_plain(block: &Block, name: &str) -> String {
    let env_title = match block.attributes.str("original_title") {
        Some(original) => format!("{{\\rm ({}) }}", original),
        None => String::new(),
    };
    let title = if block.id.is_some() && !env_title.is_empty() {
        tex::hypertarget(block.id.as_deref(), &env_title)
    } else {
        env_title
    };

    let content = if block.attributes.is_set("plain-option") {
        tex::region("rm", &[block.content.trim_end()])
    } else {
        block.content.trim_end().to_string()
    };

    tex::env(
        name,
        &[],
        &format!("{}{}{}\n", title, label_line(block), content),
    )
}
