//! Final text pass over assembled output.
//!
//! The upstream parser entity-encodes `&`, `<` and `>` everywhere,
//! including inside math, where LaTeX needs the literal characters.
//! This pass undoes that inside every inline (`$...$`) and block
//! (`\[...\]`) math span, and restores the math brace placeholders
//! planted by `tex::escape_math`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::tex::{MATH_LBRACE, MATH_LBRACK, MATH_RBRACE, MATH_RBRACK};

/// Stand-in for one backslash of a `\\` pair while the math spans are
/// being matched. Without it, the second backslash of a row separator
/// could pair with a following `[` and open a phantom block span.
const BACKSLASH_MARKER: char = '\u{e004}';

lazy_static! {
    static ref INLINE_MATH: Regex = Regex::new(r"\$(.*?)\$").unwrap();
    static ref BLOCK_MATH: Regex = Regex::new(r"(?s)\\\[(.*?)\\\]").unwrap();
}

/// Run the whole pass over a completed document fragment.
pub fn postprocess(text: &str) -> String {
    let marker: String = [BACKSLASH_MARKER; 2].iter().collect();
    let mut out = text.replace("\\\\", &marker);
    out = substitute_in_spans(&out, &INLINE_MATH);
    out = substitute_in_spans(&out, &BLOCK_MATH);
    let out = out.replace(BACKSLASH_MARKER, "\\");
    restore_placeholders(&out)
}

/// Entity undo over a whole string, for stem content that is known to
/// be math in its entirety.
pub fn stem_substitutions(text: &str) -> String {
    let marker: String = [BACKSLASH_MARKER; 2].iter().collect();
    let out = text.replace("\\\\", &marker);
    let out = undo_entities(&out);
    out.replace(BACKSLASH_MARKER, "\\")
}

fn substitute_in_spans(text: &str, span: &Regex) -> String {
    span.replace_all(text, |caps: &Captures| undo_entities(&caps[0]))
        .into_owned()
}

fn undo_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
}

fn restore_placeholders(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            MATH_LBRACE => '{',
            MATH_RBRACE => '}',
            MATH_LBRACK => '[',
            MATH_RBRACK => ']',
            other => other,
        })
        .collect()
}
