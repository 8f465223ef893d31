//! Low-level LaTeX construction: grouping, control words, environments
//! and character escaping for prose and math contexts.
//!
//! Everything here is total; a malformed name simply yields malformed
//! LaTeX. Validation is not this layer's job.

/// Placeholders for braces and brackets typed inside math text.
///
/// `escape_math` maps user-typed `{ } [ ]` onto these so a later pass
/// can tell them apart from the structural braces this module emits.
/// Private-use codepoints keep them out of any prose-escape or entity
/// output; `postprocess` swaps them back at the very end.
pub const MATH_LBRACE: char = '\u{e000}';
pub const MATH_RBRACE: char = '\u{e001}';
pub const MATH_LBRACK: char = '\u{e002}';
pub const MATH_RBRACK: char = '\u{e003}';

/// Wrap each argument in a brace group and concatenate.
pub fn group(args: &[&str]) -> String {
    let mut out = String::new();
    for arg in args {
        out.push('{');
        out.push_str(arg);
        out.push('}');
    }
    out
}

/// `\name{arg}{arg}...`
pub fn cmd(name: &str, args: &[&str]) -> String {
    format!("\\{}{}", name, group(args))
}

/// `\name[opt]{arg}...`
pub fn cmd_opt(name: &str, opt: &str, args: &[&str]) -> String {
    format!("\\{}[{}]{}", name, opt, group(args))
}

/// `{\name arg arg}`: a declaration scoped to one group.
pub fn region(name: &str, args: &[&str]) -> String {
    format!("{{\\{} {}}}", name, args.join(" "))
}

/// Wrap `value` in nested calls so the last name becomes the
/// innermost macro.
pub fn wrap_macros(names: &[&str], value: &str) -> String {
    names
        .iter()
        .rev()
        .fold(value.to_string(), |acc, name| cmd(name, &[&acc]))
}

pub fn begin_env(name: &str) -> String {
    cmd("begin", &[name])
}

pub fn end_env(name: &str) -> String {
    cmd("end", &[name])
}

/// `\begin{name}{arg}...` + body + `\end{name}`, newline-separated.
pub fn env(name: &str, args: &[&str], body: &str) -> String {
    format!("{}{}\n{}\n{}\n", begin_env(name), group(args), body, end_env(name))
}

/// As [`env`], with an optional argument after the begin.
pub fn env_opt(name: &str, opt: &str, args: &[&str], body: &str) -> String {
    format!(
        "{}[{}]{}\n{}\n{}\n",
        begin_env(name),
        opt,
        group(args),
        body,
        end_env(name)
    )
}

pub fn label(id: &str) -> String {
    cmd("label", &[id])
}

/// `\hypertarget{id}{text}`. Ids are normalized because they
/// frequently contain underscores, which are unsafe in text mode.
pub fn hypertarget(name: Option<&str>, text: &str) -> String {
    match name {
        Some(name) => cmd("hypertarget", &[&normalize_id(name), text]),
        None => cmd("hypertarget", &["'NO-ID'", text]),
    }
}

pub fn normalize_id(id: &str) -> String {
    id.replace('_', "-")
}

/// Escape running prose for LaTeX.
///
/// Character entities are decoded first, then the nine specials are
/// substituted in a single pass so no substitution can re-escape the
/// output of an earlier one. The backslash itself is left alone: the
/// upstream parser never emits a bare one in prose.
pub fn escape_text(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let mut out = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        match ch {
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '&' => out.push_str("\\&"),
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '_' => out.push_str("\\_"),
            '|' => out.push_str("\\textbar{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape math text: decode entities, then hide user-typed braces and
/// brackets behind the placeholder codepoints.
pub fn escape_math(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    decoded
        .chars()
        .map(|ch| match ch {
            '{' => MATH_LBRACE,
            '}' => MATH_RBRACE,
            '[' => MATH_LBRACK,
            ']' => MATH_RBRACK,
            other => other,
        })
        .collect()
}
