//! Render rules for description, unordered and ordered lists.

use asciitex_ir::{List, ListItem, ListKind};

use crate::context::RenderContext;
use crate::tex;

pub fn render(list: &List, _ctx: &mut RenderContext) -> String {
    match list.kind {
        ListKind::Description => itemized(list, "description", true),
        ListKind::Unordered => itemized(list, "itemize", false),
        ListKind::Ordered => itemized(list, "enumerate", false),
    }
}

fn itemized(list: &List, env_name: &str, with_terms: bool) -> String {
    let mut out = tex::begin_env(env_name);
    out.push('\n');
    for item in &list.items {
        let term = if with_terms {
            item.terms.concat()
        } else {
            String::new()
        };
        out.push_str(&render_item(&term, item));
    }
    out.push_str(&tex::end_env(env_name));
    out
}

fn render_item(term: &str, item: &ListItem) -> String {
    let mut out = if term.is_empty() {
        tex::cmd("item", &[])
    } else {
        tex::cmd_opt("item", term, &[])
    };
    out.push('\n');
    if let Some(text) = &item.text {
        out.push_str(&tex::escape_text(text));
    }
    if let Some(content) = &item.content {
        out.push_str(&tex::escape_text(content));
    }
    out.push('\n');
    out
}
