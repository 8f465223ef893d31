//! Node dispatch: route each node by kind to its render rule.
//!
//! Unknown *block* kinds render as nothing (guessing a block's shape
//! is worse than dropping it); unknown *inline* kinds fall back to the
//! node's raw text (dropping inline text visibly breaks prose). Both
//! leave a diagnostic behind.

pub mod block;
pub mod inline;
pub mod list;
pub mod table;

use asciitex_ir::Node;

use crate::context::RenderContext;

/// Render one node into a LaTeX fragment. Never fails.
pub fn render_node(node: &Node, ctx: &mut RenderContext) -> String {
    match node {
        Node::Block(b) => block::render(b, ctx),
        Node::List(l) => list::render(l, ctx),
        Node::Table(t) => table::render(t),
        Node::Inline(i) => inline::render(i, ctx),
    }
}
