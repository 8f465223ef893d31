//! Bottom-up traversal driver.
//!
//! Hosts that own the traversal (an embedding converter) call
//! `render_node` per node with `content` already resolved. This driver
//! is for standalone use: it renders structured children depth-first
//! and feeds the joined fragments to each parent's rule.

use asciitex_ir::Node;

use crate::context::RenderContext;
use crate::render;

/// Render a node, resolving structured children first.
pub fn render_tree(node: &Node, ctx: &mut RenderContext) -> String {
    match node {
        Node::Block(block) if !block.blocks.is_empty() => {
            let content = render_blocks(&block.blocks, ctx);
            let mut resolved = block.clone();
            resolved.content = content;
            render::block::render(&resolved, ctx)
        }
        other => render::render_node(other, ctx),
    }
}

/// Render a sequence of sibling nodes in document order.
pub fn render_blocks(blocks: &[Node], ctx: &mut RenderContext) -> String {
    blocks
        .iter()
        .map(|node| render_tree(node, ctx))
        .collect::<Vec<_>>()
        .join("\n")
}
