//! Whole-document rendering: JSON tree in, complete LaTeX out.

use asciitex::{render_document, RenderOptions, Severity};
use asciitex_ir::{Block, BlockKind, Cell, Column, Document, List, ListItem, ListKind, Node, Table};
use pretty_assertions::assert_eq;

fn render(doc: &Document) -> asciitex::RenderOutput {
    render_document(doc, &RenderOptions::new()).unwrap()
}

#[test]
fn structured_blocks_drive_the_body() {
    let mut doc = Document::default();
    doc.embedded = true;
    let mut section = Block::new(BlockKind::Section);
    section.level = 1;
    section.title = Some("Intro".to_string());
    section.blocks = vec![
        Node::Block(Block::with_content(BlockKind::Paragraph, "first")),
        Node::Block(Block::with_content(BlockKind::Paragraph, "second")),
    ];
    doc.blocks = vec![Node::Block(section)];

    let out = render(&doc);
    assert!(out.content.starts_with("\\section{Intro}\n"));
    let first_at = out.content.find("first").unwrap();
    let second_at = out.content.find("second").unwrap();
    assert!(first_at < second_at);
}

#[test]
fn prerendered_content_is_used_when_blocks_are_absent() {
    let mut doc = Document::default();
    doc.embedded = true;
    doc.content = "already rendered".to_string();
    assert_eq!(render(&doc).content, "already rendered\n");
}

#[test]
fn math_entities_are_undone_at_the_very_end() {
    let mut doc = Document::default();
    doc.embedded = true;
    doc.blocks = vec![
        Node::Block(Block::with_content(BlockKind::Stem, "a &lt; b")),
        Node::Block(Block::with_content(BlockKind::Paragraph, "x &lt; y")),
    ];
    let out = render(&doc);
    // Inside the display-math span the entity becomes a literal.
    assert!(out.content.contains("\\[a < b\\]"));
    // In prose it stays decoded-then-escaped by the paragraph rule.
    assert!(out.content.contains("x < y"));
}

#[test]
fn inline_math_in_prerendered_content() {
    let mut doc = Document::default();
    doc.embedded = true;
    doc.content = "choose $n &gt; 0$ freely".to_string();
    assert_eq!(render(&doc).content, "choose $n > 0$ freely\n");
}

#[test]
fn lists_and_tables_flow_through_the_pipeline() {
    let mut doc = Document::default();
    doc.embedded = true;
    doc.blocks = vec![
        Node::List(List {
            kind: ListKind::Ordered,
            items: vec![ListItem::text("one"), ListItem::text("two")],
        }),
        Node::Table(Table {
            columns: vec![Column { width: 1.0 }, Column { width: 1.0 }],
            rows: vec![vec![Cell::rendered("a"), Cell::rendered("b")]],
        }),
    ];
    let out = render(&doc);
    assert!(out.content.contains("\\begin{enumerate}"));
    assert!(out.content.contains("\\begin{tabular}{|m{0.475\\textwidth}|m{0.475\\textwidth}|}"));
}

#[test]
fn diagnostics_surface_on_the_output() {
    let mut doc = Document::default();
    doc.embedded = true;
    doc.blocks = vec![Node::Block(Block::with_content(
        BlockKind::Unknown("widget".to_string()),
        "lost",
    ))];
    let out = render(&doc);
    assert!(out.has_diagnostics());
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].severity, Severity::Info);
}

#[test]
fn full_document_front_matter() {
    let mut doc = Document::default();
    doc.doctitle = Some("On Widgets".to_string());
    doc.author = Some("A. Author".to_string());
    doc.revdate = Some("2024-01-01".to_string());
    doc.content = "body".to_string();
    let out = render(&doc);
    assert!(out.content.contains("\\documentclass[11pt]{article}"));
    assert!(out.content.contains("\\title{On Widgets}"));
    assert!(out.content.contains("\\author{A. Author}"));
    assert!(out.content.contains("\\date{2024-01-01}"));
    assert!(out.content.contains("\\maketitle"));
    assert!(out.content.trim_end().ends_with("\\end{document}"));
}

// ---------------------------------------------------------------------------
// The JSON wire format the command-line renderer consumes.

#[test]
fn document_round_trips_from_json() {
    let json = r#"{
        "doctitle": "Trees",
        "embedded": true,
        "blocks": [
            {
                "node": "block",
                "kind": "section",
                "level": 1,
                "title": "Roots",
                "blocks": [
                    {"node": "block", "kind": "paragraph", "content": "deep &amp; wide"}
                ]
            }
        ]
    }"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    let out = render(&doc);
    assert!(out.content.starts_with("\\section{Roots}\n"));
    assert!(out.content.contains("deep \\& wide"));
}

#[test]
fn json_table_with_spans() {
    let json = r#"{
        "embedded": true,
        "blocks": [
            {
                "node": "table",
                "columns": [{"width": 1.0}, {"width": 1.0}],
                "rows": [
                    [{"content": "tall", "rowspan": 2}, {"content": ["50% full"]}],
                    [{"content": "below"}]
                ]
            }
        ]
    }"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    let out = render(&doc);
    assert!(out.content.contains("\\multirow{2}{*}{tall}"));
    assert!(out.content.contains("50\\% full"));
    assert!(out.content.contains("\\cline{1-1}"));
}

#[test]
fn json_inline_nodes() {
    let json = r#"{
        "embedded": true,
        "blocks": [
            {"node": "inline", "kind": {"quoted": "strong"}, "text": "bold"},
            {"node": "inline", "kind": {"anchor": "link"},
             "target": "https://example.com", "text": "site"}
        ]
    }"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    let out = render(&doc);
    assert!(out.content.contains("\\textbf{bold}"));
    assert!(out.content.contains("\\href{https://example.com}{site}"));
}
