//! Static role registries and heading-command tables.
//!
//! Read-only lookup data, constructed at process start. The color and
//! alignment macros are defined by the shared macro template.

use asciitex_ir::Doctype;
use phf::phf_map;

/// Role keyword → color macro name.
pub static COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "red" => "colorRed",
    "blue" => "colorBlue",
    "green" => "colorGreen",
    "yellow" => "colorYellow",
};

/// Role keyword → alignment environment name.
pub static ALIGNMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "text-left" => "flushleft",
    "text-right" => "flushright",
    "text-center" => "center",
};

const ARTICLE_SECTIONS: &[&str] = &[
    "part",
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
];

const BOOK_SECTIONS: &[&str] = &[
    "part",
    "chapter",
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
];

/// Heading commands for a document class, indexed by section level.
pub fn section_commands(doctype: Doctype) -> &'static [&'static str] {
    match doctype {
        Doctype::Article => ARTICLE_SECTIONS,
        Doctype::Book => BOOK_SECTIONS,
    }
}

/// Last color keyword in a space-separated role that names a
/// registered color, as its macro name.
pub fn color_for_role(role: Option<&str>) -> Option<&'static str> {
    lookup_role(role, &COLORS)
}

/// Last alignment keyword in a role, as its environment name.
pub fn alignment_for_role(role: Option<&str>) -> Option<&'static str> {
    lookup_role(role, &ALIGNMENTS)
}

fn lookup_role(
    role: Option<&str>,
    table: &phf::Map<&'static str, &'static str>,
) -> Option<&'static str> {
    role?
        .split_whitespace()
        .filter_map(|item| table.get(item).copied())
        .last()
}
