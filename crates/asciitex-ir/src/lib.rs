//! Node-tree data model for AsciiDoc to LaTeX rendering.
//!
//! The tree is produced by an external parser; the renderer only reads
//! it. `content` fields carry the already-rendered markup of a node's
//! children, while `blocks` optionally carries the structured children
//! for hosts that want the built-in bottom-up driver. All types
//! round-trip through serde so a serialized tree can be fed to the
//! command-line renderer.

use fxhash::FxHashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Registry of cross-reference ids to their resolved reference labels.
pub type RefRegistry = FxHashMap<String, String>;

/// A single attribute value. AsciiDoc attributes are strings, with
/// boolean flags for options toggled without a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Str(String),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// String-keyed node attributes, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap(pub IndexMap<String, AttrValue>);

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// String value for `key`, if present and a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(AttrValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True when the attribute exists at all, matching AsciiDoc's
    /// "attribute is set" notion for valueless flags.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True when the attribute is present and not an explicit `false`.
    pub fn is_set(&self, key: &str) -> bool {
        !matches!(self.0.get(key), None | Some(AttrValue::Bool(false)))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AttrMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// LaTeX document class the section-command tables key off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Doctype {
    #[default]
    Article,
    Book,
}

/// One element of the parsed tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Block(Block),
    List(List),
    Table(Table),
    Inline(Inline),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Heading depth; meaningful for sections and floating titles.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    /// AsciiDoc style name (admonition style, environment name, ...).
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub attributes: AttrMap,
    /// Pre-rendered markup of this node's children.
    #[serde(default)]
    pub content: String,
    /// Structured children for the bottom-up driver; empty when the
    /// host resolves `content` itself.
    #[serde(default)]
    pub blocks: Vec<Node>,
    #[serde(default = "default_true")]
    pub numbered: bool,
}

fn default_true() -> bool {
    true
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            level: 0,
            title: None,
            id: None,
            style: None,
            attributes: AttrMap::new(),
            content: String::new(),
            blocks: Vec::new(),
            numbered: true,
        }
    }

    pub fn with_content(kind: BlockKind, content: impl Into<String>) -> Self {
        let mut block = Self::new(kind);
        block.content = content.into();
        block
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Section,
    Paragraph,
    Listing,
    Literal,
    Admonition,
    Quote,
    Open,
    Example,
    Sidebar,
    Verse,
    Stem,
    Pass,
    Preamble,
    PageBreak,
    Toc,
    FloatingTitle,
    Image,
    /// A block mapped onto a named LaTeX environment (open-block
    /// environments; the name travels in `style`).
    Environment,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Description,
    Unordered,
    Ordered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Definition-list terms; joined with no separator when rendered.
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Pre-rendered markup of nested blocks under the item.
    #[serde(default)]
    pub content: Option<String>,
}

impl ListItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            terms: Vec::new(),
            text: Some(text.into()),
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
    /// Row-major cell stream. Cells covered by a span from an earlier
    /// row are absent; the layout engine reconstructs their footprint.
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Relative width; normalized against the table total.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    #[serde(default = "default_span")]
    pub rowspan: usize,
    #[serde(default = "default_span")]
    pub colspan: usize,
}

fn default_span() -> usize {
    1
}

impl Cell {
    pub fn rendered(content: impl Into<String>) -> Self {
        Self {
            content: CellContent::Rendered(content.into()),
            rowspan: 1,
            colspan: 1,
        }
    }

    pub fn spanned(content: impl Into<String>, rowspan: usize, colspan: usize) -> Self {
        Self {
            content: CellContent::Rendered(content.into()),
            rowspan,
            colspan,
        }
    }
}

/// Cell payload: raw source lines still needing prose escaping, or an
/// already-rendered fragment passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellContent {
    Lines(Vec<String>),
    Rendered(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inline {
    pub kind: InlineKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: AttrMap,
}

impl Inline {
    pub fn new(kind: InlineKind) -> Self {
        Self {
            kind,
            text: None,
            target: None,
            id: None,
            attributes: AttrMap::new(),
        }
    }

    pub fn quoted(quoted: QuotedType, text: impl Into<String>) -> Self {
        let mut inline = Self::new(InlineKind::Quoted(quoted));
        inline.text = Some(text.into());
        inline
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKind {
    Quoted(QuotedType),
    Anchor(AnchorType),
    Break,
    Footnote,
    Callout,
    IndexTerm { visible: bool },
    Image,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotedType {
    Monospaced,
    Emphasis,
    Strong,
    Double,
    Single,
    Mark,
    Superscript,
    Subscript,
    AsciiMath,
    LatexMath,
    Unquoted,
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorType {
    Link,
    Ref,
    Xref,
}

/// The document root: metadata, document attributes, the reference
/// registry, and either a pre-rendered body or structured blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub doctype: Doctype,
    #[serde(default)]
    pub doctitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub revdate: Option<String>,
    #[serde(default)]
    pub attributes: AttrMap,
    #[serde(default)]
    pub references: RefRegistry,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub blocks: Vec<Node>,
    /// Body-only render, without preamble and front matter.
    #[serde(default)]
    pub embedded: bool,
}
