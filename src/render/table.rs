//! Table layout: rebuild a rectangular grid with merged cells from a
//! sparse row-major cell stream.
//!
//! Cells covered by a rowspan from an earlier row are absent from the
//! stream. A per-column `pending` vector carries each in-progress
//! span's remaining row count across rows; covered positions get a
//! blank `\multicolumn` placeholder, and the partial bottom rule for a
//! span's column range is emitted only on its last covered row. The
//! engine does not validate span geometry: cumulative spans that do
//! not reconcile with the declared column count misrender silently.

use asciitex_ir::{Cell, CellContent, Table};

use crate::tex;

/// Each column loses this much of the text width to the engine's
/// intrinsic column padding. Calibration constant, not derived.
const WIDTH_REDUCTION: f64 = 0.025;

/// Remaining footprint of a previously placed cell at one column slot.
#[derive(Clone, Copy)]
struct PendingSpan {
    rows_left: usize,
    cols: usize,
}

impl PendingSpan {
    const NEUTRAL: PendingSpan = PendingSpan {
        rows_left: 1,
        cols: 1,
    };
}

pub fn render(table: &Table) -> String {
    let alignment = column_specs(table).join("|");

    let mut out = tex::begin_env("center");
    out.push('\n');
    out.push_str(&format!("{}{{|{}|}}\n", tex::begin_env("tabular"), alignment));
    out.push_str("\\hline\n");

    let columns = table.columns.len();
    let mut pending = vec![PendingSpan::NEUTRAL; columns];

    for row in &table.rows {
        let mut cells: Vec<String> = Vec::new();
        let mut rules = String::new();
        let mut x = 0usize;

        for cell in row {
            // Columns still covered by a span from an earlier row get a
            // blank placeholder before the next real cell is placed.
            while x < columns && pending[x].rows_left > 1 {
                x = emit_placeholder(&mut pending, x, &mut cells, &mut rules);
            }

            let content = cell_content(cell);
            let rendered = multicol(cell.colspan, &multirow(cell.rowspan, &content));
            cells.push(rendered);

            if x < columns {
                pending[x] = PendingSpan {
                    rows_left: cell.rowspan,
                    cols: cell.colspan,
                };
            }
            // A one-row cell closes its range immediately; a taller one
            // waits for its last covered row.
            if cell.rowspan == 1 {
                rules.push_str(&cline(x, cell.colspan));
            }
            x += cell.colspan;
        }

        // Spans can also cover the tail of a row after its own cells
        // ran out.
        while x < columns && pending[x].rows_left > 1 {
            x = emit_placeholder(&mut pending, x, &mut cells, &mut rules);
        }

        out.push_str(&cells.join(" & \n"));
        out.push_str(" \\\\");
        out.push(' ');
        out.push_str(&rules);
        out.push_str("\n\n");
    }

    out.push_str("\\hline\n");
    out.push_str("\\end{tabular}\n");
    out.push_str("\\end{center}\n");
    out
}

fn emit_placeholder(
    pending: &mut [PendingSpan],
    x: usize,
    cells: &mut Vec<String>,
    rules: &mut String,
) -> usize {
    pending[x].rows_left -= 1;
    let cols = pending[x].cols;
    cells.push(multicol(cols, " "));
    if pending[x].rows_left == 1 {
        rules.push_str(&cline(x, cols));
    }
    x + cols
}

/// Column-width specifiers: each column's relative share of the text
/// width, minus the padding reduction, rounded to three decimals.
fn column_specs(table: &Table) -> Vec<String> {
    let total: f64 = table.columns.iter().map(|c| c.width).sum();
    table
        .columns
        .iter()
        .map(|column| {
            let width = round3(column.width / total - WIDTH_REDUCTION);
            format!("m{{{}\\textwidth}}", width)
        })
        .collect()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn cline(x: usize, cols: usize) -> String {
    format!("\\cline{{{}-{}}} ", x + 1, x + cols)
}

fn multicol(width: usize, content: &str) -> String {
    if width <= 1 {
        content.to_string()
    } else {
        format!("\\multicolumn{{{}}}{{|c|}}{{{}}}", width, content)
    }
}

fn multirow(height: usize, content: &str) -> String {
    if height <= 1 {
        content.to_string()
    } else {
        format!("\\multirow{{{}}}{{*}}{{{}}}", height, content)
    }
}

/// Raw source lines still need prose escaping; pre-rendered fragments
/// pass through.
fn cell_content(cell: &Cell) -> String {
    match &cell.content {
        CellContent::Lines(lines) => tex::escape_text(&lines.join("\n")),
        CellContent::Rendered(text) => text.clone(),
    }
}
