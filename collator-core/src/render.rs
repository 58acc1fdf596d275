//! HTML rendering of a display matrix.
//!
//! Produces a standalone document with one `<table class="alignment">` per
//! segment. Content cells carry their category as CSS class; the stylesheet
//! colours the default palette and draws gap cells with a dotted border.

use crate::layout::{DisplayCell, DisplayMatrix};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>HTML collation</title>
    <style>
    td { border: 1px solid #d3d3d3; white-space: nowrap; padding: 0.25em; }
    table.alignment {
        border-collapse: separate; border-spacing: 0.25em; margin: 0.25em; border-top: 1px solid #d3d3d3;
    }
    td.green { background-color: #eaffea; }
    td.blue { background-color: #ECEFFF; }
    td.red { background-color: #ffecec; }
    td.yellow { background-color: #FFFFEE; }
    td.pink { background-color: #FEEEFF; }
    td.empty { border: 1px dotted; }
    </style>
</head>
<body>
<div id="alignment-table">
"#;

const TAIL: &str = "</div>\n</body>\n</html>\n";

/// Renders the matrix as a complete HTML document.
pub fn render_html(matrix: &DisplayMatrix) -> String {
    let mut html = String::with_capacity(HEAD.len() + TAIL.len() + matrix.len() * 1024);
    html.push_str(HEAD);

    for segment in &matrix.segments {
        html.push_str("<table class=\"alignment\">\n");
        for row in &segment.rows {
            html.push_str("<tr>");
            for cell in &row.cells {
                push_cell(&mut html, cell);
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n");
    }

    html.push_str(TAIL);
    html
}

fn push_cell(html: &mut String, cell: &DisplayCell) {
    match cell.class() {
        Some(class) => {
            html.push_str("<td class=\"");
            push_escaped(html, class);
            html.push_str("\">");
        }
        None => html.push_str("<td>"),
    }
    push_escaped(html, cell.text());
    html.push_str("</td>");
}

/// Appends `text` with HTML special characters replaced by entities.
fn push_escaped(html: &mut String, text: &str) {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        html.push_str(&text[last..i]);
        html.push_str(entity);
        last = i + 1;
    }
    html.push_str(&text[last..]);
}
