// Plain-text serialization: bordered header, separator rule, body lines

use super::{Alignment, Layout, Table};

const COLUMN_SEPARATOR: char = '|';
const RULE_SEPARATOR: char = '+';
const RULE_CHAR: char = '-';
const NO_ROWS: &str = "No rows";

pub(super) fn render(table: &Table, layout: &Layout) -> String {
    let mut out = String::new();

    // Header: centered labels, padded, joined by the column separator.
    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&layout.widths)
        .map(|(column, &width)| {
            format!(
                "{pad}{}{pad}",
                center(column.label_str(), width),
                pad = column.padding
            )
        })
        .collect();
    let header = header.join(&COLUMN_SEPARATOR.to_string());
    out.push_str(&header);
    out.push('\n');

    // Separator: one rule per column, width plus padding on both sides.
    let rule: Vec<String> = table
        .columns
        .iter()
        .zip(&layout.widths)
        .map(|(column, &width)| {
            RULE_CHAR
                .to_string()
                .repeat(width + 2 * column.padding.chars().count())
        })
        .collect();
    out.push_str(&rule.join(&RULE_SEPARATOR.to_string()));
    out.push('\n');

    match &table.data {
        Some(data) => {
            for record in data {
                // Skipped, not reported: see the Table invariant.
                if record.len() != table.columns.len() {
                    continue;
                }
                let cells: Vec<String> = table
                    .columns
                    .iter()
                    .zip(&layout.widths)
                    .zip(record)
                    .map(|((column, &width), cell)| {
                        let value = column.format.display(cell);
                        let justified = match column.alignment {
                            Some(Alignment::Left) => pad_right(&value, width),
                            Some(Alignment::Right) => pad_left(&value, width),
                            Some(Alignment::Center) => center(&value, width),
                            // No alignment set: emit unjustified.
                            None => value,
                        };
                        format!("{pad}{justified}{pad}", pad = column.padding)
                    })
                    .collect();
                out.push_str(&cells.join(&COLUMN_SEPARATOR.to_string()));
                out.push('\n');
            }
        }
        None => {
            // No rows supplied at all: one placeholder line exactly as
            // wide as the header line.
            out.push_str(&center(NO_ROWS, header.chars().count()));
            out.push('\n');
        }
    }

    out
}

/// Center `s` in `width`, odd leftover space going to the right. Header
/// and body share this helper so equal strings center identically.
fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn pad_left(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - len), s)
}

fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - len))
}
