// Generic table engine: columns, layout, sorting, text/HTML serialization

mod column;
mod html;
mod text;

use std::cmp::Ordering;

pub use column::{Alignment, CellFormat, Column, DefaultFormat};

use crate::models::CellValue;

/// Rectangular data plus its column model. `data == None` means no rows
/// were supplied at all (renders a "No rows" placeholder), distinct from
/// an empty record list. A record is only rendered when its length equals
/// the column count; mismatched records are skipped silently, a
/// historical quirk this engine preserves rather than reports.
pub struct Table {
    columns: Vec<Column>,
    data: Option<Vec<Vec<CellValue>>>,
}

/// Immutable per-column widths produced by [`Table::layout`]. Rendering
/// against a fixed layout is pure, so repeated renders are byte-identical.
#[derive(Debug, Clone)]
pub struct Layout {
    pub(super) widths: Vec<usize>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            data: None,
        }
    }

    pub fn with_data(columns: Vec<Column>, data: Vec<Vec<CellValue>>) -> Self {
        Self {
            columns,
            data: Some(data),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn data(&self) -> Option<&[Vec<CellValue>]> {
        self.data.as_deref()
    }

    /// Replace the records. Column widths already widened by earlier
    /// layouts are kept, so widths stay monotone across renders.
    pub fn set_data(&mut self, data: Option<Vec<Vec<CellValue>>>) {
        self.data = data;
    }

    /// Width pass. Widens each column to its longest formatted cell (never
    /// narrows, so widths are monotone non-decreasing across repeated
    /// layouts), then snapshots the widths. Without data, widths stay at
    /// label length. The widening is an observable mutation of the columns;
    /// the render step against the returned [`Layout`] is pure.
    pub fn layout(&mut self) -> Layout {
        if let Some(data) = &self.data {
            for record in data {
                if record.len() != self.columns.len() {
                    continue;
                }
                for (column, cell) in self.columns.iter_mut().zip(record) {
                    let rendered = column.format.display(cell);
                    column.widen(rendered.chars().count());
                }
            }
        }
        Layout {
            widths: self.columns.iter().map(|c| c.width()).collect(),
        }
    }

    /// Layout + text render in one call.
    pub fn to_text(&mut self) -> String {
        let layout = self.layout();
        self.render_text(&layout)
    }

    /// Render as bordered plain text against a previously computed layout.
    pub fn render_text(&self, layout: &Layout) -> String {
        text::render(self, layout)
    }

    /// Render as a self-contained HTML document with the given title.
    pub fn render_html(&self, title: &str) -> String {
        html::render(self, title)
    }

    /// Stable multi-key ascending sort of the records. Keys resolve to
    /// columns by id; unknown keys are dropped from the key list.
    pub fn sort_ascending(&mut self, keys: &[&str]) {
        self.sort_by_keys(keys, false);
    }

    /// As [`Table::sort_ascending`], with every comparison reversed.
    pub fn sort_descending(&mut self, keys: &[&str]) {
        self.sort_by_keys(keys, true);
    }

    fn sort_by_keys(&mut self, keys: &[&str], descending: bool) {
        let indices: Vec<usize> = keys
            .iter()
            .filter_map(|key| self.columns.iter().position(|c| c.id() == *key))
            .collect();
        if indices.is_empty() {
            return;
        }
        let columns = &self.columns;
        if let Some(data) = self.data.as_mut() {
            // Vec::sort_by is stable, so equal records keep their order.
            data.sort_by(|a, b| {
                let ordering = compare_records(columns, &indices, a, b);
                if descending { ordering.reverse() } else { ordering }
            });
        }
    }
}

fn compare_records(
    columns: &[Column],
    indices: &[usize],
    a: &[CellValue],
    b: &[CellValue],
) -> Ordering {
    for &idx in indices {
        // A record too short to carry this key compares equal on it.
        let (Some(x), Some(y)) = (a.get(idx), b.get(idx)) else {
            continue;
        };
        match columns[idx].format.compare(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
