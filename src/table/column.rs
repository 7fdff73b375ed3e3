// Column model: identity, layout hints, and per-column cell capabilities

use std::cmp::Ordering;

use crate::models::CellValue;

/// Horizontal justification for a column's body cells. A column with no
/// alignment set emits its cells unjustified (no fill to column width),
/// matching the historical renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Per-column cell capability: display conversion and sort comparison.
/// Injected at column construction; [`DefaultFormat`] covers the generic
/// case.
pub trait CellFormat {
    fn display(&self, value: &CellValue) -> String;
    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering;
}

/// Generic string conversion and natural ordering.
pub struct DefaultFormat;

impl CellFormat for DefaultFormat {
    fn display(&self, value: &CellValue) -> String {
        value.to_string()
    }

    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        a.natural_cmp(b)
    }
}

/// A named, formatted slot within a table, governing width, alignment,
/// padding, display conversion and sort comparison for its position across
/// all records.
pub struct Column {
    id: String,
    label: String,
    pub(super) alignment: Option<Alignment>,
    /// Starts at label length; only ever widened by layout, never narrowed.
    pub(super) width: usize,
    pub(super) padding: String,
    pub(super) format: Box<dyn CellFormat>,
}

impl Column {
    /// New column with the id as label, one-space padding, no alignment,
    /// and the default cell format.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = id.clone();
        let width = label.chars().count();
        Self {
            id,
            label,
            alignment: None,
            width,
            padding: " ".to_string(),
            format: Box::new(DefaultFormat),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self.width = self.width.max(self.label.chars().count());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Padding string placed on both sides of every cell; empty disables
    /// padding entirely.
    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn format(mut self, format: Box<dyn CellFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label_str(&self) -> &str {
        &self.label
    }

    /// Current column width. Reflects the widest cell seen by the most
    /// recent layout pass, and is monotone non-decreasing.
    pub fn width(&self) -> usize {
        self.width
    }

    pub(super) fn widen(&mut self, width: usize) {
        self.width = self.width.max(width);
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("alignment", &self.alignment)
            .field("width", &self.width)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}
