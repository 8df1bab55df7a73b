use once_cell::sync::Lazy;
use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

/// # Summary Tables
///
/// Labeled values from a report section are collected into [`Metrics`] and
/// rendered as a small boxed two-column table:
///
/// ```text
/// ┌─────────────────────┬────────────┐
/// │ 📄 Indexed Pages    │ 8/8 (100%) │
/// │ 👆 Clicks           │ 150        │
/// └─────────────────────┴────────────┘
/// ```
///
/// Several tables can be laid out next to each other with [`side_by_side`],
/// which wraps them in a borderless outer table.
static TABLE_FORMAT: Lazy<TableFormat> = Lazy::new(|| {
    FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(&[LinePosition::Top], LineSeparator::new('─', '┬', '┌', '┐'))
        .separators(
            &[LinePosition::Bottom],
            LineSeparator::new('─', '┴', '└', '┘'),
        )
        .padding(1, 1)
        .build()
});

pub static CLEAN_FORMAT: Lazy<TableFormat> =
    Lazy::new(|| FormatBuilder::new().padding(0, 2).build());

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: &'static str,
    pub value: String,
}

impl Entry {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Metrics(pub Vec<Entry>);

impl Metrics {
    pub fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.0.push(Entry::new(label, value));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn build_table(&self) -> String {
        let mut table = Table::new();
        table.set_format(*TABLE_FORMAT);
        for entry in &self.0 {
            table.add_row(Row::new(vec![
                Cell::new(entry.label),
                Cell::new(&entry.value),
            ]));
        }
        table.to_string()
    }
}

/// Renders the non-empty tables next to each other.
pub fn side_by_side(tables: &[&Metrics]) -> String {
    let cells: Vec<Cell> = tables
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| Cell::new(m.build_table().as_str()))
        .collect();
    if cells.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.set_format(*CLEAN_FORMAT);
    table.add_row(Row::new(cells));
    table.to_string()
}
