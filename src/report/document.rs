//! In-memory workbook representation
//!
//! A `WorkbookDocument` is a format-independent tree (sheet → rows → cells).
//! Every cell carries its value and a style tag; the serializer decides how a
//! tag maps to fonts and fills.

use std::collections::BTreeMap;

/// Visual role of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStyle {
    /// Plain cell, no formatting
    #[default]
    Default,
    /// Report title: bold, large, filled background
    Header,
    /// Section label: underlined, filled background
    SectionTitle,
    /// Wrapped text
    Wrap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub column: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: u32,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn cell(&self, column: u16) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column == column)
    }

    /// Text values of the row, in column order
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().filter_map(|c| c.value.as_text()).collect()
    }
}

/// Column width in 1/256ths of a character, the unit legacy spreadsheet APIs use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidth {
    pub column: u16,
    pub units: u32,
}

impl ColumnWidth {
    /// Width in characters
    pub fn chars(&self) -> f64 {
        f64::from(self.units) / 256.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub column_widths: Vec<ColumnWidth>,
    /// Rows sorted by index; gaps are blank rows
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows
            .binary_search_by_key(&index, |r| r.index)
            .ok()
            .map(|pos| &self.rows[pos])
    }

    pub fn cell(&self, row: u32, column: u16) -> Option<&Cell> {
        self.row(row).and_then(|r| r.cell(column))
    }

    pub fn width_of(&self, column: u16) -> Option<u32> {
        self.column_widths
            .iter()
            .find(|w| w.column == column)
            .map(|w| w.units)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookDocument {
    pub sheets: Vec<Sheet>,
}

impl WorkbookDocument {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Incremental construction of a `Sheet`; rows may be added in any order
#[derive(Debug)]
pub struct SheetBuilder {
    name: String,
    column_widths: BTreeMap<u16, u32>,
    rows: BTreeMap<u32, BTreeMap<u16, Cell>>,
}

impl SheetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_widths: BTreeMap::new(),
            rows: BTreeMap::new(),
        }
    }

    pub fn column_width(&mut self, column: u16, units: u32) -> &mut Self {
        self.column_widths.insert(column, units);
        self
    }

    pub fn text(
        &mut self,
        row: u32,
        column: u16,
        text: impl Into<String>,
        style: CellStyle,
    ) -> &mut Self {
        self.put(row, column, CellValue::Text(text.into()), style)
    }

    pub fn number(&mut self, row: u32, column: u16, value: f64, style: CellStyle) -> &mut Self {
        self.put(row, column, CellValue::Number(value), style)
    }

    fn put(&mut self, row: u32, column: u16, value: CellValue, style: CellStyle) -> &mut Self {
        self.rows.entry(row).or_default().insert(
            column,
            Cell {
                column,
                value,
                style,
            },
        );
        self
    }

    pub fn finish(self) -> Sheet {
        Sheet {
            name: self.name,
            column_widths: self
                .column_widths
                .into_iter()
                .map(|(column, units)| ColumnWidth { column, units })
                .collect(),
            rows: self
                .rows
                .into_iter()
                .map(|(index, cells)| Row {
                    index,
                    cells: cells.into_values().collect(),
                })
                .collect(),
        }
    }
}
