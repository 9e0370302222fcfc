use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;
use thiserror::Error;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// A named sheet: ordered columns and rows, written exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row width for {}", self.name);
        self.rows.push(row);
    }

    /// Cell in `row` under the column named `column`.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.columns.iter().position(|name| name == column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Errors raised while persisting tables.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to encode tables as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Something that persists an ordered list of tables as one artifact.
pub trait TableSink {
    fn write_tables(&mut self, tables: &[Table]) -> Result<(), SinkError>;
}

/// Writes one `.xlsx` workbook, one worksheet per table.
///
/// The workbook is rendered in memory and written with a single call, so a
/// failure never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct XlsxSink {
    path: PathBuf,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSink for XlsxSink {
    fn write_tables(&mut self, tables: &[Table]) -> Result<(), SinkError> {
        let bytes = render_workbook(tables)?;
        fs::write(&self.path, bytes).map_err(|source| SinkError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Render tables into `.xlsx` bytes.
pub fn render_workbook(tables: &[Table]) -> Result<Vec<u8>, SinkError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for table in tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.name.as_str())?;

        for (col, name) in table.columns.iter().enumerate() {
            worksheet.write_string_with_format(0, col_num(col), name.as_str(), &header)?;
        }

        for (idx, row) in table.rows.iter().enumerate() {
            let row_num = u32::try_from(idx + 1).unwrap_or(u32::MAX);
            for (col, cell) in row.iter().enumerate() {
                let col = col_num(col);
                match cell {
                    // Empty strings stay blank cells, as a spreadsheet reviewer expects.
                    Cell::Text(value) if value.is_empty() => {}
                    Cell::Text(value) => {
                        worksheet.write_string(row_num, col, value.as_str())?;
                    }
                    Cell::Int(value) => {
                        worksheet.write_number(row_num, col, *value as f64)?;
                    }
                    Cell::Bool(value) => {
                        worksheet.write_boolean(row_num, col, *value)?;
                    }
                }
            }
        }

        worksheet.autofit();
    }

    Ok(workbook.save_to_buffer()?)
}

fn col_num(col: usize) -> u16 {
    u16::try_from(col).unwrap_or(u16::MAX)
}

/// Writes tables as a pretty JSON array.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TableSink for JsonSink<W> {
    fn write_tables(&mut self, tables: &[Table]) -> Result<(), SinkError> {
        serde_json::to_writer_pretty(&mut self.out, tables)?;
        writeln!(self.out).map_err(|source| SinkError::Io {
            path: "<json output>".to_string(),
            source,
        })
    }
}
