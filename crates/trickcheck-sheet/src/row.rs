//! Header-indexed CSV rows.
//!
//! The first record of a sheet is its header; every later record becomes a
//! `Row` that looks cells up by header name.

use crate::error::SheetError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

/// Separator for list-valued cells (`Tags`, `Child Tags`).
pub const LIST_SEPARATOR: &str = ", ";

const TRUE_LITERAL: &str = "TRUE";

/// One data row of a sheet.
#[derive(Debug, Clone)]
pub struct Row {
    number: usize,
    cells: Vec<String>,
    headers: Rc<BTreeMap<String, usize>>,
}

impl Row {
    /// Build a row from raw cells and a header list (test and adapter use).
    pub fn new(number: usize, headers: &[&str], cells: &[&str]) -> Self {
        Self {
            number,
            cells: cells.iter().map(|c| (*c).to_string()).collect(),
            headers: Rc::new(index_headers(headers.iter().copied())),
        }
    }

    /// 1-based sheet row number; the header is row 1.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Raw cell text.
    pub fn string(&self, column: &str) -> Result<&str, SheetError> {
        self.headers
            .get(column)
            .and_then(|&index| self.cells.get(index))
            .map(String::as_str)
            .ok_or_else(|| SheetError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Cell split on `", "`; an empty cell is an empty list.
    pub fn list(&self, column: &str) -> Result<Vec<String>, SheetError> {
        let cell = self.string(column)?;
        if cell.is_empty() {
            return Ok(Vec::new());
        }
        Ok(cell.split(LIST_SEPARATOR).map(str::to_string).collect())
    }

    /// True iff the cell is exactly `TRUE`.
    pub fn flag(&self, column: &str) -> Result<bool, SheetError> {
        Ok(self.string(column)? == TRUE_LITERAL)
    }

    /// Non-negative counter; an empty cell is zero.
    pub fn counter(&self, column: &str) -> Result<u32, SheetError> {
        let cell = self.string(column)?;
        if cell.is_empty() {
            return Ok(0);
        }
        let value: i64 = cell.parse().map_err(|_| SheetError::InvalidInteger {
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        if value < 0 {
            return Err(SheetError::NegativeCounter {
                column: column.to_string(),
                value,
            });
        }
        u32::try_from(value).map_err(|_| SheetError::InvalidInteger {
            column: column.to_string(),
            value: cell.to_string(),
        })
    }
}

fn index_headers<'a>(headers: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    // Duplicate headers resolve to the last occurrence.
    headers
        .enumerate()
        .map(|(index, header)| (header.to_string(), index))
        .collect()
}

/// Read all data rows from CSV text. `label` names the source in errors.
pub fn read_rows(reader: impl Read, label: &str) -> Result<Vec<Row>, SheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|source| SheetError::Csv {
            path: label.to_string(),
            source,
        })?,
        None => return Ok(Vec::new()),
    };
    let headers = Rc::new(index_headers(header.iter()));

    let mut rows = Vec::new();
    for (index, record) in records.enumerate() {
        let record = record.map_err(|source| SheetError::Csv {
            path: label.to_string(),
            source,
        })?;
        rows.push(Row {
            number: index + 2,
            cells: record.iter().map(str::to_string).collect(),
            headers: Rc::clone(&headers),
        });
    }
    Ok(rows)
}

/// Read all data rows from a CSV file.
pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<Row>, SheetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SheetError::io(path, e))?;
    let rows = read_rows(file, &path.display().to_string())?;
    log::info!("read {} row(s) from {}", rows.len(), path.display());
    Ok(rows)
}
