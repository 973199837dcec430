//! Delimited tables with lower-cased headers and WKT geometry columns.

use std::fs::File;
use std::path::Path;

use geo::Geometry;
use wkt::TryFromWkt;

use crate::error::DataLoadError;

/// A fully read CSV table
pub(crate) struct CsvTable {
    pub file: String,
    headers: Vec<String>,
    records: Vec<csv::StringRecord>,
}

impl CsvTable {
    pub fn read(path: &Path) -> Result<Self, DataLoadError> {
        if !path.is_file() {
            return Err(DataLoadError::MissingFile { path: path.to_path_buf() });
        }

        let file = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("table")
            .to_string();

        let handle = File::open(path).map_err(|e| DataLoadError::MalformedRow {
            file: file.clone(),
            row: 0,
            reason: e.to_string(),
        })?;

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(handle);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DataLoadError::MalformedRow {
                file: file.clone(),
                row: 0,
                reason: format!("cannot read header row: {}", e),
            })?
            .iter()
            .map(|h| h.to_lowercase())
            .collect();

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| DataLoadError::MalformedRow {
                file: file.clone(),
                row: idx + 1,
                reason: e.to_string(),
            })?;
            records.push(record);
        }

        tracing::debug!(file = %file, rows = records.len(), "Read table");

        Ok(Self { file, headers, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn column(&self, name: &str) -> Result<usize, DataLoadError> {
        self.optional_column(name).ok_or_else(|| DataLoadError::MissingColumn {
            file: self.file.clone(),
            column: name.to_string(),
        })
    }

    pub fn optional_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate `(row, record)` with 1-based data row numbers
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().enumerate().map(move |(idx, record)| Row {
            file: &self.file,
            number: idx + 1,
            record,
        })
    }
}

/// One data row plus enough context to report errors against it
pub(crate) struct Row<'a> {
    file: &'a str,
    pub number: usize,
    record: &'a csv::StringRecord,
}

impl<'a> Row<'a> {
    pub fn text(&self, column: usize) -> &'a str {
        self.record.get(column).unwrap_or("").trim()
    }

    pub fn optional_text(&self, column: Option<usize>) -> &'a str {
        column.map(|c| self.text(c)).unwrap_or("")
    }

    pub fn geometry(&self, column: usize) -> Result<Geometry<f64>, DataLoadError> {
        let text = self.text(column);
        if text.is_empty() {
            return Err(self.invalid_geometry("empty geometry".to_string()));
        }
        Geometry::<f64>::try_from_wkt_str(text).map_err(|e| self.invalid_geometry(e.to_string()))
    }

    pub fn float(&self, column: usize, name: &str) -> Result<f64, DataLoadError> {
        let text = self.text(column);
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.not_numeric(name, text))
    }

    /// Integers written as `42` or `42.0` are accepted
    pub fn integer(&self, column: usize, name: &str) -> Result<i64, DataLoadError> {
        let text = self.text(column);
        parse_integer(text).ok_or_else(|| self.not_numeric(name, text))
    }

    /// Empty cells are `None`; anything else must be an integer
    pub fn optional_integer(
        &self,
        column: Option<usize>,
        name: &str,
    ) -> Result<Option<i64>, DataLoadError> {
        let text = self.optional_text(column);
        if text.is_empty() || text.eq_ignore_ascii_case("nan") {
            return Ok(None);
        }
        parse_integer(text).map(Some).ok_or_else(|| self.not_numeric(name, text))
    }

    pub fn invalid_geometry(&self, reason: String) -> DataLoadError {
        DataLoadError::InvalidGeometry { file: self.file.to_string(), row: self.number, reason }
    }

    fn not_numeric(&self, column: &str, value: &str) -> DataLoadError {
        DataLoadError::NotNumeric {
            file: self.file.to_string(),
            row: self.number,
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    // Columns with gaps are often exported as floats
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}
