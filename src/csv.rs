// src/csv.rs
//! Headered CSV tables, looked up by column name.

use std::io;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{Error, Result};

/* ---------------- Reading ---------------- */

pub struct Table {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Read a whole CSV file. Short rows are tolerated; missing cells read as empty.
    pub fn read(path: &Path) -> Result<Self> {
        let rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
        Self::load(path, rdr)
    }

    /// Build from in-memory text (tests, fixtures).
    pub fn from_text(name: &str, text: &str) -> Result<Self> {
        let rdr = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
        Self::load(Path::new(name), rdr)
    }

    /// Headers trimmed and stripped of a leading BOM, then every record.
    fn load<R: io::Read>(path: &Path, mut rdr: Reader<R>) -> Result<Self> {
        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
            .collect();

        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { path: path.to_path_buf(), headers, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index by exact header name.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require(&self, name: &str) -> Result<usize> {
        self.col(name).ok_or_else(|| Error::MissingColumn {
            path: self.path.clone(),
            column: s!(name),
        })
    }

    /// Rows with their 1-based data line number (header excluded).
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, rec)| Row { line: i + 1, rec })
    }
}

#[derive(Clone, Copy)]
pub struct Row<'a> {
    pub line: usize,
    rec: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// Trimmed cell; empty when the row is short.
    pub fn get(&self, col: usize) -> &'a str {
        self.rec.get(col).map(str::trim).unwrap_or("")
    }

    /// Non-empty cell, if the column exists.
    pub fn opt(&self, col: Option<usize>) -> Option<&'a str> {
        col.map(|c| self.get(c)).filter(|v| !v.is_empty() && !is_nan(v))
    }
}

/// Spreadsheet exports write missing numbers as "NaN"/"nan".
fn is_nan(v: &str) -> bool {
    v.eq_ignore_ascii_case("nan")
}

/// Integer cell. Accepts integral floats ("5.0") as spreadsheet exports write them.
pub fn parse_int(v: &str) -> Option<i64> {
    let v = v.trim();
    if let Ok(n) = v.parse::<i64>() {
        return Some(n);
    }
    let f = v.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_accepts_integral_floats() {
        assert_eq!(parse_int("5"), Some(5));
        assert_eq!(parse_int(" 12 "), Some(12));
        assert_eq!(parse_int("5.0"), Some(5));
        assert_eq!(parse_int("5.5"), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn table_lookup_by_header() {
        let t = Table::from_text("t.csv", "Item_ID,Item_Name\n1,\"Sword, Long\"\n2\n").unwrap();
        assert_eq!(t.len(), 2);
        let id = t.require("Item_ID").unwrap();
        let name = t.col("Item_Name");
        let rows: Vec<_> = t.rows().collect();
        assert_eq!(rows[0].get(id), "1");
        assert_eq!(rows[0].opt(name), Some("Sword, Long"));
        assert_eq!(rows[1].opt(name), None);
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn leading_bom_is_stripped_from_text_and_files() {
        let text = "\u{feff}Item_ID,Item_Name\n1,Falchion\n";
        let t = Table::from_text("bom.csv", text).unwrap();
        assert_eq!(t.col("Item_ID"), Some(0));

        let path = std::env::temp_dir().join("troopdb_csv_bom.csv");
        std::fs::write(&path, text).unwrap();
        let t = Table::read(&path).unwrap();
        assert_eq!(t.col("Item_ID"), Some(0));
        assert_eq!(t.rows().next().unwrap().get(1), "Falchion");
    }

    #[test]
    fn missing_column_is_an_error() {
        let t = Table::from_text("t.csv", "A,B\n1,2\n").unwrap();
        let err = t.require("C").unwrap_err();
        assert!(err.to_string().contains("missing column 'C'"));
    }
}
