// File: crates/outlook-core/src/table.rs
// Summary: Parsed delimited table with trimmed headers and per-cell accessors that treat blanks as missing.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{OutlookError, OutlookResult};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from raw headers and cells. Header names are trimmed.
    pub fn new<I, S>(headers: I, rows: Vec<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers = headers.into_iter().map(|h| h.as_ref().trim().to_string()).collect();
        Self { headers, rows }
    }

    /// Parse comma-separated text with a header row. Short rows are allowed.
    /// Invalid UTF-8 is replaced per cell, so a bad byte only spoils its own cell.
    pub fn from_reader<R: Read>(reader: R) -> OutlookResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.byte_headers()?.iter().map(lossy).collect::<Vec<_>>();
        let mut rows = Vec::new();
        for rec in rdr.byte_records() {
            let rec = rec?;
            rows.push(rec.iter().map(lossy).collect());
        }
        let table = Self::new(headers, rows);
        debug!(headers = ?table.headers, rows = table.len(), "parsed table");
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> OutlookResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| OutlookError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column whose trimmed name equals `name`.
    pub fn column(&self, name: &str) -> OutlookResult<usize> {
        let want = name.trim();
        self.headers
            .iter()
            .position(|h| h == want)
            .ok_or_else(|| OutlookError::MissingColumn { column: want.to_string() })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row { cells })
    }
}

fn lossy(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Trimmed cell text, or `None` when the cell is absent or blank.
    pub fn cell(&self, ix: usize) -> Option<&'a str> {
        self.cells.get(ix).map(|s| s.trim()).filter(|s| !s.is_empty())
    }

    /// Finite number in the cell; unparseable text counts as missing.
    pub fn number(&self, ix: usize) -> Option<f64> {
        self.cell(ix)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    /// Whole-number year; accepts `2021` as well as `2021.0`.
    pub fn year(&self, ix: usize) -> Option<i32> {
        let s = self.cell(ix)?;
        if let Ok(y) = s.parse::<i32>() {
            return Some(y);
        }
        let v = s.parse::<f64>().ok()?;
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64 {
            Some(v as i32)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed() {
        let t = Table::from_reader(" Year , Actually got ,pol\n2020,1000,cur\n".as_bytes()).unwrap();
        assert_eq!(t.headers(), &["Year", "Actually got", "pol"]);
        assert_eq!(t.column("Actually got").unwrap(), 1);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let t = Table::new(["Year"], vec![]);
        match t.column("pol") {
            Err(OutlookError::MissingColumn { column }) => assert_eq!(column, "pol"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn blank_and_garbage_cells_are_missing() {
        let t = Table::new(["a", "b", "c", "d"], vec![vec![" ".into(), "n/a".into(), " 12.5 ".into()]]);
        let row = t.rows().next().unwrap();
        assert_eq!(row.cell(0), None);
        assert_eq!(row.number(1), None);
        assert_eq!(row.number(2), Some(12.5));
        assert_eq!(row.cell(3), None, "short rows read as missing");
    }

    #[test]
    fn invalid_utf8_spoils_only_its_cell() {
        let mut raw = b"Year,Actually got,pol,2020,2025\n2020,846,cur,".to_vec();
        raw.extend_from_slice(&[0xff, 0xfe]);
        raw.extend_from_slice(b",1500\n");
        let t = Table::from_reader(raw.as_slice()).expect("table survives a bad byte");
        let row = t.rows().next().unwrap();
        assert_eq!(row.number(1), Some(846.0));
        assert_eq!(row.number(3), None);
        assert_eq!(row.number(4), Some(1500.0));
    }

    #[test]
    fn nan_is_not_a_number() {
        let t = Table::new(["a"], vec![vec!["NaN".into()]]);
        assert_eq!(t.rows().next().unwrap().number(0), None);
    }

    #[test]
    fn years_accept_float_text() {
        let t = Table::new(["y"], vec![vec!["2021.0".into()], vec!["2021.5".into()], vec!["x".into()]]);
        let years: Vec<_> = t.rows().map(|r| r.year(0)).collect();
        assert_eq!(years, vec![Some(2021), None, None]);
    }

    #[test]
    fn unreadable_path_is_input_unavailable() {
        let err = Table::from_path("target/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, OutlookError::InputUnavailable { .. }));
    }
}
