use crate::{data::ScanSample, error::ScanError};
use csv::{ReaderBuilder, StringRecord, Trim};
use itertools::Itertools;
use std::{fs::File, io::Read, path::Path};

/// Loads every data row of a scan file.
///
/// The first line is a header and is skipped. Column 0 is the angle in
/// degrees and column 1 the distance; extra columns are ignored.
pub fn load_scan(path: impl AsRef<Path>) -> Result<Vec<ScanSample>, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScanError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    read_scan(file)
}

pub fn read_scan<R: Read>(reader: R) -> Result<Vec<ScanSample>, ScanError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    reader
        .records()
        .map(|record| parse_record(&record?))
        .try_collect()
}

fn parse_record(record: &StringRecord) -> Result<ScanSample, ScanError> {
    let line = record.position().map(|pos| pos.line()).unwrap_or(0);
    let field = |column: usize, accept: fn(f64) -> bool| -> Result<f64, ScanError> {
        let value = record
            .get(column)
            .ok_or(ScanError::MissingField { line, column })?;

        value
            .parse::<f64>()
            .ok()
            .filter(|&v| accept(v))
            .ok_or_else(|| ScanError::Parse {
                line,
                column,
                value: value.to_string(),
            })
    };

    Ok(ScanSample {
        // "NaN" and "inf" parse as f64 but cannot be placed on the plot.
        angle_deg: field(0, f64::is_finite)?,
        // A range reading is never below zero.
        distance: field(1, |v| v.is_finite() && v >= 0.0)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read(text: &str) -> Result<Vec<ScanSample>, ScanError> {
        read_scan(text.as_bytes())
    }

    #[test]
    fn skips_header_and_keeps_row_order() {
        let samples = read("angle,distance\n0,10\n90,20\n180,5\n").unwrap();
        let pairs: Vec<_> = samples.iter().map(|s| (s.angle_deg, s.distance)).collect();
        assert_eq!(pairs, vec![(0.0, 10.0), (90.0, 20.0), (180.0, 5.0)]);
    }

    #[test]
    fn first_line_is_skipped_even_if_numeric() {
        let samples = read("1,2\n3,4\n").unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].angle_deg, 3.0);
    }

    #[test]
    fn ignores_extra_columns_and_whitespace() {
        let samples = read("angle,distance,quality\n 12.5 , 1000.25 ,15\n13,999,7,extra\n").unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].angle_deg, 12.5);
        assert_eq!(samples[0].distance, 1000.25);
        assert_eq!(samples[1].distance, 999.0);
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(read("angle,distance\n").unwrap().is_empty());
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_field() {
        let err = read("angle,distance\n0,10\nabc,20\n").unwrap_err();
        match err {
            ScanError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, 0);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_finite_distance() {
        let err = read("angle,distance\n0,NaN\n").unwrap_err();
        assert!(matches!(err, ScanError::Parse { column: 1, .. }));
    }

    #[test]
    fn rejects_negative_distance() {
        let err = read("a,d\n0,-10\n90,-20\n").unwrap_err();
        match err {
            ScanError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 1);
                assert_eq!(value, "-10");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accepts_negative_angle_and_zero_distance() {
        let samples = read("a,d\n-45,0\n").unwrap();
        assert_eq!(samples[0].angle_deg, -45.0);
        assert_eq!(samples[0].distance, 0.0);
    }

    #[test]
    fn rejects_short_row() {
        let err = read("angle,distance\n0,10\n42\n").unwrap_err();
        assert!(matches!(
            err,
            ScanError::MissingField { line: 3, column: 1 }
        ));
    }

    #[test]
    fn loads_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "angle,distance\n0,10\n90,20\n").unwrap();
        let samples = load_scan(file.path()).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = load_scan(&path).unwrap_err();
        match err {
            ScanError::FileAccess { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
