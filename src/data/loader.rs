use std::io::Read;
use std::path::Path;

use crate::error::StripesError;

use super::model::{RawDataset, RawRecord};

/// Cell contents read as "missing", following the usual pandas NA markers.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the `[age, value]` columns from a URL or a local CSV file.
///
/// `http://` and `https://` sources are fetched with a blocking GET, anything
/// else is treated as a filesystem path. Row order is preserved.
pub fn load_source(source: &str, columns: [&str; 2]) -> Result<RawDataset, StripesError> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)?
    } else {
        std::fs::read_to_string(Path::new(source))
            .map_err(|e| StripesError::retrieval(source, e))?
    };
    log::info!("retrieved {} bytes from {source}", body.len());

    let rows = parse_csv(source, body.as_bytes(), columns)?;
    log::info!("loaded {} rows with columns {columns:?}", rows.len());
    Ok(rows)
}

fn fetch_url(url: &str) -> Result<String, StripesError> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| StripesError::retrieval(url, e))?;
    response.text().map_err(|e| StripesError::retrieval(url, e))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text with a header row, keeping only the two named columns.
///
/// A missing header is a schema error. Cells that are neither NA markers nor
/// numbers make the source malformed.
pub fn parse_csv<R: Read>(
    source: &str,
    reader: R,
    [age_col, value_col]: [&str; 2],
) -> Result<RawDataset, StripesError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| StripesError::retrieval(source, format!("reading CSV headers: {e}")))?
        .clone();
    if headers.is_empty() {
        return Err(StripesError::retrieval(source, "empty CSV"));
    }

    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| StripesError::Schema {
                column: name.to_string(),
            })
    };
    let age_idx = column_index(age_col)?;
    let value_idx = column_index(value_col)?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| StripesError::retrieval(source, format!("CSV row {row_no}: {e}")))?;

        let cell = |idx: usize, col: &str| {
            parse_cell(record.get(idx).unwrap_or("")).ok_or_else(|| {
                StripesError::retrieval(
                    source,
                    format!("row {row_no}, column '{col}': not a number"),
                )
            })
        };

        rows.push(RawRecord {
            age: cell(age_idx, age_col)?,
            dt: cell(value_idx, value_col)?,
        });
    }

    Ok(rows)
}

/// `Some(None)` for a missing cell, `Some(Some(v))` for a number, `None`
/// when the text is neither. NaN and infinities count as missing.
fn parse_cell(s: &str) -> Option<Option<f64>> {
    let s = s.trim();
    if NA_MARKERS.contains(&s) {
        return Some(None);
    }
    let v = s.parse::<f64>().ok()?;
    Some(v.is_finite().then_some(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [&str; 2] = ["Age", "dT"];

    fn parse(text: &str) -> Result<RawDataset, StripesError> {
        parse_csv("test", text.as_bytes(), COLUMNS)
    }

    #[test]
    fn selects_requested_columns_in_row_order() {
        let text = "Bag,ztop,Age,Deuterium,dT\n1,0,-50,-390.9,0.88\n2,0.55,-43.5,-385.1,1.84\n";
        let rows = parse(text).unwrap();
        assert_eq!(
            rows,
            vec![
                RawRecord { age: Some(-50.0), dt: Some(0.88) },
                RawRecord { age: Some(-43.5), dt: Some(1.84) },
            ]
        );
    }

    #[test]
    fn na_markers_and_nan_are_missing() {
        let rows = parse("Age,dT\n10,0.5\n5,-2.0\n20,NaN\n30,\nNA,1.0\n40, n/a \n").unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2].dt, None);
        assert_eq!(rows[3].dt, None);
        assert_eq!(rows[4].age, None);
        assert_eq!(rows[5].dt, None);
    }

    #[test]
    fn infinite_values_are_missing() {
        let rows = parse("Age,dT\n1,inf\n2,-inf\n3,1e400\ninfinity,0.5\n").unwrap();
        assert!(rows[..3].iter().all(|r| r.dt.is_none()));
        assert_eq!(rows[3], RawRecord { age: None, dt: Some(0.5) });
    }

    #[test]
    fn empty_body_is_retrieval_error() {
        for text in ["", "\n"] {
            let err = parse(text).unwrap_err();
            assert!(matches!(err, StripesError::Retrieval { .. }), "{err}");
        }
    }

    #[test]
    fn short_rows_count_as_missing() {
        let rows = parse("Age,dT\n10\n").unwrap();
        assert_eq!(rows, vec![RawRecord { age: Some(10.0), dt: None }]);
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let rows = parse(" Age , dT \n1,2\n").unwrap();
        assert_eq!(rows[0], RawRecord { age: Some(1.0), dt: Some(2.0) });
    }

    #[test]
    fn missing_column_is_schema_error() {
        let err = parse("Age,Temp\n1,2\n").unwrap_err();
        match err {
            StripesError::Schema { column } => assert_eq!(column, "dT"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_cell_is_retrieval_error() {
        let err = parse("Age,dT\n1,warm\n").unwrap_err();
        assert!(matches!(err, StripesError::Retrieval { .. }));
        assert!(err.to_string().contains("column 'dT'"));
    }

    #[test]
    fn unreadable_path_is_retrieval_error() {
        let err = load_source("/nonexistent/epica.csv", COLUMNS).unwrap_err();
        assert!(matches!(err, StripesError::Retrieval { .. }));
    }

    #[test]
    fn loads_local_csv_file() {
        let path = std::env::temp_dir().join(format!("epica-stripes-{}.csv", std::process::id()));
        std::fs::write(&path, "Age,dT,Deuterium\n10,0.5,-390.9\n5,-2.0,-385.1\n").unwrap();

        let result = load_source(path.to_str().unwrap(), COLUMNS);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            result.unwrap(),
            vec![
                RawRecord { age: Some(10.0), dt: Some(0.5) },
                RawRecord { age: Some(5.0), dt: Some(-2.0) },
            ]
        );
    }
}
