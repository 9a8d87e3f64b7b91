use std::borrow::Cow;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::model::{FacilityDataset, FacilityRecord, Field};
use crate::error::LoadError;

/// Substring identifying the header row of the published FIRMS spreadsheet.
/// Everything up to and including that row is preamble.
pub const HEADER_MARKER: &str = "District Port Code,FIRMS Code,FIRMS Name";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse raw FIRMS CSV text into records, in source order.
///
/// Rows missing a code, name or facility type are dropped silently; only a
/// missing header row (or an unreadable CSV stream) is an error.
pub fn parse_records(raw: &str) -> Result<Vec<FacilityRecord>, LoadError> {
    parse_dataset(raw).map(|ds| ds.records)
}

/// Parse raw FIRMS CSV text, keeping load diagnostics alongside the records.
pub fn parse_dataset(raw: &str) -> Result<FacilityDataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut rows = reader.records();

    // Skip the preamble up to and including the header row.
    let mut header_found = false;
    for result in rows.by_ref() {
        let row = result?;
        if joined(&row, ",").contains(HEADER_MARKER) {
            header_found = true;
            break;
        }
    }
    if !header_found {
        return Err(LoadError::HeaderNotFound {
            marker: HEADER_MARKER,
        });
    }

    let mut records = Vec::new();
    let mut dropped_rows = 0;

    for result in rows {
        let row = result?;
        if joined(&row, "").trim().is_empty() {
            continue;
        }

        let record = map_row(&row);
        if record.is_well_formed() {
            records.push(record);
        } else {
            dropped_rows += 1;
        }
    }

    log::debug!(
        "parsed {} facility records, dropped {dropped_rows} incomplete rows",
        records.len()
    );

    Ok(FacilityDataset {
        records,
        source: None,
        dropped_rows,
    })
}

/// Read and parse a FIRMS CSV file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the
/// government export is not consistently encoded.
pub fn load_file(path: &Path) -> Result<FacilityDataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::RetrievalFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!("{} is not valid UTF-8, invalid bytes replaced", path.display());
    }

    let mut dataset = parse_dataset(&text)?;
    dataset.source = Some(path.to_path_buf());

    log::info!(
        "Loaded {} facilities from {} ({} rows dropped)",
        dataset.len(),
        path.display(),
        dataset.dropped_rows
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

fn joined(row: &StringRecord, sep: &str) -> String {
    row.iter().collect::<Vec<_>>().join(sep)
}

fn map_row(row: &StringRecord) -> FacilityRecord {
    let mut record = FacilityRecord::default();
    for field in Field::ALL {
        *record.get_mut(field) = clean(row.get(field.source_column()).unwrap_or(""));
    }
    record
}

/// Collapse embedded line breaks to a space and trim.
fn clean(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "District Port Code,FIRMS Code,FIRMS Name,FIRMS Status,c4,c5,Facility Type,c7,c8,Street Address,c10,c11,c12,c13,c14,c15,c16,City,State,Zip,Country";

    /// Build a 21-column row from the values the loader reads.
    fn row(code: &str, name: &str, status: &str, ty: &str, addr: &str, city: &str) -> String {
        let mut cols = vec![String::new(); 21];
        cols[0] = "2704".into();
        cols[1] = code.into();
        cols[2] = name.into();
        cols[3] = status.into();
        cols[6] = ty.into();
        cols[9] = addr.into();
        cols[17] = city.into();
        cols[18] = "CA".into();
        cols[19] = "90731".into();
        cols[20] = "US".into();
        cols.join(",")
    }

    #[test]
    fn missing_header_is_an_error() {
        let raw = "Report,Generated\nfoo,bar\n";
        let err = parse_records(raw).unwrap_err();
        assert!(matches!(err, LoadError::HeaderNotFound { .. }));
    }

    #[test]
    fn empty_input_is_header_not_found() {
        assert!(matches!(
            parse_records("").unwrap_err(),
            LoadError::HeaderNotFound { .. }
        ));
    }

    #[test]
    fn preamble_and_header_are_skipped() {
        let raw = format!(
            "FIRMS Codes,,\nUpdated 05/07/2025,,\n{HEADER}\n{}\n{}\n",
            row("C556", "Port Alpha", "ACTIVE", "Pier", "1 Dock St", "Los Angeles"),
            row("X100", "Relax Storage", "ACTIVE", "Bonded Warehouse", "9 Elm", "Dallas"),
        );
        let records = parse_records(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "C556");
        assert_eq!(records[0].name, "Port Alpha");
        assert_eq!(records[0].status, "ACTIVE");
        assert_eq!(records[0].facility_type, "Pier");
        assert_eq!(records[0].street_address, "1 Dock St");
        assert_eq!(records[0].city, "Los Angeles");
        assert_eq!(records[0].state, "CA");
        assert_eq!(records[0].zip, "90731");
        assert_eq!(records[0].country, "US");
        assert_eq!(records[1].code, "X100");
    }

    #[test]
    fn header_marker_may_be_preceded_by_other_text() {
        let raw = format!(
            "junk,{HEADER}\n{}\n",
            row("C1", "A", "ACTIVE", "Pier", "", "")
        );
        assert_eq!(parse_records(&raw).unwrap().len(), 1);
    }

    #[test]
    fn quoted_fields_are_cleaned() {
        let mut cols = vec![String::new(); 21];
        cols[1] = "  C556 ".into();
        cols[2] = "\"Port\nAlpha, Inc.\"".into();
        cols[6] = "\" Pier\r\n\"".into();
        cols[9] = "\"12 \"\"A\"\" St\"".into();
        let raw = format!("{HEADER}\n{}\n", cols.join(","));

        let records = parse_records(&raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "C556");
        assert_eq!(records[0].name, "Port Alpha, Inc.");
        assert_eq!(records[0].facility_type, "Pier");
        assert_eq!(records[0].street_address, "12 \"A\" St");
    }

    #[test]
    fn short_rows_yield_empty_fields() {
        let raw = format!("{HEADER}\n2704,C556,Port Alpha,ACTIVE,,,Pier\n");
        let records = parse_records(&raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].facility_type, "Pier");
        assert_eq!(records[0].city, "");
        assert_eq!(records[0].country, "");
    }

    #[test]
    fn blank_and_incomplete_rows_are_dropped() {
        let raw = format!(
            "{HEADER}\n,,,,,,,,,,,,,,,,,,,,\n{}\n{}\n{}\n{}\n",
            row("", "No Code", "ACTIVE", "Pier", "", ""),
            row("C2", "", "ACTIVE", "Pier", "", ""),
            row("C3", "No Type", "ACTIVE", "  ", "", ""),
            row("C4", "Kept", "", "Pier", "", ""),
        );
        let dataset = parse_dataset(&raw).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].code, "C4");
        assert_eq!(dataset.dropped_rows, 3);
    }

    #[test]
    fn header_only_yields_no_records() {
        let records = parse_records(&format!("{HEADER}\n")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "{}", row("C556", "Port Alpha", "ACTIVE", "Pier", "", "")).unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn load_file_tolerates_latin1_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        let mut line = row("C556", "Caf_", "ACTIVE", "Pier", "", "").into_bytes();
        let pos = line.iter().position(|&b| b == b'_').unwrap();
        line[pos] = 0xE9;
        file.write_all(&line).unwrap();
        writeln!(file).unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.records[0].name, "Caf\u{FFFD}");
    }

    #[test]
    fn missing_file_is_retrieval_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::RetrievalFailed { .. }));
    }
}
