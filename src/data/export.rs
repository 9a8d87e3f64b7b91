use std::io::Write;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::model::{FacilityRecord, Field};
use crate::error::ExportError;

/// Write `records` as CSV: one unquoted header row, then every field
/// double-quoted. Rows are joined with `\n`; there is no trailing newline.
pub fn write_csv<'a, W, I>(records: I, mut writer: W) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a FacilityRecord>,
{
    let header: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
    writer.write_all(header.join(",").as_bytes())?;

    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        csv_writer.serialize(record)?;
    }
    let mut body = csv_writer.into_inner().map_err(|e| e.into_error())?;

    // The csv writer terminates every row; drop the last terminator.
    if body.last() == Some(&b'\n') {
        body.pop();
    }
    if !body.is_empty() {
        writer.write_all(b"\n")?;
        writer.write_all(&body)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn to_csv_string<'a, I>(records: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a FacilityRecord>,
{
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Suggested download name, e.g. `firms_search_results_2025-05-07.csv`.
pub fn default_file_name(date: NaiveDate) -> String {
    format!("firms_search_results_{}.csv", date.format("%Y-%m-%d"))
}

/// [`default_file_name`] for the current UTC date.
pub fn todays_file_name() -> String {
    default_file_name(Utc::now().date_naive())
}

pub fn export_to_path<'a, I>(records: I, path: &Path) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a FacilityRecord>,
{
    let file = std::fs::File::create(path)?;
    write_csv(records, std::io::BufWriter::new(file))?;
    log::info!("Exported search results to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FacilityRecord {
        FacilityRecord {
            code: "C556".into(),
            name: "Port \"Alpha\", Inc.".into(),
            facility_type: "Pier".into(),
            street_address: "1 Dock St".into(),
            city: "Los Angeles".into(),
            state: "CA".into(),
            zip: "90731".into(),
            country: "US".into(),
            status: String::new(),
        }
    }

    #[test]
    fn header_then_quoted_rows() {
        let rec = record();
        let out = to_csv_string([&rec]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "FIRMS Code,FIRMS Name,Facility Type,Street Address,City,State,Zip,Country,FIRMS Status"
        );
        assert_eq!(
            lines[1],
            r#""C556","Port ""Alpha"", Inc.","Pier","1 Dock St","Los Angeles","CA","90731","US","""#
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn empty_result_set_is_header_only() {
        let out = to_csv_string(std::iter::empty()).unwrap();
        assert_eq!(
            out,
            "FIRMS Code,FIRMS Name,Facility Type,Street Address,City,State,Zip,Country,FIRMS Status"
        );
    }

    #[test]
    fn rows_are_joined_without_trailing_newline() {
        let a = record();
        let b = FacilityRecord {
            code: "X100".into(),
            name: "Two\nLines".into(),
            ..record()
        };
        let out = to_csv_string([&a, &b]).unwrap();
        assert!(!out.ends_with('\n'));
        assert!(out.ends_with(r#""US","""#));
        assert!(out.contains("\"Two\nLines\""));
    }

    #[test]
    fn todays_file_name_uses_utc_date() {
        let before = Utc::now().date_naive();
        let name = todays_file_name();
        let after = Utc::now().date_naive();
        assert!(name == default_file_name(before) || name == default_file_name(after));
    }

    #[test]
    fn export_reads_back_with_csv_reader() {
        let a = record();
        let b = FacilityRecord {
            code: "X100".into(),
            ..record()
        };
        let out = to_csv_string([&a, &b]).unwrap();

        // Header labels differ from field names, so deserialise by position.
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let back: Vec<FacilityRecord> = reader
            .records()
            .map(|row| row.unwrap().deserialize(None).unwrap())
            .collect();
        assert_eq!(back, vec![a, b]);
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
        assert_eq!(default_file_name(date), "firms_search_results_2025-05-07.csv");
    }

    #[test]
    fn export_to_path_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_file_name(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()));
        let rec = record();
        export_to_path([&rec], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("FIRMS Code,"));
        assert!(text.contains("\"C556\""));
    }
}
