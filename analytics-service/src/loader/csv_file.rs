use std::path::Path;

use csv::StringRecord;
use heatpump_core::Observation;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use super::LoadError;

/// Load the full dataset from a CSV file.
///
/// Expected header columns (by name):
/// - timestamp (RFC 3339, or naive `YYYY-MM-DD HH:MM:SS` taken as UTC)
/// - Location
/// - Town
/// - total_energy_kWh
/// - heatpump_pct
///
/// Normalization (UTC conversion, identifier trimming, bucket derivation)
/// happens here, once per row, inside `Observation::new`.
pub fn load_csv_dataset(path: &Path) -> Result<Vec<Observation>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.display().to_string()));
    }

    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based data row number, header line included.
        let row = idx + 2;
        records.push(parse_row(&record, &headers, row)?);
    }

    Ok(records)
}

fn parse_row(
    record: &StringRecord,
    headers: &StringRecord,
    row: usize,
) -> Result<Observation, LoadError> {
    let get = |name: &str| -> Result<&str, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|idx| record.get(idx))
            .ok_or_else(|| LoadError::Row {
                row,
                message: format!("missing column '{name}'"),
            })
    };

    let ts_str = get("timestamp")?;
    let ts = parse_timestamp(ts_str.trim()).ok_or_else(|| LoadError::Row {
        row,
        message: format!("invalid timestamp '{ts_str}'"),
    })?;

    let location = get("Location")?;
    let town = get("Town")?;

    let kwh_str = get("total_energy_kWh")?;
    let total_energy_kwh: f64 = kwh_str.trim().parse().map_err(|e| LoadError::Row {
        row,
        message: format!("invalid total_energy_kWh '{kwh_str}': {e}"),
    })?;

    let pct_str = get("heatpump_pct")?;
    let heatpump_pct: f64 = pct_str.trim().parse().map_err(|e| LoadError::Row {
        row,
        message: format!("invalid heatpump_pct '{pct_str}': {e}"),
    })?;

    Ok(Observation::new(ts, location, town, total_energy_kwh, heatpump_pct))
}

fn parse_timestamp(s: &str) -> Option<OffsetDateTime> {
    if let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(ts);
    }

    // Naive timestamps carry no offset and are taken as UTC.
    let naive = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(s, naive)
        .map(|dt| dt.assume_utc())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::{env, fs};
    use time::macros::datetime;

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_normalizes_rows() {
        let path = write_temp_csv(
            "heatpump_loader_ok.csv",
            "timestamp,Location,Town,total_energy_kWh,heatpump_pct\n\
             2023-01-31T23:30:00+01:00, tregattu 11 ,Visby,4.5,37.5\n\
             2023-02-01 00:10:00,huset 2,Slite,2.0,50\n",
        );

        let records = load_csv_dataset(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location, "tregattu 11");
        assert_eq!(records[0].ts, datetime!(2023-01-31 22:30:00 UTC));
        assert_eq!(records[0].buckets.month, (2023, 1));
        // Naive timestamps are assumed UTC.
        assert_eq!(records[1].ts, datetime!(2023-02-01 00:10:00 UTC));
        assert_eq!(records[1].buckets.month, (2023, 2));
    }

    #[test]
    fn missing_file_is_reported_before_reading() {
        let path = env::temp_dir().join("heatpump_loader_absent.csv");
        let _ = fs::remove_file(&path);

        let err = load_csv_dataset(&path).unwrap_err();
        assert!(matches!(err, LoadError::Missing(_)));
    }

    #[test]
    fn malformed_numeric_field_fails_with_row_number() {
        let path = write_temp_csv(
            "heatpump_loader_bad_kwh.csv",
            "timestamp,Location,Town,total_energy_kWh,heatpump_pct\n\
             2023-01-01T00:00:00Z,a,t,not-a-number,10\n",
        );

        let err = load_csv_dataset(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        match err {
            LoadError::Row { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("total_energy_kWh"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_fails() {
        let path = write_temp_csv(
            "heatpump_loader_no_town.csv",
            "timestamp,Location,total_energy_kWh,heatpump_pct\n\
             2023-01-01T00:00:00Z,a,1.0,10\n",
        );

        let err = load_csv_dataset(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::Row { .. }));
    }
}
