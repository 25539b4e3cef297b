use heatpump_core::Observation;
use time::format_description::well_known::Rfc3339;

/// Serialize a location's raw rows as a CSV document, column casing
/// matching the source dataset, timestamps as RFC 3339, rows in dataset
/// order.
pub fn to_csv(records: &[&Observation]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["timestamp", "Location", "Town", "total_energy_kWh", "heatpump_pct"])?;

    for rec in records {
        writer.write_record(&[
            rec.ts.format(&Rfc3339)?,
            rec.location.clone(),
            rec.town.clone(),
            rec.total_energy_kwh.to_string(),
            rec.heatpump_pct.to_string(),
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(bytes)
}
