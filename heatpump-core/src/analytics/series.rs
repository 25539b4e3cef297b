use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::Observation;

/// One raw, unaggregated point for external rendering: total consumption
/// alongside the consumption attributed to the heat pump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPoint {
    #[serde(with = "time::serde::rfc3339")]
    pub ts: OffsetDateTime,
    pub total_energy_kwh: f64,
    pub heatpump_kwh: f64,
}

/// Per-record comparison series in dataset order.
///
/// `heatpump_kwh` is `total_energy_kwh * heatpump_pct / 100`; no
/// aggregation or resampling happens here.
pub fn comparison_series<'a, I>(records: I) -> Vec<ComparisonPoint>
where
    I: IntoIterator<Item = &'a Observation>,
{
    records
        .into_iter()
        .map(|rec| ComparisonPoint {
            ts: rec.ts,
            total_energy_kwh: rec.total_energy_kwh,
            heatpump_kwh: rec.total_energy_kwh * rec.heatpump_pct / 100.0,
        })
        .collect()
}
