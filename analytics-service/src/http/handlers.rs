use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use heatpump_core::analytics::{self, BucketKey, Resolution, SharePoint};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::Date;

use super::error::ApiError;
use super::{report, AppState};

#[derive(Deserialize)]
pub struct LocationsParams {
    /// Optional town filter; the parameter keeps the dataset's column casing.
    #[serde(rename = "Town")]
    pub town: Option<String>,
}

#[derive(Deserialize)]
pub struct ShareParams {
    pub location: String,
    pub resolution: Option<String>,
}

#[derive(Deserialize)]
pub struct LocationParams {
    pub location: String,
}

/// One aggregated share row, shaped per resolution: hourly rows carry the
/// date and hour, daily rows the date, monthly rows a `YYYY-MM` month.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShareRow {
    Hourly {
        date: String,
        hour: u8,
        heatpump_pct: f64,
    },
    Daily {
        date: String,
        heatpump_pct: f64,
    },
    Monthly {
        month: String,
        heatpump_pct: f64,
    },
}

impl From<SharePoint> for ShareRow {
    fn from(point: SharePoint) -> Self {
        match point.bucket {
            BucketKey::Hour { date, hour } => Self::Hourly {
                date: format_date(date),
                hour,
                heatpump_pct: point.heatpump_pct,
            },
            BucketKey::Day { date } => Self::Daily {
                date: format_date(date),
                heatpump_pct: point.heatpump_pct,
            },
            BucketKey::Month { year, month } => Self::Monthly {
                month: format!("{year:04}-{month:02}"),
                heatpump_pct: point.heatpump_pct,
            },
        }
    }
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Rounding is applied here, at the presentation boundary only.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub async fn manual() -> Html<&'static str> {
    tracing::info!("manual endpoint accessed");
    Html(MANUAL_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<LocationsParams>,
) -> Json<serde_json::Value> {
    metrics::counter!("locations_requests_total").increment(1);

    let entries = analytics::list_locations(state.store.all(), params.town.as_deref());
    Json(json!({ "locations": entries }))
}

pub async fn heatpump_share(
    State(state): State<AppState>,
    Query(params): Query<ShareParams>,
) -> Result<Json<Vec<ShareRow>>, ApiError> {
    metrics::counter!("share_requests_total").increment(1);

    let resolution = match params.resolution.as_deref() {
        Some(value) => value.parse::<Resolution>().map_err(|e| {
            metrics::counter!("invalid_resolution_total").increment(1);
            e
        })?,
        None => Resolution::Daily,
    };

    let records = state.store.filter_by_location(&params.location);
    if records.is_empty() {
        return Err(not_found(&params.location));
    }

    let rows = analytics::share_series(records, resolution)
        .into_iter()
        .map(ShareRow::from)
        .collect();
    Ok(Json(rows))
}

pub async fn heatpump_summary(
    State(state): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    metrics::counter!("summary_requests_total").increment(1);

    let records = state.store.filter_by_location(&params.location);
    if records.is_empty() {
        return Err(not_found(&params.location));
    }

    let summary = analytics::summarize(records);
    Ok(Json(json!({
        "location": params.location,
        "average_heatpump_pct": round2(summary.mean),
        "max_heatpump_pct": round2(summary.max),
        "min_heatpump_pct": round2(summary.min),
        "data_points": summary.count,
    })))
}

pub async fn heatpump_series(
    State(state): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<Json<Vec<analytics::ComparisonPoint>>, ApiError> {
    metrics::counter!("series_requests_total").increment(1);

    let records = state.store.filter_by_location(&params.location);
    if records.is_empty() {
        return Err(not_found(&params.location));
    }

    Ok(Json(analytics::comparison_series(records)))
}

pub async fn heatpump_report(
    State(state): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<impl IntoResponse, ApiError> {
    metrics::counter!("report_requests_total").increment(1);

    let records = state.store.filter_by_location(&params.location);
    if records.is_empty() {
        return Err(not_found(&params.location));
    }

    let body = report::to_csv(&records).map_err(|e| ApiError::Internal(e.to_string()))?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}_report.csv", params.location),
        ),
    ];
    Ok((headers, body))
}

fn not_found(location: &str) -> ApiError {
    metrics::counter!("location_not_found_total").increment(1);
    tracing::warn!(location, "location not found");
    ApiError::LocationNotFound
}

const MANUAL_HTML: &str = r#"<html>
    <head>
        <title>Heat Pump Contribution API Manual</title>
    <style>
        body {font-family: Arial, sans-serif; margin: 20px; line-height: 1.6;}
        h1 {color: #2c3e50;}
        h2 {color: #34495e;}
        code {background-color: #ecf0f1; padding: 2px 4px; border-radius: 4px;}
        pre {background-color: #ecf0f1; padding: 10px; border-radius: 4px; overflow-x: auto;}
    </style>
    </head>
    <body>
    <h1>Welcome to the Heat Pump Contribution API!</h1>
    <p>This API provides analysis of heat pump energy consumption relative to total facility energy usage. It offers the following endpoints:</p>
    <h2>Endpoints</h2>
    <ul>
        <li><strong>GET /</strong>: Returns this instruction manual.</li>
        <li>
            <strong>GET /heatpump/share</strong>: Returns time-resolved heat pump share data.
            <ul>
                <li><code>location</code> (required): The location name or ID.</li>
                <li><code>resolution</code> (optional): Aggregation level; options: hourly, daily, monthly (default: daily).</li>
            </ul>
        </li>
        <li>
            <strong>GET /heatpump/summary</strong>: Returns summary metrics (average, max, min heat pump percentages) for a given location.
            <ul>
                <li><code>location</code> (required): The location name or ID.</li>
            </ul>
        </li>
        <li>
            <strong>GET /heatpump/series</strong>: Returns the raw comparison series (total vs. heat pump consumption) for external plotting.
            <ul>
                <li><code>location</code> (required): The location name or ID.</li>
            </ul>
        </li>
        <li>
            <strong>GET /heatpump/report</strong>: Downloads a CSV report with detailed data for a given location.
            <ul>
                <li><code>location</code> (required): The location name or ID.</li>
            </ul>
        </li>
        <li>
            <strong>GET /locations</strong>: Returns a list of all unique locations and their respective towns.
            <ul>
                <li><code>Town</code> (optional): Filter results by Town name.</li>
            </ul>
        </li>
    </ul>
    <h2>How to Use</h2>
    <p>Examples:</p>
    <pre>GET /heatpump/share?location=tregattu%2011&amp;resolution=daily</pre>
    <pre>GET /heatpump/report?location=tregattu%2011</pre>
    <pre>GET /locations?Town=SomeTown</pre>
    </body>
</html>
"#;
