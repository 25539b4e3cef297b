use std::collections::BTreeMap;
use std::str::FromStr;

use time::Date;

use crate::domain::Observation;

/// A resolution value outside {hourly, daily, monthly}. Rejected at the
/// request boundary, before any aggregation runs.
#[derive(thiserror::Error, Debug)]
#[error("invalid resolution '{0}', expected one of: hourly, daily, monthly")]
pub struct InvalidResolution(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Hourly,
    Daily,
    Monthly,
}

impl FromStr for Resolution {
    type Err = InvalidResolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            other => Err(InvalidResolution(other.to_string())),
        }
    }
}

/// Grouping key for one time bucket. Ordering is chronological within a
/// resolution; a single series only ever contains one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BucketKey {
    Hour { date: Date, hour: u8 },
    Day { date: Date },
    Month { year: i32, month: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharePoint {
    pub bucket: BucketKey,
    pub heatpump_pct: f64,
}

/// Group a single location's records by the requested resolution and
/// reduce each group to the arithmetic mean of `heatpump_pct`.
///
/// The output is ascending by bucket key with no duplicates, and contains
/// exactly the buckets that have at least one observation; gaps are never
/// padded. An empty input produces an empty series.
pub fn share_series<'a, I>(records: I, resolution: Resolution) -> Vec<SharePoint>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let key: fn(&Observation) -> BucketKey = match resolution {
        Resolution::Hourly => |rec| BucketKey::Hour {
            date: rec.buckets.hour.0,
            hour: rec.buckets.hour.1,
        },
        Resolution::Daily => |rec| BucketKey::Day {
            date: rec.buckets.date,
        },
        Resolution::Monthly => |rec| BucketKey::Month {
            year: rec.buckets.month.0,
            month: rec.buckets.month.1,
        },
    };

    group_mean(records, key)
}

fn group_mean<'a, I>(records: I, key: fn(&Observation) -> BucketKey) -> Vec<SharePoint>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut groups: BTreeMap<BucketKey, (f64, u32)> = BTreeMap::new();
    for rec in records {
        let acc = groups.entry(key(rec)).or_insert((0.0, 0));
        acc.0 += rec.heatpump_pct;
        acc.1 += 1;
    }

    groups
        .into_iter()
        .map(|(bucket, (sum, n))| SharePoint {
            bucket,
            heatpump_pct: sum / f64::from(n),
        })
        .collect()
}
