use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use serde_json::{Map, Value};

use super::error::AppError;

const POWER_FIELD: &str = "power";
const TIMESTAMP_FIELD: &str = "timestamp";
const TS_FIELD: &str = "ts";

const PLACEHOLDER_MEAN_W: f64 = 100.0;
const PLACEHOLDER_STD_DEV_W: f64 = 20.0;

/// A single sensor sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reading {
    pub timestamp: Option<DateTime<Utc>>,
    /// Instantaneous power in watts
    pub power: Option<f64>,
    /// All fields as delivered by the API
    pub fields: Map<String, Value>,
}

impl Reading {
    /// Builds a reading from a raw JSON object, taking the timestamp from `time_field`.
    pub fn from_fields(fields: Map<String, Value>, time_field: &str) -> Self {
        Self {
            timestamp: fields.get(time_field).and_then(coerce_timestamp),
            power: fields.get(POWER_FIELD).and_then(coerce_number),
            fields,
        }
    }

    /// The `reading` object of the latest endpoint.
    pub fn from_latest(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields, TIMESTAMP_FIELD)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Aggregates shown as metric tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerStats {
    pub total: f64,
    pub average: f64,
}

/// Chart-ready power data, ascending by time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PowerSeries {
    pub labels: Vec<String>,
    pub power: Vec<f64>,
}

impl PowerSeries {
    pub fn len(&self) -> usize {
        self.power.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }
}

/// A table of readings as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Readings {
    rows: Vec<Reading>,
}

impl Readings {
    pub fn new(rows: Vec<Reading>) -> Self {
        Self { rows }
    }

    /// Normalizes raw rows. The time column is `timestamp` when any row has it,
    /// otherwise `ts`. Rows without a parseable time keep `timestamp: None`.
    pub fn from_rows(rows: Vec<Map<String, Value>>) -> Result<Self, AppError> {
        if rows.is_empty() {
            return Ok(Self::default());
        }

        let time_field = if rows.iter().any(|r| r.contains_key(TIMESTAMP_FIELD)) {
            TIMESTAMP_FIELD
        } else if rows.iter().any(|r| r.contains_key(TS_FIELD)) {
            TS_FIELD
        } else {
            return Err(AppError::Data(
                "History rows carry neither 'timestamp' nor 'ts'".to_string(),
            ));
        };

        Ok(Self::new(
            rows.into_iter()
                .map(|fields| Reading::from_fields(fields, time_field))
                .collect(),
        ))
    }

    /// Parses the JSON array returned by the history endpoint.
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        let Value::Array(items) = value else {
            return Err(AppError::Parse("Expected a JSON array of readings".to_string()));
        };

        let rows = items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(AppError::Parse(format!("Expected a reading object, got {other}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    pub fn rows(&self) -> &[Reading] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if at least one row carries a power value.
    pub fn has_power(&self) -> bool {
        self.rows.iter().any(|r| r.power.is_some())
    }

    /// Sorts ascending by timestamp. Rows without a timestamp go last.
    pub fn sorted(mut self) -> Self {
        self.rows.sort_by(|a, b| match (a.timestamp, b.timestamp) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        self
    }

    /// Fills every row with placeholder power when no row has any.
    pub fn with_placeholder_power(mut self, seed: u64) -> Self {
        if self.has_power() {
            return self;
        }

        let samples = placeholder_power(self.rows.len(), seed);
        for (row, value) in self.rows.iter_mut().zip(samples) {
            row.power = Some(value);
        }
        self
    }

    /// Timestamped power values, sorted ascending, with placeholder power if needed.
    pub fn power_series(&self, seed: u64) -> PowerSeries {
        let prepared = self.clone().sorted().with_placeholder_power(seed);

        let (labels, power) = prepared
            .rows
            .iter()
            .filter_map(|r| Some((r.timestamp?, r.power?)))
            .map(|(ts, p)| (ts.format("%Y-%m-%d %H:%M").to_string(), p))
            .unzip();

        PowerSeries { labels, power }
    }
}

/// Sum and mean of the available power values, or `None` when there are none.
pub fn power_stats(values: impl IntoIterator<Item = f64>) -> Option<PowerStats> {
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));

    (count > 0).then(|| PowerStats {
        total,
        average: total / count as f64,
    })
}

/// `|N(100, 20)|` samples from a fixed seed.
fn placeholder_power(len: usize, seed: u64) -> Vec<f64> {
    let rng = StdRng::seed_from_u64(seed);
    Normal::new(PLACEHOLDER_MEAN_W, PLACEHOLDER_STD_DEV_W)
        .map(|normal| normal.sample_iter(rng).take(len).map(f64::abs).collect())
        .unwrap_or_default()
}

/// Placeholder battery charge: `20 + 60 * max(sin(x), 0)` over `x` in `[-1.2, 1.2]`.
pub fn battery_charge_curve(len: usize) -> Vec<f64> {
    const START: f64 = -1.2;
    const END: f64 = 1.2;

    let step = if len > 1 {
        (END - START) / (len - 1) as f64
    } else {
        0.0
    };

    (0..len)
        .map(|i| {
            let x = START + step * i as f64;
            20.0 + 60.0 * x.sin().max(0.0)
        })
        .collect()
}

/// Index of the first maximum.
pub fn peak_index(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, max)) if v <= max => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_flexible_timestamp(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        _ => None,
    }
}

/// Parses RFC 3339, or a naive date-time taken as UTC, with or without seconds.
/// A bare date is midnight UTC.
pub fn parse_flexible_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
    .or_else(|| {
        NaiveDate::parse_from_str(naive, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
    .map(|dt| dt.and_utc())
}
