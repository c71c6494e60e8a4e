use crate::record::{DistributionRecord, RecordField};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv needs a header and at least one data line, found {found} line(s)")]
    TooFewLines { found: usize },
}

/// JSON key aliases per canonical field, highest priority first. Keys are
/// matched case-sensitively.
const JSON_ALIASES: &[(RecordField, &[&str])] = &[
    (RecordField::SupplierId, &["supplierId", "SupplierID", "supplier"]),
    (RecordField::CustomerId, &["customerId", "CustomerID", "customer"]),
    (RecordField::LicenseNo, &["licenseNo", "LicenseNo", "license"]),
    (RecordField::Category, &["category", "Category"]),
    (RecordField::Model, &["model", "Model"]),
    (RecordField::LotNo, &["lotNo", "LotNo", "lot"]),
    (RecordField::SerialNo, &["serialNo", "SerialNo", "serial"]),
    (RecordField::Udid, &["udid", "UDID", "udi"]),
    (RecordField::DeliveryDate, &["deliveryDate", "DeliveryDate", "date"]),
];

/// CSV header keywords. A header owns a field when it contains the keyword;
/// the first such header wins. Containment is loose: `ser`
/// also claims headers like `user`.
const CSV_KEYWORDS: &[(RecordField, &str)] = &[
    (RecordField::SupplierId, "supplier"),
    (RecordField::DeliveryDate, "date"),
    (RecordField::CustomerId, "customer"),
    (RecordField::LicenseNo, "license"),
    (RecordField::Category, "category"),
    (RecordField::Model, "model"),
    (RecordField::LotNo, "lot"),
    (RecordField::SerialNo, "ser"),
];

pub fn detect_format(raw: &str) -> InputFormat {
    let t = raw.trim();
    if t.starts_with('[') || t.starts_with('{') {
        InputFormat::Json
    } else {
        InputFormat::Csv
    }
}

/// Parses raw CSV or JSON text into canonical records.
///
/// Never fails: unusable input yields an empty vector and a warning in the
/// log. Callers should treat zero records as "could not process data".
pub fn standardize(raw: &str) -> Vec<DistributionRecord> {
    standardize_at(raw, Utc::now())
}

/// Same as [`standardize`], with `now` supplying the default delivery date.
pub fn standardize_at(raw: &str, now: DateTime<Utc>) -> Vec<DistributionRecord> {
    match try_standardize_at(raw, now) {
        Ok(records) => {
            tracing::debug!(records = records.len(), "standardized input");
            records
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not standardize input");
            Vec::new()
        }
    }
}

pub fn try_standardize(raw: &str) -> Result<Vec<DistributionRecord>, IngestError> {
    try_standardize_at(raw, Utc::now())
}

pub fn try_standardize_at(
    raw: &str,
    now: DateTime<Utc>,
) -> Result<Vec<DistributionRecord>, IngestError> {
    let default_date = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    match detect_format(raw) {
        InputFormat::Json => parse_json(raw, &default_date),
        InputFormat::Csv => parse_csv(raw, &default_date),
    }
}

fn parse_json(raw: &str, default_date: &str) -> Result<Vec<DistributionRecord>, IngestError> {
    let v: Value = serde_json::from_str(raw.trim())?;
    let items = match v {
        Value::Array(items) => items,
        other => vec![other],
    };
    let empty = Map::new();
    Ok(items
        .iter()
        .map(|item| {
            // Non-object elements have no fields; they become all-default rows.
            let obj = item.as_object().unwrap_or(&empty);
            DistributionRecord::from_lookup(default_date, |field| lookup_alias(obj, field))
        })
        .collect())
}

fn lookup_alias(obj: &Map<String, Value>, field: RecordField) -> Option<String> {
    let aliases = JSON_ALIASES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, a)| *a)
        .unwrap_or(&[]);
    aliases.iter().find_map(|key| obj.get(*key).and_then(truthy_text))
}

/// Renders a JSON value as field text, or `None` for falsy values
/// (`null`, `false`, zero, empty string).
fn truthy_text(v: &Value) -> Option<String> {
    match v {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => {
            if n.as_f64().map(|x| x == 0.0 || x.is_nan()).unwrap_or(false) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(v.to_string()),
    }
}

fn parse_csv(raw: &str, default_date: &str) -> Result<Vec<DistributionRecord>, IngestError> {
    let lines: Vec<&str> = raw
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(IngestError::TooFewLines { found: lines.len() });
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();
    let columns: Vec<(RecordField, usize)> = CSV_KEYWORDS
        .iter()
        .filter_map(|(field, kw)| {
            headers
                .iter()
                .position(|h| h.contains(kw))
                .map(|idx| (*field, idx))
        })
        .collect();
    tracing::debug!(?columns, "csv header mapping");

    Ok(lines[1..]
        .iter()
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            DistributionRecord::from_lookup(default_date, |field| {
                columns
                    .iter()
                    .find(|(f, _)| *f == field)
                    .and_then(|(_, idx)| values.get(*idx))
                    .map(|v| v.to_string())
            })
        })
        .collect())
}
