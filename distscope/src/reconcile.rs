use crate::config::ReconcileOpts;
use crate::profile::parse_delivery_date;
use crate::record::DistributionRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSerial {
    pub serial: String,
    pub lot: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMismatch {
    pub lot: String,
    pub shipped: String,
    pub received: String,
    pub delay_days: i64,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub missing_serials: Vec<MissingSerial>,
    pub date_mismatches: Vec<DateMismatch>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_serials.is_empty() && self.date_mismatches.is_empty()
    }
}

/// Compares a supplier-side set (`shipped`) against a customer-side set
/// (`received`).
pub fn compare_datasets(
    shipped: &[DistributionRecord],
    received: &[DistributionRecord],
    opts: &ReconcileOpts,
) -> ConsistencyReport {
    ConsistencyReport {
        missing_serials: missing_serials(shipped, received),
        date_mismatches: date_mismatches(shipped, received, opts.threshold_days),
    }
}

fn missing_serials(a: &[DistributionRecord], b: &[DistributionRecord]) -> Vec<MissingSerial> {
    let in_b: HashSet<&str> = b.iter().map(|r| r.serial_no.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for r in a {
        let serial = r.serial_no.as_str();
        if serial.is_empty() || in_b.contains(serial) || !seen.insert(serial) {
            continue;
        }
        out.push(MissingSerial {
            serial: serial.to_string(),
            lot: r.lot_no.clone(),
            details: format!("Missing Serial: {serial} (detected in A, missing in B)"),
        });
    }
    out
}

/// Earliest parseable delivery date per non-empty lot.
fn earliest_by_lot(records: &[DistributionRecord]) -> BTreeMap<&str, DateTime<Utc>> {
    let mut out: BTreeMap<&str, DateTime<Utc>> = BTreeMap::new();
    for r in records.iter().filter(|r| !r.lot_no.is_empty()) {
        if let Some(t) = parse_delivery_date(&r.delivery_date) {
            out.entry(r.lot_no.as_str())
                .and_modify(|cur| if t < *cur { *cur = t })
                .or_insert(t);
        }
    }
    out
}

fn date_mismatches(
    a: &[DistributionRecord],
    b: &[DistributionRecord],
    threshold_days: i64,
) -> Vec<DateMismatch> {
    let shipped = earliest_by_lot(a);
    let received = earliest_by_lot(b);
    let day = |t: &DateTime<Utc>| t.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut out = Vec::new();
    for (lot, s) in shipped.iter() {
        let Some(r) = received.get(lot) else { continue };
        let delay_days = (*r - *s).num_days();
        if *r < *s {
            out.push(DateMismatch {
                lot: lot.to_string(),
                shipped: day(s),
                received: day(r),
                delay_days,
                details: format!("Date Mismatch: Lot {lot} received before it shipped"),
            });
        } else if delay_days > threshold_days {
            out.push(DateMismatch {
                lot: lot.to_string(),
                shipped: day(s),
                received: day(r),
                delay_days,
                details: format!(
                    "Date Mismatch: Lot {lot} received {delay_days} days after shipping (threshold {threshold_days})"
                ),
            });
        }
    }
    out
}
