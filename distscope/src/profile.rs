use crate::record::DistributionRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub total_records: usize,
    pub suppliers: usize,
    pub customers: usize,
    pub models: usize,
    pub categories: usize,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub unparsed_dates: usize,
}

pub fn profile<'a, I>(records: I) -> DatasetProfile
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    let records: Vec<&DistributionRecord> = records.into_iter().collect();
    let mut dates: Vec<DateTime<Utc>> = Vec::with_capacity(records.len());
    let mut unparsed_dates = 0;
    for r in &records {
        match parse_delivery_date(&r.delivery_date) {
            Some(d) => dates.push(d),
            None => unparsed_dates += 1,
        }
    }
    let fmt = |d: &DateTime<Utc>| d.to_rfc3339_opts(SecondsFormat::Secs, true);
    DatasetProfile {
        total_records: records.len(),
        suppliers: records.iter().map(|r| &r.supplier_id).unique().count(),
        customers: records.iter().map(|r| &r.customer_id).unique().count(),
        models: records.iter().map(|r| &r.model).unique().count(),
        categories: records.iter().map(|r| &r.category).unique().count(),
        start_date: dates.iter().min().map(fmt),
        end_date: dates.iter().max().map(fmt),
        unparsed_dates,
    }
}

/// Best-effort parse of a delivery date in the formats seen in supplier
/// exports. Date-only values are taken as midnight UTC.
pub fn parse_delivery_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let datetime_fmts = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
    ];
    for f in datetime_fmts.iter() {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    static RE_COMPACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").unwrap());
    let date_fmts: &[&str] = if RE_COMPACT.is_match(s) {
        &["%Y%m%d"]
    } else {
        &["%Y-%m-%d", "%Y/%m/%d"]
    };
    for f in date_fmts {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return d.and_hms_opt(0, 0, 0).map(|ndt| Utc.from_utc_datetime(&ndt));
        }
    }
    None
}
