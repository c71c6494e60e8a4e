use crate::record::{DistributionRecord, RecordField};
use crate::region::region_of;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Record(RecordField),
    Region,
}

impl FilterField {
    pub fn name(self) -> &'static str {
        match self {
            FilterField::Record(f) => f.name(),
            FilterField::Region => "region",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),
    #[error("filter must look like field=pattern, got {0:?}")]
    MissingSeparator(String),
}

impl FromStr for FilterField {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "region" {
            return Ok(FilterField::Region);
        }
        RecordField::from_name(s)
            .map(FilterField::Record)
            .ok_or_else(|| FilterError::UnknownField(s.to_string()))
    }
}

/// Per-field substring patterns. A field with no pattern (or an empty one)
/// places no constraint on records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    patterns: BTreeMap<FilterField, String>,
}

impl FilterState {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, field: FilterField, pattern: impl Into<String>) {
        let pattern = pattern.into();
        if pattern.is_empty() {
            self.patterns.remove(&field);
        } else {
            self.patterns.insert(field, pattern);
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        self.patterns.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) { self.patterns.clear(); }

    pub fn is_empty(&self) -> bool { self.patterns.is_empty() }

    /// Parses a `field=pattern` directive and applies it.
    pub fn set_from_directive(&mut self, directive: &str) -> Result<(), FilterError> {
        let (field, pattern) = directive
            .split_once('=')
            .ok_or_else(|| FilterError::MissingSeparator(directive.to_string()))?;
        let field: FilterField = field.trim().parse()?;
        self.set(field, pattern);
        Ok(())
    }

    fn lowered(&self) -> Vec<(FilterField, String)> {
        self.patterns
            .iter()
            .map(|(f, p)| (*f, p.to_lowercase()))
            .collect()
    }
}

fn contains_ci(value: &str, lowered_pattern: &str) -> bool {
    value.to_lowercase().contains(lowered_pattern)
}

fn matches_lowered(record: &DistributionRecord, lowered: &[(FilterField, String)]) -> bool {
    lowered.iter().all(|(field, pattern)| match field {
        FilterField::Record(f) => contains_ci(record.get(*f), pattern),
        FilterField::Region => contains_ci(region_of(&record.customer_id).label(), pattern),
    })
}

pub fn matches(record: &DistributionRecord, state: &FilterState) -> bool {
    matches_lowered(record, &state.lowered())
}

/// Keeps the records matching every non-empty pattern, in input order.
pub fn apply_filters<'a, I>(records: I, state: &FilterState) -> Vec<&'a DistributionRecord>
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    let lowered = state.lowered();
    records
        .into_iter()
        .filter(|r| matches_lowered(r, &lowered))
        .collect()
}
