use crate::record::{char_prefix, DistributionRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Characters of `deliveryDate` used as the bucket key.
pub const DATE_BUCKET_CHARS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalBucket {
    pub date: String,
    pub count: usize,
}

/// Counts records per date-prefix bucket, ascending by key.
///
/// Keys sort lexicographically, which is only chronological when every input
/// date uses the same format.
pub fn build_temporal_series<'a, I>(records: I) -> Vec<TemporalBucket>
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        let key = char_prefix(&r.delivery_date, DATE_BUCKET_CHARS);
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(date, count)| TemporalBucket { date: date.to_string(), count })
        .collect()
}
