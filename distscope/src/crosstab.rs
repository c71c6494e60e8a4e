use crate::record::DistributionRecord;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabCell {
    pub model: String,
    pub customer: String,
    pub value: usize,
}

/// Counts each observed (model, customer) pair in first-seen order. Pairs
/// that never occur are absent rather than zero.
pub fn build_cross_tab<'a, I>(records: I) -> Vec<CrossTabCell>
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    let mut cells: Vec<CrossTabCell> = Vec::new();
    let mut index: AHashMap<(&str, &str), usize> = AHashMap::new();
    for r in records {
        let key = (r.model.as_str(), r.customer_id.as_str());
        match index.get(&key) {
            Some(&i) => cells[i].value += 1,
            None => {
                index.insert(key, cells.len());
                cells.push(CrossTabCell {
                    model: r.model.clone(),
                    customer: r.customer_id.clone(),
                    value: 1,
                });
            }
        }
    }
    cells
}
