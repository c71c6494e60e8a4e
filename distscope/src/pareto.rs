use crate::record::DistributionRecord;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParetoEntry {
    pub name: String,
    pub count: usize,
    /// Running share of all records, in whole percent.
    pub cumulative: u32,
}

pub fn build_pareto_ranking<'a, I>(records: I) -> Vec<ParetoEntry>
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    build_pareto_ranking_top(records, DEFAULT_TOP_N)
}

/// Ranks models by record count and keeps the `top_n` largest. The
/// cumulative column is computed against the full total before truncation,
/// so the last kept row may sit below 100.
pub fn build_pareto_ranking_top<'a, I>(records: I, top_n: usize) -> Vec<ParetoEntry>
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for r in records {
        match index.get(r.model.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(r.model.as_str(), counts.len());
                counts.push((r.model.as_str(), 1));
            }
        }
    }
    // stable: ties keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, c)| c).sum();
    let mut running = 0usize;
    counts
        .into_iter()
        .map(|(name, count)| {
            running += count;
            let cumulative = ((running as f64 / total as f64) * 100.0).round() as u32;
            ParetoEntry { name: name.to_string(), count, cumulative }
        })
        .take(top_n)
        .collect()
}
