use crate::config::PipelineOpts;
use crate::crosstab::{build_cross_tab, CrossTabCell};
use crate::filter::{apply_filters, FilterState};
use crate::flow::{build_flow_graph, FlowGraph};
use crate::hierarchy::{build_hierarchy, CategoryNode};
use crate::pareto::{build_pareto_ranking_top, ParetoEntry};
use crate::profile::{profile, DatasetProfile};
use crate::record::DistributionRecord;
use crate::temporal::{build_temporal_series, TemporalBucket};
use serde::Serialize;

/// Everything a front end renders for one filter state.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub records: Vec<&'a DistributionRecord>,
    pub profile: DatasetProfile,
    pub flow: FlowGraph,
    pub series: Vec<TemporalBucket>,
    pub pareto: Vec<ParetoEntry>,
    pub hierarchy: Vec<CategoryNode>,
    pub cross_tab: Vec<CrossTabCell>,
}

pub fn build_dashboard<'a>(
    records: &'a [DistributionRecord],
    filters: &FilterState,
    opts: &PipelineOpts,
) -> Dashboard<'a> {
    let filtered = apply_filters(records, filters);
    tracing::debug!(total = records.len(), matched = filtered.len(), "filters applied");
    Dashboard {
        profile: profile(filtered.iter().copied()),
        flow: build_flow_graph(filtered.iter().copied().take(opts.flow_record_limit)),
        series: build_temporal_series(filtered.iter().copied()),
        pareto: build_pareto_ranking_top(filtered.iter().copied(), opts.pareto_top_n),
        hierarchy: build_hierarchy(filtered.iter().copied()),
        cross_tab: build_cross_tab(filtered.iter().copied()),
        records: filtered,
    }
}
