use crate::record::{char_prefix, DistributionRecord};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub const LICENSE_PREFIX_CHARS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: usize,
}

/// Supplier → license → model → customer transitions. Link endpoints index
/// into `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

#[derive(Default)]
struct FlowBuilder {
    graph: FlowGraph,
    node_index: AHashMap<String, usize>,
    link_index: AHashMap<(usize, usize), usize>,
}

impl FlowBuilder {
    fn node(&mut self, label: String) -> usize {
        if let Some(&idx) = self.node_index.get(&label) {
            return idx;
        }
        let idx = self.graph.nodes.len();
        self.graph.nodes.push(FlowNode { name: label.clone() });
        self.node_index.insert(label, idx);
        idx
    }

    fn link(&mut self, source: usize, target: usize) {
        match self.link_index.get(&(source, target)) {
            Some(&i) => self.graph.links[i].value += 1,
            None => {
                self.link_index.insert((source, target), self.graph.links.len());
                self.graph.links.push(FlowLink { source, target, value: 1 });
            }
        }
    }
}

pub fn stage_labels(record: &DistributionRecord) -> [String; 4] {
    [
        format!("S: {}", record.supplier_id),
        format!("L: {}...", char_prefix(&record.license_no, LICENSE_PREFIX_CHARS)),
        format!("M: {}", record.model),
        format!("C: {}", record.customer_id),
    ]
}

/// Builds the flow graph over every record given. Callers are expected to
/// bound the input (the dashboard passes at most its configured limit).
pub fn build_flow_graph<'a, I>(records: I) -> FlowGraph
where
    I: IntoIterator<Item = &'a DistributionRecord>,
{
    let mut b = FlowBuilder::default();
    for r in records {
        let ids = stage_labels(r).map(|label| b.node(label));
        for w in ids.windows(2) {
            b.link(w[0], w[1]);
        }
    }
    b.graph
}
