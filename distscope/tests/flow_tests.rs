use distscope::flow::{build_flow_graph, FlowLink};
use distscope::record::DistributionRecord;
use std::collections::HashSet;

fn rec(supplier: &str, license: &str, model: &str, customer: &str) -> DistributionRecord {
    DistributionRecord::from_lookup("2024-01-01", |f| match f.name() {
        "supplierId" => Some(supplier.to_string()),
        "licenseNo" => Some(license.to_string()),
        "model" => Some(model.to_string()),
        "customerId" => Some(customer.to_string()),
        _ => None,
    })
}

#[test]
fn nodes_are_stage_prefixed_and_first_seen_ordered() {
    let recs = vec![
        rec("S1", "MOHW-MD-0012345", "M1", "C1"),
        rec("S2", "MOHW-MD-0012345", "M1", "C2"),
    ];
    let g = build_flow_graph(&recs);
    let names: Vec<&str> = g.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["S: S1", "L: MOHW-M...", "M: M1", "C: C1", "S: S2", "C: C2"]);
    assert_eq!(
        g.links,
        vec![
            FlowLink { source: 0, target: 1, value: 1 },
            FlowLink { source: 1, target: 2, value: 2 },
            FlowLink { source: 2, target: 3, value: 1 },
            FlowLink { source: 4, target: 1, value: 1 },
            FlowLink { source: 2, target: 5, value: 1 },
        ]
    );
}

#[test]
fn repeated_paths_accumulate_instead_of_duplicating() {
    let recs: Vec<DistributionRecord> = (0..5).map(|_| rec("S", "LIC", "M", "C")).collect();
    let g = build_flow_graph(&recs);
    assert_eq!(g.nodes.len(), 4);
    assert_eq!(g.links.len(), 3);
    assert!(g.links.iter().all(|l| l.value == 5));
}

#[test]
fn short_licenses_still_get_the_ellipsis() {
    let g = build_flow_graph(&[rec("S", "AB", "M", "C")]);
    assert_eq!(g.nodes[1].name, "L: AB...");
}

#[test]
fn no_duplicate_edge_pairs_on_mixed_input() {
    let suppliers = ["A", "B", "C"];
    let models = ["X", "Y"];
    let mut recs = Vec::new();
    for i in 0..60 {
        recs.push(rec(
            suppliers[i % 3],
            &format!("LIC-{}", i % 4),
            models[i % 2],
            &format!("CUST{}", i % 5),
        ));
    }
    let g = build_flow_graph(&recs);
    let mut pairs = HashSet::new();
    for l in &g.links {
        assert!(pairs.insert((l.source, l.target)), "duplicate edge {l:?}");
        assert!(l.source < g.nodes.len() && l.target < g.nodes.len());
    }
    let total: usize = g.links.iter().map(|l| l.value).sum();
    assert_eq!(total, 60 * 3);
}

#[test]
fn empty_input_gives_empty_graph() {
    let g = build_flow_graph(&Vec::<DistributionRecord>::new());
    assert!(g.nodes.is_empty());
    assert!(g.links.is_empty());
}
