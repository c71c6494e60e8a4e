use distscope::pareto::{build_pareto_ranking, build_pareto_ranking_top, ParetoEntry};
use distscope::record::DistributionRecord;
use distscope::standardize::standardize;

fn models(names: &[&str]) -> Vec<DistributionRecord> {
    names
        .iter()
        .map(|m| DistributionRecord::from_lookup("2024-01-01", |f| (f.name() == "model").then(|| m.to_string())))
        .collect()
}

#[test]
fn single_model_from_json_reaches_full_share() {
    let recs = standardize(r#"[{"supplier":"X","model":"M1"},{"supplier":"Y","model":"M1"}]"#);
    let ranking = build_pareto_ranking(&recs);
    assert_eq!(ranking, vec![ParetoEntry { name: "M1".into(), count: 2, cumulative: 100 }]);
}

#[test]
fn sorted_descending_with_rounded_running_share() {
    let recs = models(&["A", "B", "C", "A", "C", "A"]);
    let ranking = build_pareto_ranking(&recs);
    assert_eq!(
        ranking,
        vec![
            ParetoEntry { name: "A".into(), count: 3, cumulative: 50 },
            ParetoEntry { name: "C".into(), count: 2, cumulative: 83 },
            ParetoEntry { name: "B".into(), count: 1, cumulative: 100 },
        ]
    );
}

#[test]
fn ties_keep_first_seen_order() {
    let ranking = build_pareto_ranking(&models(&["Z", "A"]));
    let names: Vec<&str> = ranking.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Z", "A"]);
}

#[test]
fn truncates_to_top_ten_after_computing_share() {
    let names: Vec<String> = (0..12).map(|i| format!("M{i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let ranking = build_pareto_ranking(&models(&refs));
    assert_eq!(ranking.len(), 10);
    assert_eq!(ranking.last().unwrap().cumulative, 83);
    assert!(ranking.windows(2).all(|w| w[0].cumulative <= w[1].cumulative));
    assert!(ranking.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn custom_top_n() {
    let ranking = build_pareto_ranking_top(&models(&["A", "B", "C"]), 2);
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[1].cumulative, 67);
}

#[test]
fn empty_ranking() {
    assert!(build_pareto_ranking(&Vec::<DistributionRecord>::new()).is_empty());
}
