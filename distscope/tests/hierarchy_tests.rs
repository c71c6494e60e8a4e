use distscope::hierarchy::{build_hierarchy, CategoryNode, ModelLeaf};
use distscope::record::DistributionRecord;

fn rec(category: &str, model: &str) -> DistributionRecord {
    DistributionRecord::from_lookup("2024-01-01", |f| match f.name() {
        "category" => Some(category.to_string()),
        "model" => Some(model.to_string()),
        _ => None,
    })
}

#[test]
fn groups_category_then_model_in_first_seen_order() {
    let recs = vec![
        rec("Cardiology", "Cardio X2"),
        rec("Neurology", "Neuro Y2"),
        rec("Cardiology", "Cardio X1"),
        rec("Cardiology", "Cardio X2"),
    ];
    let tree = build_hierarchy(&recs);
    assert_eq!(
        tree,
        vec![
            CategoryNode {
                name: "Cardiology".into(),
                children: vec![
                    ModelLeaf { name: "Cardio X2".into(), size: 2 },
                    ModelLeaf { name: "Cardio X1".into(), size: 1 },
                ],
            },
            CategoryNode {
                name: "Neurology".into(),
                children: vec![ModelLeaf { name: "Neuro Y2".into(), size: 1 }],
            },
        ]
    );
}

#[test]
fn long_category_labels_are_truncated() {
    let tree = build_hierarchy(&[rec("Orthopedics and Trauma", "Ortho Z3")]);
    assert_eq!(tree[0].name, "Orthopedics and");
}

#[test]
fn missing_fields_roll_up_under_defaults() {
    let recs = vec![DistributionRecord::from_lookup("2024-01-01", |_| None)];
    let tree = build_hierarchy(&recs);
    assert_eq!(tree[0].name, "General");
    assert_eq!(tree[0].children[0], ModelLeaf { name: "Standard".into(), size: 1 });
}

#[test]
fn empty_hierarchy() {
    assert!(build_hierarchy(&Vec::<DistributionRecord>::new()).is_empty());
}
