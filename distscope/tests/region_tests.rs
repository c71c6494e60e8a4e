use distscope::region::{region_of, Region};
use std::collections::HashSet;

#[test]
fn region_buckets_by_code_unit_sum_mod_three() {
    assert_eq!(region_of(""), Region::Apac);
    assert_eq!(region_of("A"), Region::Americas); // 65
    assert_eq!(region_of("B"), Region::Apac); // 66
    assert_eq!(region_of("C"), Region::Emea); // 67
    assert_eq!(region_of("AB"), Region::Americas); // 131
    assert_eq!(region_of("醫"), Region::Emea); // 0x91AB = 37291
}

#[test]
fn region_is_deterministic_and_uses_three_labels() {
    let labels: HashSet<&str> = Region::ALL.iter().map(|r| r.label()).collect();
    assert_eq!(labels.len(), 3);
    let mut seen = HashSet::new();
    for i in 0..1000 {
        let id = format!("CUST-{i:04}");
        let a = region_of(&id);
        let b = region_of(&id);
        assert_eq!(a, b);
        assert!(labels.contains(a.label()));
        seen.insert(a);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn region_display_matches_label() {
    assert_eq!(Region::Emea.to_string(), "UTC+1 (EMEA)");
    assert_eq!(format!("{}", Region::Apac), Region::Apac.label());
}
