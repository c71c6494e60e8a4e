use distscope::record::DistributionRecord;
use distscope::temporal::{build_temporal_series, TemporalBucket};

fn dated(date: &str) -> DistributionRecord {
    DistributionRecord::from_lookup("unused", |f| (f.name() == "deliveryDate").then(|| date.to_string()))
}

#[test]
fn compact_dates_bucket_per_day_in_ascending_order() {
    let recs = vec![dated("20240102"), dated("20240101"), dated("20240101")];
    let series = build_temporal_series(&recs);
    assert_eq!(
        series,
        vec![
            TemporalBucket { date: "20240101".into(), count: 2 },
            TemporalBucket { date: "20240102".into(), count: 1 },
        ]
    );
}

#[test]
fn iso_dates_share_an_eight_char_prefix() {
    let recs = vec![dated("2024-01-01"), dated("2024-01-02"), dated("2024-02-01")];
    let series = build_temporal_series(&recs);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0], TemporalBucket { date: "2024-01-".into(), count: 2 });
    assert_eq!(series[1], TemporalBucket { date: "2024-02-".into(), count: 1 });
}

#[test]
fn short_dates_use_whole_value() {
    let series = build_temporal_series(&[dated("2024")]);
    assert_eq!(series, vec![TemporalBucket { date: "2024".into(), count: 1 }]);
}

#[test]
fn empty_series() {
    assert!(build_temporal_series(&Vec::<DistributionRecord>::new()).is_empty());
}
