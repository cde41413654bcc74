use nav_chart::core::{DEFAULT_MAX_POINTS, RawNavRecord, prepare_samples, reduce};

#[test]
fn long_history_is_thinned_to_default_budget_with_latest_sample_kept() {
    let records: Vec<RawNavRecord> = (0..1_000)
        .map(|day| {
            let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
                .expect("date")
                .checked_add_days(chrono::Days::new(day))
                .expect("date");
            RawNavRecord::number(100.0 + day as f64 * 0.1, date.format("%Y-%m-%d").to_string())
        })
        .collect();
    let prepared = prepare_samples(records);
    assert_eq!(prepared.samples.len(), 1_000);

    let reduced = reduce(&prepared.samples, DEFAULT_MAX_POINTS);
    // ceil(1000 / 140) = 8 -> indices 0, 8, ..., 992 plus 999.
    assert_eq!(reduced.len(), 126);
    assert_eq!(reduced.first().map(|s| s.timestamp.as_str()), Some("2020-01-01"));
    assert_eq!(
        reduced.last().map(|s| s.timestamp.as_str()),
        prepared.samples.last().map(|s| s.timestamp.as_str())
    );
}

#[test]
fn series_on_stride_does_not_duplicate_tail() {
    let values: Vec<u32> = (0..9).collect();
    assert_eq!(reduce(&values, 3), vec![0, 3, 6, 8]);
    let values: Vec<u32> = (0..7).collect();
    assert_eq!(reduce(&values, 3), vec![0, 3, 6]);
}
