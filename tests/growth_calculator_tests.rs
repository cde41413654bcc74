use approx::assert_relative_eq;
use nav_chart::ChartError;
use nav_chart::core::growth::{try_one_time, try_recurring};
use nav_chart::core::{CalculatorDuration, CalculatorMode, one_time, project, recurring};

#[test]
fn lump_sum_grows_twelve_percent_a_year() {
    let projection = one_time(10_000.0, 1.0);
    assert_relative_eq!(projection.invested, 10_000.0);
    assert_relative_eq!(projection.estimated, 11_200.0, max_relative = 1e-12);
    assert_relative_eq!(projection.gain_percent, 12.0, max_relative = 1e-9);

    let three_years = one_time(10_000.0, 3.0);
    assert_relative_eq!(three_years.estimated, 14_049.28, max_relative = 1e-9);
}

#[test]
fn monthly_plan_is_an_annuity_due() {
    let projection = recurring(5_000.0, 1.0);
    assert_relative_eq!(projection.invested, 60_000.0);
    assert!(projection.estimated > projection.invested);
    assert!(projection.estimated > 64_046.0 && projection.estimated < 64_047.0);
}

#[test]
fn longer_horizons_never_project_less() {
    for mode in [CalculatorMode::Recurring, CalculatorMode::OneTime] {
        let estimates: Vec<f64> = CalculatorDuration::ALL
            .iter()
            .map(|duration| project(mode, 5_000.0, duration.years()).estimated)
            .collect();
        assert!(estimates.windows(2).all(|pair| pair[0] < pair[1]), "{mode:?}");
    }
}

#[test]
fn checked_variants_reject_degenerate_plans() {
    assert!(matches!(try_one_time(0.0, 1.0), Err(ChartError::InvalidData(_))));
    assert!(matches!(try_recurring(5_000.0, 0.0), Err(ChartError::InvalidData(_))));
    assert!(try_recurring(f64::NAN, 1.0).is_err());
    assert!(try_one_time(1_000.0, f64::INFINITY).is_err());
    assert_eq!(try_one_time(10_000.0, 1.0), Ok(one_time(10_000.0, 1.0)));
}

#[test]
fn zero_amount_yields_nan_gain_without_panicking() {
    let projection = recurring(0.0, 1.0);
    assert_eq!(projection.invested, 0.0);
    assert!(projection.gain_percent.is_nan());
}
