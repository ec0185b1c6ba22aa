use std::time::{Duration, Instant};

use censusplot::config::CensusPlotConfig;
use censusplot::data::fields::XField;
use censusplot::data::records::CensusRecord;
use censusplot::scale::x_scale;
use censusplot::selection::AxisEvent;
use censusplot::CensusPlotApp;

fn record(state: &str, abbr: &str, poverty: f64, age: f64, healthcare: f64) -> CensusRecord {
    CensusRecord {
        state: state.to_string(),
        abbr: abbr.to_string(),
        poverty,
        age,
        healthcare,
    }
}

fn sample_records() -> Vec<CensusRecord> {
    vec![
        record("Alabama", "AL", 18.3, 38.1, 11.5),
        record("Alaska", "AK", 12.0, 33.1, 16.6),
    ]
}

/// A transition long enough that test-side clock skew is negligible.
fn slow_config() -> CensusPlotConfig {
    CensusPlotConfig {
        transition_duration: Duration::from_secs(1000),
        ..CensusPlotConfig::default()
    }
}

#[test]
fn initial_scale_binds_poverty() {
    let records = sample_records();
    let app = CensusPlotApp::new(records.clone(), CensusPlotConfig::default());

    let expected = x_scale(&records, XField::Poverty, (0.0, 820.0));
    assert_eq!(app.selection().current(), XField::Poverty);
    assert_eq!(app.current_x_scale().domain, expected.domain);
    assert!(app.transition().is_none(), "nothing animates before any click");
}

#[test]
fn reselecting_the_active_field_triggers_no_transition() {
    let mut app = CensusPlotApp::new(sample_records(), CensusPlotConfig::default());
    let before = app.current_x_scale();

    app.handle_event(AxisEvent::LabelClicked(XField::Poverty));

    assert!(app.transition().is_none(), "no-op clicks must not animate");
    assert_eq!(app.selection().current(), XField::Poverty);
    assert_eq!(app.current_x_scale().domain, before.domain);
}

#[test]
fn selecting_a_new_field_starts_one_transition() {
    let records = sample_records();
    let mut app = CensusPlotApp::new(records.clone(), CensusPlotConfig::default());

    app.handle_event(AxisEvent::LabelClicked(XField::Age));

    assert_eq!(app.selection().current(), XField::Age);
    let active = XField::ALL
        .iter()
        .filter(|&&f| app.selection().is_active(f))
        .count();
    assert_eq!(active, 1, "exactly one label is active after a switch");

    let expected = x_scale(&records, XField::Age, (0.0, 820.0));
    let transition = app.transition().expect("a switch must animate");
    assert_eq!(transition.target().domain, expected.domain);
    assert_eq!(app.current_x_scale().domain, expected.domain);
}

#[test]
fn switch_lands_marks_on_the_worked_example_pixel() {
    let mut app = CensusPlotApp::new(sample_records(), CensusPlotConfig::default());
    app.handle_event(AxisEvent::LabelClicked(XField::Age));

    let expected = (38.1 - 26.48) / (45.72 - 26.48) * 820.0;
    let landed = app.current_x_scale().apply(38.1);
    assert!(
        (landed - expected).abs() < 1e-9,
        "Alabama should settle at {expected}, got {landed}"
    );
}

#[test]
fn interrupting_a_switch_retargets_from_current_positions() {
    let records = sample_records();
    let mut app = CensusPlotApp::new(records.clone(), slow_config());
    let poverty = x_scale(&records, XField::Poverty, (0.0, 820.0));

    app.handle_event(AxisEvent::LabelClicked(XField::Age));
    app.handle_event(AxisEvent::LabelClicked(XField::Poverty));

    // Last write wins: the surviving transition heads back to poverty.
    let transition = app.transition().expect("interrupt replaces, not cancels");
    assert_eq!(transition.target().domain, poverty.domain);
    assert_eq!(app.selection().current(), XField::Poverty);

    // The first switch had barely progressed, so the marks resume from
    // (essentially) their poverty positions.
    let now = Instant::now();
    let resumed = transition.mark_x_at(0, now);
    let original = poverty.apply(18.3);
    assert!(
        (resumed - original).abs() < 0.5,
        "expected resume near {original}, got {resumed}"
    );
}

#[test]
fn round_trip_restores_the_original_scale() {
    let records = sample_records();
    let mut app = CensusPlotApp::new(records.clone(), CensusPlotConfig::default());
    let original = app.current_x_scale();

    app.handle_event(AxisEvent::LabelClicked(XField::Age));
    app.handle_event(AxisEvent::LabelClicked(XField::Poverty));

    let restored = app.current_x_scale();
    assert!((original.domain.0 - restored.domain.0).abs() < 1e-9);
    assert!((original.domain.1 - restored.domain.1).abs() < 1e-9);
}

#[test]
fn mark_positions_flip_the_pixel_y_axis() {
    let records = sample_records();
    let app = CensusPlotApp::new(records.clone(), CensusPlotConfig::default());
    let now = Instant::now();

    // Alaska has the maximum healthcare value, so its mark sits at the top
    // of the pixel range, which is the top of the plot in plot coordinates.
    let pos = app.mark_position(1, &records[1], now);
    assert!((pos[1] - 400.0).abs() < 1e-9, "max value draws at plot top: {}", pos[1]);

    let pos = app.mark_position(0, &records[0], now);
    assert!(pos[1] > 0.0 && pos[1] < 400.0);
}

#[test]
fn empty_dataset_still_accepts_clicks() {
    let mut app = CensusPlotApp::new(Vec::new(), CensusPlotConfig::default());
    app.handle_event(AxisEvent::LabelClicked(XField::Age));
    assert_eq!(app.selection().current(), XField::Age);
}
