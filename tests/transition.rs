use std::time::Duration;

use censusplot::scale::LinearScale;
use censusplot::transition::{MarkTween, Transition};

const EPS: f64 = 1e-9;

fn scales() -> (LinearScale, LinearScale) {
    (
        LinearScale::new((0.0, 10.0), (0.0, 820.0)),
        LinearScale::new((20.0, 40.0), (0.0, 820.0)),
    )
}

#[test]
fn progress_is_clamped_to_unit_interval() {
    let (from, to) = scales();
    let t = Transition::begin(from, to, Vec::new(), Duration::from_millis(1000));
    let start = t.started_at();

    assert_eq!(t.progress_at(start), 0.0);
    assert!((t.progress_at(start + Duration::from_millis(500)) - 0.5).abs() < EPS);
    assert_eq!(t.progress_at(start + Duration::from_millis(1000)), 1.0);
    assert_eq!(t.progress_at(start + Duration::from_millis(5000)), 1.0);
    assert!(t.finished_at(start + Duration::from_millis(1000)));
    assert!(!t.finished_at(start + Duration::from_millis(999)));
}

#[test]
fn marks_interpolate_linearly_between_pixel_positions() {
    let (from, to) = scales();
    let marks = vec![
        MarkTween { from_x: 0.0, to_x: 820.0 },
        MarkTween { from_x: 100.0, to_x: 50.0 },
    ];
    let t = Transition::begin(from, to, marks, Duration::from_millis(1000));
    let mid = t.started_at() + Duration::from_millis(500);

    assert!((t.mark_x_at(0, mid) - 410.0).abs() < EPS);
    assert!((t.mark_x_at(1, mid) - 75.0).abs() < EPS);

    let end = t.started_at() + Duration::from_millis(1000);
    assert!((t.mark_x_at(0, end) - 820.0).abs() < EPS);
    assert!((t.mark_x_at(1, end) - 50.0).abs() < EPS);
}

#[test]
fn axis_domain_animates_with_the_marks() {
    let (from, to) = scales();
    let t = Transition::begin(from, to, Vec::new(), Duration::from_millis(1000));
    let mid = t.started_at() + Duration::from_millis(500);

    let axis = t.axis_at(mid);
    assert!((axis.domain.0 - 10.0).abs() < EPS);
    assert!((axis.domain.1 - 25.0).abs() < EPS);
    assert_eq!(axis.range, to.range);

    let settled = t.axis_at(t.started_at() + Duration::from_millis(1000));
    assert_eq!(settled.domain, to.domain);
}

#[test]
fn zero_duration_completes_immediately() {
    let (from, to) = scales();
    let t = Transition::begin(from, to, Vec::new(), Duration::ZERO);
    assert!(t.finished_at(t.started_at()));
    assert_eq!(t.progress_at(t.started_at()), 1.0);
}
