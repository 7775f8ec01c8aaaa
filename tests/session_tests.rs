use approx::assert_relative_eq;
use corner_cutting_curves::core::{cubic_bezier, marker_for, normalize_pointer};
use corner_cutting_curves::{
    CommitOutcome, CurveError, CurveSession, SessionPhase, MAX_CURVE, MAX_SEGMENTS, MAX_VERTEX,
};
use glam::Vec2;

#[test]
fn test_end_to_end_scenario() {
    let mut session = CurveSession::new();
    let inputs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];

    let outcomes: Vec<_> = inputs.iter().map(|&p| session.commit(p)).collect();

    assert!(outcomes[..3]
        .iter()
        .all(|o| *o == CommitOutcome::Committed));
    assert_eq!(
        outcomes[3],
        CommitOutcome::SegmentCompleted {
            segment: 0,
            anchor: Some(Vec2::new(-1.0, 1.0)),
        }
    );

    let segment = session.segment_slice(0).expect("Segment 0 sollte existieren");
    assert_relative_eq!(segment[0].position.x, 0.0);
    assert_relative_eq!(segment[0].position.y, 0.0);
    assert_relative_eq!(segment[MAX_CURVE - 1].position.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(segment[MAX_CURVE - 1].position.y, 1.0, epsilon = 1e-6);

    for (i, p) in inputs.iter().enumerate() {
        let marker = session.marker_slice(i).expect("Marker sollte existieren");
        let expected = marker_for(*p);
        for (v, e) in marker.iter().zip(expected) {
            assert_relative_eq!(v.position.x, e.x);
            assert_relative_eq!(v.position.y, e.y);
        }
    }
}

#[test]
fn test_samples_lie_on_the_bezier() {
    let mut session = CurveSession::new();
    let control = [
        Vec2::new(-0.8, -0.2),
        Vec2::new(-0.4, 0.7),
        Vec2::new(0.3, -0.6),
        Vec2::new(0.9, 0.1),
    ];
    for p in control {
        session.commit(p);
    }

    let segment = session.segment_slice(0).expect("Segment 0 sollte existieren");
    for (j, v) in segment.iter().enumerate() {
        let t = j as f32 / (MAX_CURVE - 1) as f32;
        let expected = cubic_bezier(control[0], control[1], control[2], control[3], t);
        assert_relative_eq!(v.position.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(v.position.y, expected.y, epsilon = 1e-5);
    }
}

#[test]
fn test_clicks_mapped_from_pixels_reach_capacity() {
    let mut session = CurveSession::new();
    let center = Vec2::new(512.0, 300.0);

    let mut px = 0.0;
    while !session.is_finalized() {
        session.commit(normalize_pointer(Vec2::new(px, 150.0), center));
        px += 10.0;
    }

    assert_eq!(session.index(), MAX_VERTEX);
    assert_eq!(session.complete_segment_count(), MAX_SEGMENTS);
    assert_eq!(session.commit(Vec2::ZERO), CommitOutcome::Ignored);
    assert_relative_eq!(session.points()[0].position.y, 0.5);
}

#[test]
fn test_restore_without_save_reports_no_snapshot() {
    let mut session = CurveSession::new();
    session.commit(Vec2::ONE);

    let err = session.restore().expect_err("Laden ohne Snapshot sollte fehlschlagen");

    assert_eq!(err, CurveError::NoSnapshot);
    assert_eq!(session.count(), 1);
    assert_eq!(session.phase(), SessionPhase::Building);
}
