use platsync_geometry::ReferenceGeometry;
use platsync_store::MasterPointStore;
use platsync_sync::{PullOutcome, SyncConfig, SyncError, SyncOrchestrator};
use platsync_types::{Point2, ReferenceEdge, SectionKey, SketchFrame, Tolerances, TrueFrame};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::fs;
use std::path::Path;

type TP = Point2<TrueFrame>;
type SP = Point2<SketchFrame>;

fn section() -> SectionKey {
    SectionKey::new("12", "3N", "4W", "6th PM")
}

fn orchestrator(dir: &Path) -> SyncOrchestrator {
    SyncOrchestrator::new(SyncConfig::default().with_store_path(dir.join("master.json")))
}

/// Section 12's north line in the true frame: one mile wide.
fn true_edge() -> ReferenceEdge<TrueFrame> {
    ReferenceEdge::new(TP::new(10_000.0, 25_280.0), TP::new(15_280.0, 25_280.0), 1e-9).unwrap()
}

/// The same line as drawn in a sketch, rotated and at 1:100.
fn sketch_edge() -> ReferenceEdge<SketchFrame> {
    ReferenceEdge::new(SP::new(3.0, 4.0), SP::new(3.0 + 31.68, 4.0 + 42.24), 1e-9).unwrap()
}

fn close(a: SP, b: SP) -> bool {
    (a.x - b.x).abs() <= 1e-9 * (1.0 + a.x.abs()) && (a.y - b.y).abs() <= 1e-9 * (1.0 + a.y.abs())
}

/// Sketch-frame points inside the section square for `sketch_edge`.
fn local_residences() -> Vec<SP> {
    vec![SP::new(20.0, 5.0), SP::new(30.0, 0.0), SP::new(25.0, 20.0)]
}

// ── Push ─────────────────────────────────────────────────────────

#[test]
fn push_then_pull_reproduces_local_points() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());

    let pushed = orch
        .push(&section(), &true_edge(), &sketch_edge(), &local_residences())
        .unwrap();
    assert_eq!(pushed.appended, 3);
    assert_eq!(pushed.dropped, 0);

    let pulled = orch.pull(&section(), &true_edge(), &sketch_edge()).unwrap();
    assert_eq!(pulled.outcome(), PullOutcome::Placed(3));
    assert!(pulled.store_existed);
    for (got, want) in pulled.points.iter().zip(local_residences()) {
        assert!(close(*got, want), "{got} != {want}");
    }
}

#[test]
fn push_with_no_points_reports_nothing_and_does_not_create_store() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());

    let report = orch.push(&section(), &true_edge(), &sketch_edge(), &[]).unwrap();
    assert!(report.is_nothing_to_push());
    assert_eq!(report.appended, 0);
    assert!(!orch.store().exists().unwrap());
    assert!(report.to_string().starts_with("Nothing to push for Sec 12"));
}

#[test]
fn push_of_only_invalid_points_leaves_store_file_unmodified() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    orch.push(&section(), &true_edge(), &sketch_edge(), &local_residences()).unwrap();
    let before = fs::read(orch.store().path()).unwrap();

    let report = orch
        .push(
            &section(),
            &true_edge(),
            &sketch_edge(),
            &[SP::new(f64::NAN, 1.0), SP::new(1.0, f64::INFINITY)],
        )
        .unwrap();
    assert_eq!(report.appended, 0);
    assert_eq!(report.dropped, 2);
    assert_eq!(fs::read(orch.store().path()).unwrap(), before);
}

#[test]
fn degenerate_edge_fails_without_touching_store() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    // Built with a zero tolerance so the orchestrator's own check is what fails.
    let tiny = ReferenceEdge::new(SP::new(0.0, 0.0), SP::new(1e-10, 0.0), 0.0).unwrap();

    let err = orch
        .push(&section(), &true_edge(), &tiny, &local_residences())
        .unwrap_err();
    assert!(matches!(err, SyncError::DegenerateGeometry(_)));
    assert!(!orch.store().exists().unwrap());

    let err = orch.pull(&section(), &true_edge(), &tiny).unwrap_err();
    assert!(matches!(err, SyncError::DegenerateGeometry(_)));
}

#[test]
fn repeated_pushes_duplicate_points() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    for _ in 0..2 {
        orch.push(&section(), &true_edge(), &sketch_edge(), &local_residences()).unwrap();
    }
    assert_eq!(orch.store().count().unwrap(), Some(6));
}

// ── Pull ─────────────────────────────────────────────────────────

#[test]
fn pull_without_master_is_distinct_from_no_matches() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());

    let missing = orch.pull(&section(), &true_edge(), &sketch_edge()).unwrap();
    assert_eq!(missing.outcome(), PullOutcome::NoMaster);
    assert!(!missing.store_existed);
    assert!(missing.points.is_empty());

    // A residence far outside section 12.
    MasterPointStore::new(orch.store().path())
        .append_and_save(&[TP::new(-50_000.0, 0.0)], platsync_types::FeatureClass::Residence)
        .unwrap();

    let elsewhere = orch.pull(&section(), &true_edge(), &sketch_edge()).unwrap();
    assert_eq!(elsewhere.outcome(), PullOutcome::NoMatches);
    assert!(elsewhere.store_existed);
    assert!(elsewhere.points.is_empty());
    assert_eq!(elsewhere.scanned, 1);
    assert_ne!(missing.to_string(), elsewhere.to_string());
}

#[test]
fn pull_only_returns_points_inside_section_square() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    orch.store()
        .append_and_save(
            &[
                TP::new(10_000.0, 25_280.0), // north-west corner
                TP::new(12_000.0, 22_000.0), // inside
                TP::new(15_280.0, 20_000.0), // south-east corner
                TP::new(15_281.0, 22_000.0), // one foot east
                TP::new(12_000.0, 19_999.0), // one foot south
            ],
            platsync_types::FeatureClass::Residence,
        )
        .unwrap();

    let report = orch.pull(&section(), &true_edge(), &sketch_edge()).unwrap();
    assert_eq!(report.outcome(), PullOutcome::Placed(3));
    assert_eq!(report.scanned, 5);
    assert!(close(report.points[0], sketch_edge().left()));
    assert!(report.to_string().contains("Placed 3 of 5"));
}

#[test]
fn edges_picked_east_to_west_pull_the_same_section() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    orch.push(&section(), &true_edge(), &sketch_edge(), &local_residences()).unwrap();

    let (t, s) = (true_edge(), sketch_edge());
    let t_rev = ReferenceEdge::new(t.right(), t.left(), 1e-9).unwrap();
    let s_rev = ReferenceEdge::new(s.right(), s.left(), 1e-9).unwrap();
    let report = orch.pull(&section(), &t_rev, &s_rev).unwrap();

    assert_eq!(report.outcome(), PullOutcome::Placed(3));
    for (got, want) in report.points.iter().zip(local_residences()) {
        assert!(close(*got, want), "{got} != {want}");
    }
}

#[test]
fn pull_geometry_resolves_top_edge() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    orch.push(&section(), &true_edge(), &sketch_edge(), &local_residences()).unwrap();

    let parcel = ReferenceGeometry::Polygon(vec![
        TP::new(10_000.0, 20_000.0),
        TP::new(15_280.0, 20_000.0),
        TP::new(15_280.0, 25_280.0),
        TP::new(10_000.0, 25_280.0),
    ]);
    let report = orch.pull_geometry(&section(), &parcel, &sketch_edge()).unwrap();
    assert_eq!(report.outcome(), PullOutcome::Placed(3));
}

#[test]
fn pull_geometry_rejects_empty_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    let err = orch
        .pull_geometry(&section(), &ReferenceGeometry::Polyline(Vec::new()), &sketch_edge())
        .unwrap_err();
    assert!(matches!(err, SyncError::DegenerateGeometry(_)));
}

#[test]
fn corrupt_store_is_store_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let orch = orchestrator(dir.path());
    fs::write(orch.store().path(), "garbage").unwrap();

    let err = orch.pull(&section(), &true_edge(), &sketch_edge()).unwrap_err();
    assert!(matches!(err, SyncError::StoreUnavailable(_)));
    let err = orch
        .push(&section(), &true_edge(), &sketch_edge(), &local_residences())
        .unwrap_err();
    assert!(matches!(err, SyncError::StoreUnavailable(_)));
    assert_eq!(fs::read_to_string(orch.store().path()).unwrap(), "garbage");
}

#[cfg(unix)]
#[test]
fn unreachable_store_is_unavailable_not_missing() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"").unwrap();
    let orch = SyncOrchestrator::new(SyncConfig::default().with_store_path(blocker.join("master.json")));

    let err = orch.pull(&section(), &true_edge(), &sketch_edge()).unwrap_err();
    assert!(matches!(err, SyncError::StoreUnavailable(_)));
    let err = orch
        .push(&section(), &true_edge(), &sketch_edge(), &local_residences())
        .unwrap_err();
    assert!(matches!(err, SyncError::StoreUnavailable(_)));
}

#[test]
fn custom_containment_epsilon_widens_region() {
    let dir = tempfile::tempdir().unwrap();
    let tolerances = Tolerances {
        containment: 2.0,
        ..Tolerances::default()
    };
    let orch = SyncOrchestrator::with_store(
        MasterPointStore::new(dir.path().join("master.json")),
        tolerances,
    );
    orch.store()
        .append_and_save(&[TP::new(15_281.0, 22_000.0)], platsync_types::FeatureClass::Residence)
        .unwrap();
    let report = orch.pull(&section(), &true_edge(), &sketch_edge()).unwrap();
    assert_eq!(report.outcome(), PullOutcome::Placed(1));
}

// ── Round-trip law ───────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn push_pull_round_trip(
        sx in -500.0f64..500.0, sy in -500.0f64..500.0,
        dx in -100.0f64..100.0, dy in -100.0f64..100.0,
        fractions in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 1..10),
    ) {
        prop_assume!(dx.hypot(dy) > 1e-2);
        let dir = tempfile::tempdir().unwrap();
        let orch = orchestrator(dir.path());
        let sketch = ReferenceEdge::new(SP::new(sx, sy), SP::new(sx + dx, sy + dy), 1e-9).unwrap();

        // Place points inside the section square, expressed in true
        // coordinates, then move them into the sketch.
        let t = true_edge();
        let width = t.length();
        let truth: Vec<TP> = fractions
            .iter()
            .map(|&(fx, fy)| TP::new(t.left().x + fx * width, t.left().y - fy * width))
            .collect();
        let pair = platsync_geometry::build_transforms(&t, &sketch, &Tolerances::default()).unwrap();
        let local: Vec<SP> = truth.iter().map(|&p| pair.to_sketch(p)).collect();

        let pushed = orch.push(&section(), &t, &sketch, &local).unwrap();
        prop_assert_eq!(pushed.appended, local.len());

        let pulled = orch.pull(&section(), &t, &sketch).unwrap();
        prop_assert_eq!(pulled.points.len(), local.len());
        for (got, want) in pulled.points.iter().zip(&local) {
            prop_assert!((got.x - want.x).abs() <= 1e-9 * (1.0 + want.x.abs()) * (1.0 + 1.0 / pair.scale()));
            prop_assert!((got.y - want.y).abs() <= 1e-9 * (1.0 + want.y.abs()) * (1.0 + 1.0 / pair.scale()));
        }
    }
}
