// Host-side tests for blob spawning, motion, fading and death.

use app_core::blob::{blob_alpha, blob_stage, is_dead, spawn_blob, update_blob};
use app_core::config::BlobTuning;
use app_core::{Blob, BlobField, BlobStage, Edge, Tuning};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

fn tuning() -> BlobTuning {
    Tuning::default().blobs
}

fn centered_blob() -> Blob {
    Blob {
        birth_ms: 0.0,
        lifespan_ms: 12_000.0,
        position: Vec2::new(400.0, 300.0),
        velocity: Vec2::ZERO,
        phase: 0.0,
        max_size: 200.0,
        edge: Edge::Bottom,
        fade_start_ms: None,
    }
}

#[test]
fn spawns_outside_an_edge_heading_inward() {
    let t = tuning();
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; 4];
    for _ in 0..200 {
        let b = spawn_blob(&mut rng, CANVAS, 1_000.0, &t);
        let (lo, hi) = (0.5 * t.speed_multiplier, 1.0 * t.speed_multiplier);
        let inward = match b.edge {
            Edge::Bottom => {
                assert!(b.position.y > CANVAS.y);
                -b.velocity.y
            }
            Edge::Top => {
                assert!(b.position.y < 0.0);
                b.velocity.y
            }
            Edge::Right => {
                assert!(b.position.x > CANVAS.x);
                -b.velocity.x
            }
            Edge::Left => {
                assert!(b.position.x < 0.0);
                b.velocity.x
            }
        };
        assert!(inward >= lo - 1e-4 && inward <= hi + 1e-4, "inward {}", inward);
        assert!(b.max_size >= CANVAS.x * t.size_range.0 - 1e-3);
        assert!(b.max_size <= CANVAS.x * t.size_range.1 + 1e-3);
        assert_eq!(b.birth_ms, 1_000.0);
        assert!(!b.is_fading());
        seen[Edge::ALL.iter().position(|e| *e == b.edge).unwrap()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn fade_starts_once_when_button_hidden() {
    let t = tuning();
    let mut b = centered_blob();
    assert!(!update_blob(&mut b, 500.0, true, 1, &t));
    assert_eq!(b.fade_start_ms, None);

    assert!(update_blob(&mut b, 1_000.0, false, 2, &t));
    assert_eq!(b.fade_start_ms, Some(1_000.0));

    assert!(!update_blob(&mut b, 2_000.0, false, 3, &t));
    // visibility returning does not cancel a fade
    assert!(!update_blob(&mut b, 3_000.0, true, 4, &t));
    assert_eq!(b.fade_start_ms, Some(1_000.0));
}

#[test]
fn dies_strictly_after_fade_completes() {
    let mut b = centered_blob();
    b.fade_start_ms = Some(1_000.0);
    assert_eq!(blob_stage(&b, 5_000.0, CANVAS, 4_000.0), BlobStage::Fading);
    assert!(!is_dead(&b, 5_000.0, CANVAS, 4_000.0));
    assert!(is_dead(&b, 5_000.5, CANVAS, 4_000.0));
}

#[test]
fn fading_blob_is_not_killed_by_leaving_bounds() {
    let mut b = centered_blob();
    b.position = Vec2::new(-5_000.0, 300.0);
    b.fade_start_ms = Some(1_000.0);
    assert_eq!(blob_stage(&b, 2_000.0, CANVAS, 4_000.0), BlobStage::Fading);
}

#[test]
fn out_of_bounds_beyond_max_size_is_dead() {
    let mut b = centered_blob();
    b.position = Vec2::new(-199.0, 300.0);
    assert_eq!(blob_stage(&b, 0.0, CANVAS, 4_000.0), BlobStage::Growing);
    b.position = Vec2::new(-201.0, 300.0);
    assert!(is_dead(&b, 0.0, CANVAS, 4_000.0));
    b.position = Vec2::new(400.0, CANVAS.y + 201.0);
    assert!(is_dead(&b, 0.0, CANVAS, 4_000.0));
}

#[test]
fn alpha_follows_lifespan_envelope() {
    let t = tuning();
    let b = centered_blob();
    assert!(blob_alpha(&b, 0.0, &t).abs() < 1e-6);
    assert!((blob_alpha(&b, 6_000.0, &t) - t.peak_alpha).abs() < 1e-4);
    assert!(blob_alpha(&b, 12_000.0, &t).abs() < 1e-4);
}

#[test]
fn fading_scales_alpha_down_to_zero() {
    let t = tuning();
    let steady = centered_blob();
    let mut fading = centered_blob();
    fading.fade_start_ms = Some(4_000.0);

    let full = blob_alpha(&steady, 6_000.0, &t);
    let half = blob_alpha(&fading, 6_000.0, &t);
    assert!((half - full * 0.5).abs() < 1e-4);
    assert!(blob_alpha(&fading, 8_000.0, &t).abs() < 1e-6);
}

#[test]
fn velocity_carries_blob_with_bounded_wander() {
    let t = tuning();
    let mut b = centered_blob();
    b.velocity = Vec2::new(0.0, -1.5);
    let start = b.position;
    for tick in 1..=10 {
        update_blob(&mut b, tick as f64 * 16.0, true, tick, &t);
    }
    let drift = b.position - start;
    assert!((drift.y - -15.0).abs() <= 10.0 * t.wander_amplitude + 1e-3);
    assert!(drift.x.abs() <= 10.0 * t.wander_amplitude + 1e-3);
}

#[test]
fn field_counts_fades_and_removals() {
    let t = tuning();
    let mut field = BlobField::default();
    let mut rng = StdRng::seed_from_u64(3);
    field.spawn(&mut rng, CANVAS, 0.0, &t);
    field.spawn(&mut rng, CANVAS, 0.0, &t);
    assert_eq!(field.len(), 2);

    assert_eq!(field.update(100.0, false, 1, &t), 2);
    assert_eq!(field.update(200.0, false, 2, &t), 0);
    assert_eq!(field.prune(4_100.0, CANVAS, t.fade_out_ms), 0);
    assert_eq!(field.prune(4_100.5, CANVAS, t.fade_out_ms), 2);
    assert!(field.is_empty());
}
