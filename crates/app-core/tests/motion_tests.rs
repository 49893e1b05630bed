// Host-side tests for frame differencing and the motion-energy gate.

use app_core::config::Thresholds;
use app_core::{MotionEnergy, MotionEstimator, MotionFrame, Tuning};

fn frame_with(width: u32, height: u32, changed: &[(u32, u32)], rgb: [u8; 3]) -> MotionFrame {
    let mut f = MotionFrame::filled(width, height, [0, 0, 0]);
    for &(x, y) in changed {
        let i = ((y * width + x) * 4) as usize;
        f.rgba[i..i + 3].copy_from_slice(&rgb);
    }
    f
}

fn energy() -> MotionEnergy {
    MotionEnergy::new(&Tuning::default().motion)
}

#[test]
fn missing_capture_counts_nothing_and_keeps_previous() {
    let mut est = MotionEstimator::new(50.0, 1);
    let a = MotionFrame::filled(4, 4, [10, 10, 10]);
    assert_eq!(est.estimate(Some(&a)), 0);
    assert_eq!(est.estimate(None), 0);
    assert_eq!(est.previous(), Some(&a));
}

#[test]
fn first_frame_only_primes() {
    let mut est = MotionEstimator::new(50.0, 1);
    let white = MotionFrame::filled(8, 8, [255, 255, 255]);
    assert_eq!(est.estimate(Some(&white)), 0);
    assert_eq!(est.estimate(Some(&white)), 0);
}

#[test]
fn counts_pixels_whose_distance_exceeds_threshold() {
    let mut est = MotionEstimator::new(50.0, 1);
    let black = MotionFrame::filled(10, 10, [0, 0, 0]);
    est.estimate(Some(&black));

    let moved = frame_with(10, 10, &[(0, 0), (3, 4), (9, 9)], [200, 0, 0]);
    assert_eq!(est.estimate(Some(&moved)), 3);
    // previous is now `moved`, so the same frame again is still
    assert_eq!(est.estimate(Some(&moved)), 0);
    assert_eq!(est.previous(), Some(&moved));
}

#[test]
fn distance_equal_to_threshold_is_not_motion() {
    let mut est = MotionEstimator::new(50.0, 1);
    est.estimate(Some(&MotionFrame::filled(2, 2, [0, 0, 0])));
    let at = frame_with(2, 2, &[(0, 0)], [50, 0, 0]);
    assert_eq!(est.estimate(Some(&at)), 0);

    let mut est = MotionEstimator::new(50.0, 1);
    est.estimate(Some(&MotionFrame::filled(2, 2, [0, 0, 0])));
    let above = frame_with(2, 2, &[(0, 0)], [51, 0, 0]);
    assert_eq!(est.estimate(Some(&above)), 1);
}

#[test]
fn stride_samples_a_regular_subset() {
    let mut est = MotionEstimator::new(10.0, 2);
    est.estimate(Some(&MotionFrame::filled(4, 4, [0, 0, 0])));
    let all = MotionFrame::filled(4, 4, [255, 255, 255]);
    assert_eq!(est.estimate(Some(&all)), 4);
}

#[test]
fn size_change_reprimes() {
    let mut est = MotionEstimator::new(10.0, 1);
    est.estimate(Some(&MotionFrame::filled(4, 4, [0, 0, 0])));
    let bigger = MotionFrame::filled(6, 6, [255, 255, 255]);
    assert_eq!(est.estimate(Some(&bigger)), 0);
    assert_eq!(est.previous(), Some(&bigger));
}

#[test]
fn frame_constructor_checks_length() {
    assert!(MotionFrame::new(2, 2, vec![0; 16]).is_some());
    assert!(MotionFrame::new(2, 2, vec![0; 12]).is_none());
}

#[test]
fn malformed_frame_is_treated_as_missing() {
    let mut est = MotionEstimator::new(50.0, 1);
    let good = MotionFrame::filled(4, 4, [0, 0, 0]);
    est.estimate(Some(&good));

    let short = MotionFrame {
        width: 4,
        height: 4,
        rgba: vec![255; 10],
    };
    assert!(!short.is_well_formed());
    assert_eq!(est.estimate(Some(&short)), 0);
    assert_eq!(est.estimate(Some(&short)), 0);
    assert_eq!(est.previous(), Some(&good));

    let white = MotionFrame::filled(4, 4, [255, 255, 255]);
    assert_eq!(est.estimate(Some(&white)), 16);
}

#[test]
fn thresholds_interpolate_from_sensitivity() {
    let t = Thresholds::from_sensitivity(0.7);
    assert!((t.sensitivity - 55.0).abs() < 1e-3);
    assert!((t.activation - 190.0).abs() < 1e-3);
    let lo = Thresholds::from_sensitivity(0.0);
    assert_eq!((lo.sensitivity, lo.activation), (20.0, 50.0));
    let hi = Thresholds::from_sensitivity(1.0);
    assert_eq!((hi.sensitivity, hi.activation), (70.0, 250.0));
}

#[test]
fn counts_at_noise_floor_are_ignored() {
    let mut e = energy();
    assert_eq!(e.accumulate(10), 0.0);
    let after = e.accumulate(11);
    assert!((after - 11.0 * 0.95).abs() < 1e-4);
}

#[test]
fn energy_decays_geometrically_and_stays_non_negative() {
    let mut e = energy();
    e.accumulate(100);
    let mut prev = e.energy;
    for _ in 0..500 {
        let next = e.accumulate(0);
        assert!(next >= 0.0);
        assert!(next <= prev);
        prev = next;
    }
    assert!(prev < 1e-6);
}

#[test]
fn record_spawn_zeroes_energy() {
    let mut e = energy();
    e.accumulate(1000);
    e.record_spawn(1234.0);
    assert_eq!(e.energy, 0.0);
    assert_eq!(e.last_spawn_ms, 1234.0);
}

#[test]
fn spawn_gate_needs_energy_strictly_above_threshold() {
    let mut e = energy();
    e.energy = e.thresholds.activation;
    assert!(!e.should_spawn(10_000.0, 800.0, 0, 7));
    e.energy = e.thresholds.activation + 0.01;
    assert!(e.should_spawn(10_000.0, 800.0, 0, 7));
}

#[test]
fn spawn_gate_needs_cooldown_strictly_elapsed() {
    let mut e = energy();
    e.energy = 1_000.0;
    e.last_spawn_ms = 2_000.0;
    assert!(!e.should_spawn(2_800.0, 800.0, 0, 7));
    assert!(e.should_spawn(2_800.5, 800.0, 0, 7));
}

#[test]
fn spawn_gate_needs_capacity() {
    let mut e = energy();
    e.energy = 1_000.0;
    assert!(!e.should_spawn(10_000.0, 800.0, 7, 7));
    assert!(e.should_spawn(10_000.0, 800.0, 6, 7));
}
