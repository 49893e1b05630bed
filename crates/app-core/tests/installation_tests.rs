// End-to-end scenarios driving the installation the way a frame loop does.

use app_core::scene::grain_count;
use app_core::{
    ButtonPhase, ConfigError, GlyphSampler, Installation, MotionFrame, TextOutline, TickEvent,
    Tuning,
};
use glam::Vec2;

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

/// Lays every message out as a dotted baseline, one point per character.
#[derive(Default)]
struct BaselineSampler {
    calls: Vec<String>,
}

impl GlyphSampler for BaselineSampler {
    fn sample(&mut self, message: &str, font_size: f32) -> TextOutline {
        self.calls.push(message.to_string());
        let n = message.chars().count().max(1);
        TextOutline {
            points: (0..n).map(|i| Vec2::new(i as f32 * 10.0, font_size)).collect(),
            size: Vec2::new(n as f32 * 10.0, font_size),
        }
    }
}

fn installation() -> Installation {
    Installation::new(Tuning::default(), CANVAS).expect("default tuning is valid")
}

/// Spawn once at `now_ms`, then tick still frames until the button accepts presses.
fn with_pressable_button(now_ms: f64) -> (Installation, f64) {
    let mut inst = installation();
    assert!(inst.step(now_ms, 250).spawned());
    let mut t = now_ms;
    while !inst.button.can_press() {
        t += 16.0;
        inst.step(t, 0);
        assert!(t < now_ms + 2_000.0, "button never became pressable");
    }
    (inst, t)
}

#[test]
fn strong_motion_spawns_and_shows_button() {
    let mut inst = installation();
    let report = inst.step(1_000.0, 250);
    assert!(report.spawned());
    assert_eq!(inst.blobs.len(), 1);
    assert_eq!(inst.energy.energy, 0.0);
    assert_eq!(inst.energy.last_spawn_ms, 1_000.0);
    assert!(inst.button.is_visible);
    assert!(report.events.contains(&TickEvent::ButtonPhase {
        from: ButtonPhase::Hidden,
        to: ButtonPhase::VisibleIdle,
    }));

    // silence afterwards, well past the spawn cooldown, never spawns again
    let mut now = 1_000.0;
    for _ in 0..200 {
        now += 16.0;
        let report = inst.step(now, 0);
        assert!(!report.spawned());
    }
    assert!(now > 1_000.0 + inst.tuning.blobs.spawn_cooldown_ms);
    assert_eq!(inst.blobs.len(), 1);
}

#[test]
fn hold_survives_resize() {
    let (mut inst, t) = with_pressable_button(1_000.0);
    let mut sampler = BaselineSampler::default();
    assert!(inst.press(inst.button.position, t));

    inst.resize(Vec2::new(1_024.0, 768.0));
    assert!(inst.button.is_holding());
    assert_eq!(inst.button.position, Vec2::new(512.0, 576.0));
    let report = inst.step(t + 16.0, 0);
    assert!(report
        .events
        .iter()
        .all(|e| !matches!(e, TickEvent::ButtonPhase { .. })));
    assert_eq!(inst.button.alpha.target, 1.0);

    assert_eq!(inst.release(t + 1_500.0, &mut sampler), Some(1_500.0));
    assert!(inst.text.is_animating);
    assert_eq!(inst.text.duration_ms, 2_750.0);
    assert_eq!(inst.button.phase(), ButtonPhase::Cooldown);
}

#[test]
fn grain_count_rounds_partial_specks_up() {
    assert_eq!(grain_count(Vec2::new(10.0, 10.0), 1.0, 500.0), 1);
    assert_eq!(grain_count(Vec2::new(100.0, 10.0), 1.0, 500.0), 2);
    assert_eq!(grain_count(CANVAS, 0.3, 500.0), 288);
    assert_eq!(grain_count(CANVAS, 0.0, 500.0), 0);
}

#[test]
fn cooldown_gates_back_to_back_spawns() {
    let mut inst = installation();
    assert!(inst.step(1_000.0, 250).spawned());
    assert!(!inst.step(1_500.0, 400).spawned());
    assert!(inst.step(1_900.0, 400).spawned());
    assert_eq!(inst.blobs.len(), 2);
}

#[test]
fn weak_motion_never_spawns() {
    let mut inst = installation();
    for i in 0..500 {
        let report = inst.step(1_000.0 + i as f64 * 16.0, 9);
        assert!(!report.spawned());
        assert_eq!(report.energy, 0.0);
    }
    assert!(inst.blobs.is_empty());
    assert!(!inst.button.is_visible);
}

#[test]
fn blob_count_never_exceeds_capacity() {
    let mut inst = installation();
    let max = inst.tuning.blobs.max_blobs;
    for i in 0..200 {
        inst.step(1_000.0 + i as f64 * 900.0, 10_000);
        assert!(inst.blobs.len() <= max);
    }
}

#[test]
fn capture_frames_drive_spawning() {
    let mut inst = installation();
    let m = &inst.tuning.motion;
    let (w, h) = (m.capture_width, m.capture_height);
    let black = MotionFrame::filled(w, h, [0, 0, 0]);
    let white = MotionFrame::filled(w, h, [255, 255, 255]);

    let primed = inst.tick(900.0, Some(&black));
    assert_eq!(primed.motion_count, 0);
    let moved = inst.tick(916.0, Some(&white));
    assert_eq!(moved.motion_count, w * h);
    assert!(moved.spawned());

    let idle = inst.tick(932.0, None);
    assert_eq!(idle.motion_count, 0);
}

#[test]
fn press_while_hidden_does_nothing() {
    let mut inst = installation();
    let mut sampler = BaselineSampler::default();
    let home = inst.button.position;
    assert!(!inst.press(home, 100.0));
    assert_eq!(inst.release(200.0, &mut sampler), None);
    assert!(sampler.calls.is_empty());
    assert!(!inst.text.is_animating);
    assert!(inst.text.points.is_empty());
}

#[test]
fn hold_paces_the_reveal() {
    let (mut inst, t) = with_pressable_button(1_000.0);
    let mut sampler = BaselineSampler::default();
    let home = inst.button.position;

    assert!(inst.press(home, t));
    assert_eq!(inst.button.phase(), ButtonPhase::Held);
    assert_eq!(inst.release(t + 1_500.0, &mut sampler), Some(1_500.0));

    assert_eq!(sampler.calls.len(), 1);
    assert!(inst.tuning.text.messages.contains(&sampler.calls[0]));
    assert_eq!(inst.text.message.as_deref(), Some(sampler.calls[0].as_str()));
    assert!(inst.text.is_animating);
    assert_eq!(inst.text.duration_ms, 2_750.0);
    assert_eq!(inst.button.phase(), ButtonPhase::Cooldown);
}

#[test]
fn reveal_finishes_and_is_reported() {
    let (mut inst, t) = with_pressable_button(1_000.0);
    let mut sampler = BaselineSampler::default();
    assert!(inst.press(inst.button.position, t));
    inst.release(t + 100.0, &mut sampler);

    let mut finished = 0;
    let mut now = t + 100.0;
    while now < t + 6_000.0 {
        now += 16.0;
        let report = inst.step(now, 0);
        finished += report
            .events
            .iter()
            .filter(|e| **e == TickEvent::RevealFinished)
            .count();
    }
    assert_eq!(finished, 1);
    assert_eq!(inst.text.visible_count(), inst.text.points.len());
}

#[test]
fn new_hold_clears_previous_text() {
    let (mut inst, t) = with_pressable_button(1_000.0);
    let mut sampler = BaselineSampler::default();
    assert!(inst.press(inst.button.position, t));
    inst.release(t + 500.0, &mut sampler);
    assert!(inst.text.message.is_some());

    // ride out the cooldown with fresh motion keeping the button up
    let mut now = t + 500.0;
    while now < t + 500.0 + 4_200.0 {
        now += 16.0;
        inst.step(now, 0);
    }
    inst.button.activate(now);
    while !inst.button.can_press() {
        now += 16.0;
        inst.step(now, 0);
    }
    assert!(inst.press(inst.button.position, now));
    assert!(inst.text.message.is_none());
    assert!(inst.text.points.is_empty());
}

#[test]
fn hidden_button_fades_blobs_out() {
    let mut inst = installation();
    inst.step(1_000.0, 250);
    let mut now = 1_000.0;
    let mut faded = false;
    // coarse ticks keep the blob on screen until the fade begins
    while now < 1_000.0 + 12_000.0 + 4_000.0 + 500.0 {
        now += 100.0;
        let report = inst.step(now, 0);
        faded |= report
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::FadeStarted(_)));
    }
    assert!(faded);
    assert!(!inst.button.is_visible);
    assert!(inst.blobs.is_empty());
}

#[test]
fn resize_relays_out_without_killing_blobs() {
    let (mut inst, t) = with_pressable_button(1_000.0);
    let mut sampler = BaselineSampler::default();
    assert!(inst.press(inst.button.position, t));
    inst.release(t + 300.0, &mut sampler);

    let canvas = Vec2::new(1_024.0, 768.0);
    inst.resize(canvas);
    assert_eq!(inst.canvas, canvas);
    assert_eq!(inst.blobs.len(), 1);
    assert_eq!(inst.button.position, Vec2::new(512.0, 576.0));
    assert_eq!(inst.button.phase(), ButtonPhase::Hidden);
    assert!(!inst.text.is_animating);
    assert!(inst.text.points.is_empty());
    let far = inst.mesh.points.last().map(|p| p.base);
    assert_eq!(far, Some(canvas));
}

#[test]
fn scene_layers_reflect_state() {
    let mut inst = installation();
    let empty = inst.scene(0.0);
    assert_eq!(empty.mesh.len(), 25);
    assert!(empty.glow.is_empty());
    assert!(empty.text.is_empty());
    assert_eq!(empty.grain.len(), 288);

    inst.step(1_000.0, 250);
    let scene = inst.scene(7_000.0);
    // blob glow + core, button glow + core
    assert_eq!(scene.glow.len(), 4);
    assert!(scene.glow.iter().all(|c| c.color[3] > 0.0));
}

#[test]
fn same_seed_same_run() {
    let run = || {
        let mut inst = installation();
        for i in 0..50 {
            inst.step(1_000.0 + i as f64 * 900.0, 300);
        }
        inst.blobs
            .blobs
            .iter()
            .map(|b| (b.position, b.max_size))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn invalid_tuning_is_rejected() {
    let mut t = Tuning::default();
    t.text.messages.clear();
    assert_eq!(
        Installation::new(t, CANVAS).err(),
        Some(ConfigError::NoMessages)
    );

    let mut t = Tuning::default();
    t.motion.sensitivity = 1.5;
    assert_eq!(
        Installation::new(t, CANVAS).err(),
        Some(ConfigError::SensitivityOutOfRange(1.5))
    );

    let mut t = Tuning::default();
    t.text.duration_range_ms = (4_000.0, 1_500.0);
    assert_eq!(
        Installation::new(t, CANVAS).err(),
        Some(ConfigError::InvertedRevealBounds {
            min: 4_000.0,
            max: 1_500.0
        })
    );

    let mut t = Tuning::default();
    t.mesh.density = 1;
    assert_eq!(
        Installation::new(t, CANVAS).err(),
        Some(ConfigError::MeshTooSparse(1))
    );
}
