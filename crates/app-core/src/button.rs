//! Presence button: appears on activity, accepts a press-and-hold, then rests
//! on a cooldown. Size, glow and alpha are eased toward per-phase targets.

use crate::config::ButtonTuning;
use crate::ease::Eased;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Hidden,
    VisibleIdle,
    Held,
    Cooldown,
}

/// Exists only between a qualifying press and its release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoldSession {
    pub start_ms: f64,
}

impl HoldSession {
    /// Elapsed hold clamped to `[0, max_hold_ms]`.
    pub fn duration(&self, now_ms: f64, max_hold_ms: f64) -> f64 {
        (now_ms - self.start_ms).clamp(0.0, max_hold_ms)
    }
}

#[derive(Clone, Debug)]
pub struct PresenceButton {
    pub position: Vec2,
    pub is_visible: bool,
    pub last_active_ms: f64,
    pub alpha: Eased,
    pub size: Eased,
    pub glow: Eased,
    /// `Some(start)` while cooling down after a release.
    pub cooldown_start_ms: Option<f64>,
    pub hold: Option<HoldSession>,
    tuning: ButtonTuning,
}

impl PresenceButton {
    pub fn new(position: Vec2, tuning: &ButtonTuning) -> Self {
        Self {
            position,
            is_visible: false,
            last_active_ms: 0.0,
            alpha: Eased::new(0.0, tuning.fade_rate),
            size: Eased::new(tuning.size, tuning.grow_rate),
            glow: Eased::new(tuning.glow_blur, tuning.grow_rate),
            cooldown_start_ms: None,
            hold: None,
            tuning: tuning.clone(),
        }
    }

    /// Default placement: horizontally centered, three quarters down.
    pub fn home_position(canvas: Vec2) -> Vec2 {
        Vec2::new(canvas.x / 2.0, canvas.y * 3.0 / 4.0)
    }

    pub fn tuning(&self) -> &ButtonTuning {
        &self.tuning
    }

    #[inline]
    pub fn is_holding(&self) -> bool {
        self.hold.is_some()
    }

    #[inline]
    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown_start_ms.is_some()
    }

    pub fn phase(&self) -> ButtonPhase {
        if self.is_holding() {
            ButtonPhase::Held
        } else if self.is_on_cooldown() {
            ButtonPhase::Cooldown
        } else if self.is_visible {
            ButtonPhase::VisibleIdle
        } else {
            ButtonPhase::Hidden
        }
    }

    /// Activity seen: show the button and restart its inactivity window.
    pub fn activate(&mut self, now_ms: f64) {
        if !self.is_visible {
            log::debug!("[button] visible at {:.0}ms", now_ms);
        }
        self.is_visible = true;
        self.last_active_ms = now_ms;
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.position) < self.size.current / 2.0
    }

    pub fn can_press(&self) -> bool {
        self.is_visible
            && !self.is_holding()
            && !self.is_on_cooldown()
            && self.alpha.current > self.tuning.press_min_alpha
    }

    /// Start a hold if the button is interactable and `point` is inside it.
    pub fn press(&mut self, point: Vec2, now_ms: f64) -> bool {
        if !self.can_press() || !self.contains(point) {
            return false;
        }
        self.hold = Some(HoldSession { start_ms: now_ms });
        log::debug!("[button] hold start at {:.0}ms", now_ms);
        true
    }

    /// End a hold. Returns the clamped hold duration and starts the cooldown;
    /// without an active hold this does nothing.
    pub fn release(&mut self, now_ms: f64) -> Option<f64> {
        let hold = self.hold.take()?;
        let held_ms = hold.duration(now_ms, self.tuning.max_hold_ms);
        self.cooldown_start_ms = Some(now_ms);
        log::debug!("[button] released after {:.0}ms, cooling down", held_ms);
        Some(held_ms)
    }

    /// Per-tick phase transitions followed by easing toward the phase targets.
    pub fn update(&mut self, now_ms: f64) {
        if let Some(start) = self.cooldown_start_ms {
            if now_ms > start + self.tuning.cooldown_ms {
                self.cooldown_start_ms = None;
                log::debug!("[button] cooldown over");
            }
        }

        let base_size = self.tuning.size;
        let base_glow = self.tuning.glow_blur;
        if self.is_holding() {
            self.size.target = base_size * self.tuning.grow_factor;
            self.glow.target = base_glow * self.tuning.glow_grow_factor;
            self.alpha.target = 1.0;
        } else if self.is_on_cooldown() {
            self.size.target = base_size;
            self.glow.target = base_glow;
            self.alpha.target = 0.0;
        } else {
            self.size.target = base_size;
            self.glow.target = base_glow;
            if self.is_visible && now_ms > self.last_active_ms + self.tuning.visibility_timeout_ms
            {
                self.is_visible = false;
                log::debug!("[button] hidden after inactivity");
            }
            self.alpha.target = if self.is_visible { 1.0 } else { 0.0 };
        }

        self.alpha.step();
        self.size.step();
        self.glow.step();
    }

    pub fn is_drawable(&self) -> bool {
        self.alpha.current >= self.tuning.draw_min_alpha
    }
}
