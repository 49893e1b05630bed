//! Startup configuration. Built once by a frontend, validated, then handed to
//! [`crate::Installation::new`]; nothing here changes while the installation runs.

use crate::color::Hsb;
use crate::constants::*;
use crate::ease::lerp;
use crate::error::ConfigError;

/// Per-pixel detection threshold and accumulated-energy activation threshold,
/// both derived from one sensitivity knob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub sensitivity: f32,
    pub activation: f32,
}

impl Thresholds {
    pub fn from_sensitivity(sensitivity: f32) -> Self {
        let s = sensitivity.clamp(0.0, 1.0);
        Self {
            sensitivity: lerp(SENSITIVITY_THRESHOLD_RANGE.0, SENSITIVITY_THRESHOLD_RANGE.1, s),
            activation: lerp(ACTIVATION_THRESHOLD_RANGE.0, ACTIVATION_THRESHOLD_RANGE.1, s),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MotionTuning {
    pub sensitivity: f32,
    pub noise_floor: u32,
    pub decay: f32,
    pub capture_width: u32,
    pub capture_height: u32,
    pub stride: u32,
}

#[derive(Clone, Debug)]
pub struct BlobTuning {
    pub max_blobs: usize,
    pub spawn_cooldown_ms: f64,
    pub lifespan_ms: f64,
    pub fade_out_ms: f64,
    pub speed_multiplier: f32,
    pub peak_alpha: f32,
    pub size_range: (f32, f32),
    pub wander_rate: f32,
    pub wander_amplitude: f32,
    pub glow_blur: f32,
    pub core_blur: f32,
}

#[derive(Clone, Debug)]
pub struct ButtonTuning {
    pub size: f32,
    pub visibility_timeout_ms: f64,
    pub cooldown_ms: f64,
    pub max_hold_ms: f64,
    pub fade_rate: f32,
    pub grow_rate: f32,
    pub grow_factor: f32,
    pub glow_blur: f32,
    pub glow_grow_factor: f32,
    pub core_blur: f32,
    pub press_min_alpha: f32,
    pub draw_min_alpha: f32,
}

#[derive(Clone, Debug)]
pub struct TextTuning {
    pub messages: Vec<String>,
    pub font_size: f32,
    pub opacity: f32,
    pub dot_size_range: (f32, f32),
    pub breathing_speed: f64,
    pub duration_range_ms: (f64, f64),
    pub glow_blur: f32,
    pub sample_step: usize,
}

#[derive(Clone, Debug)]
pub struct MeshTuning {
    pub density: usize,
    pub wander_amount: f32,
    pub wander_speed: f32,
    pub blur: f32,
    pub circle_scale: f32,
    pub gradient: (Hsb, Hsb),
}

#[derive(Clone, Debug)]
pub struct Tuning {
    pub seed: u64,
    pub motion: MotionTuning,
    pub blobs: BlobTuning,
    pub button: ButtonTuning,
    pub text: TextTuning,
    pub mesh: MeshTuning,
    pub presence_color: Hsb,
    pub grain_amount: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            motion: MotionTuning {
                sensitivity: SENSITIVITY,
                noise_floor: MOTION_NOISE_FLOOR,
                decay: ENERGY_DECAY,
                capture_width: CAPTURE_WIDTH,
                capture_height: CAPTURE_HEIGHT,
                stride: MOTION_STRIDE,
            },
            blobs: BlobTuning {
                max_blobs: MAX_BLOBS,
                spawn_cooldown_ms: SPAWN_COOLDOWN_MS,
                lifespan_ms: BLOB_LIFESPAN_MS,
                fade_out_ms: BLOB_FADE_OUT_MS,
                speed_multiplier: SPEED_MULTIPLIER,
                peak_alpha: BLOB_PEAK_ALPHA,
                size_range: BLOB_SIZE_RANGE,
                wander_rate: BLOB_WANDER_RATE,
                wander_amplitude: BLOB_WANDER_AMPLITUDE,
                glow_blur: BLOB_GLOW_BLUR,
                core_blur: BLOB_CORE_BLUR,
            },
            button: ButtonTuning {
                size: BUTTON_SIZE,
                visibility_timeout_ms: BUTTON_VISIBILITY_TIMEOUT_MS,
                cooldown_ms: BUTTON_COOLDOWN_MS,
                max_hold_ms: MAX_HOLD_MS,
                fade_rate: BUTTON_FADE_RATE,
                grow_rate: BUTTON_GROW_RATE,
                grow_factor: BUTTON_GROW_FACTOR,
                glow_blur: BUTTON_GLOW_BLUR,
                glow_grow_factor: BUTTON_GLOW_GROW_FACTOR,
                core_blur: BUTTON_CORE_BLUR,
                press_min_alpha: BUTTON_PRESS_MIN_ALPHA,
                draw_min_alpha: BUTTON_DRAW_MIN_ALPHA,
            },
            text: TextTuning {
                messages: MESSAGES.iter().map(|m| m.to_string()).collect(),
                font_size: TEXT_FONT_SIZE,
                opacity: TEXT_OPACITY,
                dot_size_range: TEXT_DOT_SIZE_RANGE,
                breathing_speed: TEXT_BREATHING_SPEED,
                duration_range_ms: TEXT_ANIM_DURATION_RANGE_MS,
                glow_blur: TEXT_GLOW_BLUR,
                sample_step: TEXT_SAMPLE_STEP,
            },
            mesh: MeshTuning {
                density: MESH_DENSITY,
                wander_amount: MESH_WANDER_AMOUNT,
                wander_speed: MESH_WANDER_SPEED,
                blur: MESH_BLUR,
                circle_scale: MESH_CIRCLE_SCALE,
                gradient: (
                    Hsb::from_array(GRADIENT_HSB_1),
                    Hsb::from_array(GRADIENT_HSB_2),
                ),
            },
            presence_color: Hsb::from_array(PRESENCE_HSB),
            grain_amount: GRAIN_AMOUNT,
        }
    }
}

impl Tuning {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::from_sensitivity(self.motion.sensitivity)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.messages.is_empty() {
            return Err(ConfigError::NoMessages);
        }
        let s = self.motion.sensitivity;
        if !(0.0..=1.0).contains(&s) {
            return Err(ConfigError::SensitivityOutOfRange(s));
        }
        if self.motion.capture_width == 0 || self.motion.capture_height == 0 {
            return Err(ConfigError::EmptyCapture {
                width: self.motion.capture_width,
                height: self.motion.capture_height,
            });
        }
        positive("motion.stride", self.motion.stride as f64)?;
        positive("blobs.lifespan_ms", self.blobs.lifespan_ms)?;
        positive("blobs.fade_out_ms", self.blobs.fade_out_ms)?;
        positive("button.max_hold_ms", self.button.max_hold_ms)?;
        positive("button.size", self.button.size as f64)?;
        positive("text.font_size", self.text.font_size as f64)?;
        positive("text.sample_step", self.text.sample_step as f64)?;
        if self.mesh.density < 2 {
            return Err(ConfigError::MeshTooSparse(self.mesh.density));
        }
        let (min, max) = self.text.duration_range_ms;
        positive("text.duration_range_ms.0", min)?;
        if min > max {
            return Err(ConfigError::InvertedRevealBounds { min, max });
        }
        rate("button.fade_rate", self.button.fade_rate)?;
        rate("button.grow_rate", self.button.grow_rate)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn rate(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::EasingRate { name, value })
    }
}
