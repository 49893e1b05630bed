// Default tuning shared by the web and native frontends.
// Times are milliseconds, alphas are 0..1, sizes are canvas pixels.

// Motion
pub const SENSITIVITY: f32 = 0.7; // single 0..1 knob for detection and activation
pub const SENSITIVITY_THRESHOLD_RANGE: (f32, f32) = (20.0, 70.0); // per-pixel RGB distance
pub const ACTIVATION_THRESHOLD_RANGE: (f32, f32) = (50.0, 250.0); // accumulated energy
pub const MOTION_NOISE_FLOOR: u32 = 10; // counts at or below this are ignored
pub const ENERGY_DECAY: f32 = 0.95; // applied once per tick
pub const CAPTURE_WIDTH: u32 = 160;
pub const CAPTURE_HEIGHT: u32 = 120;
pub const MOTION_STRIDE: u32 = 1; // sample every Nth pixel on both axes

// Blobs
pub const MAX_BLOBS: usize = 7;
pub const SPEED_MULTIPLIER: f32 = 1.5;
pub const BLOB_LIFESPAN_MS: f64 = 12_000.0;
pub const SPAWN_COOLDOWN_MS: f64 = 800.0;
pub const BLOB_FADE_OUT_MS: f64 = 4_000.0;
pub const BLOB_PEAK_ALPHA: f32 = 0.95;
pub const BLOB_SIZE_RANGE: (f32, f32) = (0.2, 0.5); // fraction of canvas width
pub const BLOB_WANDER_RATE: f32 = 0.02; // radians per tick
pub const BLOB_WANDER_AMPLITUDE: f32 = 0.5; // pixels per tick
pub const BLOB_GLOW_BLUR: f32 = 100.0;
pub const BLOB_CORE_BLUR: f32 = 25.0;

// Presence button
pub const BUTTON_VISIBILITY_TIMEOUT_MS: f64 = 12_000.0;
pub const BUTTON_SIZE: f32 = 80.0;
pub const BUTTON_FADE_RATE: f32 = 0.05; // alpha easing per tick
pub const BUTTON_GROW_RATE: f32 = 0.2; // size and glow easing per tick
pub const BUTTON_GROW_FACTOR: f32 = 1.5;
pub const BUTTON_GLOW_BLUR: f32 = 50.0;
pub const BUTTON_GLOW_GROW_FACTOR: f32 = 2.0; // 1.0 disables glow growth
pub const BUTTON_CORE_BLUR: f32 = 12.0;
pub const BUTTON_COOLDOWN_MS: f64 = 4_000.0;
pub const BUTTON_PRESS_MIN_ALPHA: f32 = 0.5; // must be this visible to accept a press
pub const BUTTON_DRAW_MIN_ALPHA: f32 = 0.01;
pub const MAX_HOLD_MS: f64 = 3_000.0;

// Text reveal
pub const MESSAGES: &[&str] = &[
    "Life is beautiful",
    "Chíp Già",
    "Stay curious",
    "Create your sunshine",
    "The future is bright",
    "Embrace the journey",
    "Choose joy",
    "Be present",
    "You are enough",
    "Invent your world",
];
pub const TEXT_FONT_SIZE: f32 = 96.0;
pub const TEXT_OPACITY: f32 = 0.9;
pub const TEXT_DOT_SIZE_RANGE: (f32, f32) = (6.0, 10.0);
pub const TEXT_BREATHING_SPEED: f64 = 0.002; // noise units per millisecond
pub const TEXT_ANIM_DURATION_RANGE_MS: (f64, f64) = (1_500.0, 4_000.0);
pub const TEXT_GLOW_BLUR: f32 = 4.0;
pub const TEXT_SAMPLE_STEP: usize = 10; // outline pixels per sampled point

// Mesh gradient
pub const MESH_DENSITY: usize = 4;
pub const MESH_WANDER_AMOUNT: f32 = 150.0;
pub const MESH_WANDER_SPEED: f32 = 0.003; // noise units per tick
pub const MESH_BLUR: f32 = 120.0;
pub const MESH_CIRCLE_SCALE: f32 = 1.5;

// Palette (HSB, hue in degrees, saturation/brightness 0..100)
pub const GRADIENT_HSB_1: [f32; 3] = [230.0, 90.0, 90.0];
pub const GRADIENT_HSB_2: [f32; 3] = [220.0, 80.0, 60.0];
pub const PRESENCE_HSB: [f32; 3] = [15.0, 90.0, 100.0];

// Grain overlay
pub const GRAIN_AMOUNT: f32 = 0.3;
pub const GRAIN_PIXELS_PER_PARTICLE: f32 = 500.0;
pub const GRAIN_MAX_ALPHA: f32 = 0.25;

pub const DEFAULT_SEED: u64 = 42;
