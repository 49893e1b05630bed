pub mod blob;
pub mod button;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod mesh;
pub mod motion;
pub mod noise;
pub mod outline;
pub mod scene;
pub mod state;
pub mod text;

// Shader bundled as a string constant for the native renderer
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use blob::{Blob, BlobField, BlobStage, Edge};
pub use button::{ButtonPhase, HoldSession, PresenceButton};
pub use clock::{Clock, InstantClock};
pub use config::{Thresholds, Tuning};
pub use error::ConfigError;
pub use motion::{MotionEnergy, MotionEstimator, MotionFrame};
pub use outline::{trace_outline, CoverageMask};
pub use scene::{Circle, GrainSpeck, Scene};
pub use state::*;
pub use text::{GlyphSampler, TextOutline, TextReveal};
