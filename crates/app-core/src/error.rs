use thiserror::Error;

/// Rejected startup configuration. Nothing in the per-tick path returns errors;
/// everything the installation cannot use is caught here once.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("message list is empty")]
    NoMessages,
    #[error("sensitivity {0} is outside 0..=1")]
    SensitivityOutOfRange(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("text reveal bounds are inverted: min {min} > max {max}")]
    InvertedRevealBounds { min: f64, max: f64 },
    #[error("easing rate {name} = {value} is outside (0, 1]")]
    EasingRate { name: &'static str, value: f32 },
    #[error("mesh density {0} is below 2")]
    MeshTooSparse(usize),
    #[error("capture size {width}x{height} is empty")]
    EmptyCapture { width: u32, height: u32 },
}
