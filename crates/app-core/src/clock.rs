use instant::Instant;

/// Monotonic millisecond reader sampled once per tick by the driver.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Milliseconds since construction; works on native and wasm targets.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
