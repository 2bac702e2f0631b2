//! High-level runtime engine settings
//!
//! How a driver paces and stops the simulation. The core itself has no
//! notion of time passing between ticks.

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub tick_hz: f64, // ticks per real-time second in the windowed viewer
    pub max_ticks: Option<u64>, // stop calling tick() after this many, None = run until closed
}

impl Engine {
    /// Tick budget for runs that must terminate on their own
    pub const HEADLESS_TICKS: u64 = 600;

    /// Whether a driver should stop ticking after `ticks` completed ticks
    pub fn finished(&self, ticks: u64) -> bool {
        self.max_ticks.is_some_and(|max| ticks >= max)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            max_ticks: None,
        }
    }
}
