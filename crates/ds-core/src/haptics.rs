//! Tactile feedback on interaction milestones

use tracing::trace;

use crate::config::HapticConfig;

/// Kind of haptic pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPulse {
    /// Light tick when a horizontal drag begins
    DragStart,
    /// Stronger tick when the visible page changes
    PageChange,
}

impl HapticPulse {
    /// Pulse length in milliseconds
    pub fn duration_ms(&self, config: &HapticConfig) -> u32 {
        match self {
            HapticPulse::DragStart => config.drag_start_ms,
            HapticPulse::PageChange => config.page_change_ms,
        }
    }
}

/// Device feedback sink. Implementations must not block.
pub trait Haptics: Send + Sync {
    fn pulse(&self, pulse: HapticPulse, duration_ms: u32);
}

/// Discards every pulse
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn pulse(&self, _pulse: HapticPulse, _duration_ms: u32) {}
}

/// Logs pulses; used on desktop where no vibration motor exists
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHaptics;

impl Haptics for TracingHaptics {
    fn pulse(&self, pulse: HapticPulse, duration_ms: u32) {
        trace!(?pulse, duration_ms, "haptic pulse");
    }
}
