use crate::constants::{
    GLOW_HIDE_DELAY_MS, GLOW_SIZE_PX, NAVBAR_SOLID_THRESHOLD_PX, SECTION_LOOKAHEAD_PX,
};

/// Tunables for the scroll and glow trackers.
///
/// `Default` takes every value from `constants.rs`; tests build their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub section_lookahead_px: f64,
    pub navbar_solid_threshold_px: f64,
    pub glow_hide_delay_ms: u32,
    pub glow_size_px: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
            navbar_solid_threshold_px: NAVBAR_SOLID_THRESHOLD_PX,
            glow_hide_delay_ms: GLOW_HIDE_DELAY_MS,
            glow_size_px: GLOW_SIZE_PX,
        }
    }
}
