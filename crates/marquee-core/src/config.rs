//! Startup configuration, fixed for the controller's lifetime.

const CONSTRAINED_UNITS: usize = 4;
const CONSTRAINED_INTERVAL_MS: u64 = 5_000;
const CONSTRAINED_TRANSITION_MS: u16 = 800;

/// Recognized options, read once at construction and never revisited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances.
    pub auto_slide_interval_ms: u64,
    /// Entrance-animation duration handed to the stage with each reveal.
    pub transition_duration_ms: u16,
    pub pause_on_hover: bool,
    pub enable_keyboard: bool,
    pub enable_touch: bool,
    pub show_progress_bar: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_slide_interval_ms: 4_000,
            transition_duration_ms: 1_200,
            pause_on_hover: true,
            enable_keyboard: true,
            enable_touch: true,
            show_progress_bar: true,
        }
    }
}

impl CarouselConfig {
    /// One-time widening of the animation timings on constrained hosts.
    ///
    /// Hosts reporting fewer than four logical processing units get a longer
    /// advance interval and a shorter transition. `None` (no hint available)
    /// keeps the configured values.
    pub fn adapted_for(mut self, processing_units: Option<usize>) -> Self {
        if processing_units.is_some_and(|units| units < CONSTRAINED_UNITS) {
            self.auto_slide_interval_ms = CONSTRAINED_INTERVAL_MS;
            self.transition_duration_ms = CONSTRAINED_TRANSITION_MS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_timings() {
        let config = CarouselConfig::default();
        assert_eq!(config.auto_slide_interval_ms, 4_000);
        assert_eq!(config.transition_duration_ms, 1_200);
        assert!(config.pause_on_hover);
        assert!(config.enable_keyboard);
        assert!(config.enable_touch);
        assert!(config.show_progress_bar);
    }

    #[test]
    fn constrained_host_widens_timings() {
        let config = CarouselConfig::default().adapted_for(Some(2));
        assert_eq!(config.auto_slide_interval_ms, 5_000);
        assert_eq!(config.transition_duration_ms, 800);
    }

    #[test]
    fn capable_host_keeps_configured_timings() {
        let config = CarouselConfig::default().adapted_for(Some(8));
        assert_eq!(config.auto_slide_interval_ms, 4_000);
        assert_eq!(config.transition_duration_ms, 1_200);
    }

    #[test]
    fn missing_hint_keeps_configured_timings() {
        let config = CarouselConfig::default().adapted_for(None);
        assert_eq!(config.auto_slide_interval_ms, 4_000);
        assert_eq!(config.transition_duration_ms, 1_200);
    }
}
