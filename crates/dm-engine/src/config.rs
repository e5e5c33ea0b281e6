//! Engine configuration.

/// Timing and stat limits for a game.
///
/// All durations are in logical clock units (milliseconds when the clock is
/// driven by wall time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Delay between revealed characters of node text.
    pub reveal_ms_per_char: u64,
    /// How long the jump-scare flag stays raised.
    pub scare_duration_ms: u64,
    /// Delay between a `jump_scare` node finishing its reveal and the scare.
    pub scare_delay_ms: u64,
    /// Upper bound for health and sanity; both start full.
    pub max_stat: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reveal_ms_per_char: 50,
            scare_duration_ms: 1500,
            scare_delay_ms: 600,
            max_stat: 100,
        }
    }
}

impl EngineConfig {
    /// Set the per-character reveal delay.
    pub fn with_reveal_ms_per_char(mut self, ms: u64) -> Self {
        self.reveal_ms_per_char = ms;
        self
    }

    /// Set how long a scare stays active.
    pub fn with_scare_duration_ms(mut self, ms: u64) -> Self {
        self.scare_duration_ms = ms;
        self
    }

    /// Set the delay before a node's jump scare fires.
    pub fn with_scare_delay_ms(mut self, ms: u64) -> Self {
        self.scare_delay_ms = ms;
        self
    }

    /// Set the stat ceiling (clamped to at least 1).
    pub fn with_max_stat(mut self, max: i32) -> Self {
        self.max_stat = max.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.reveal_ms_per_char, 50);
        assert_eq!(cfg.scare_duration_ms, 1500);
        assert_eq!(cfg.scare_delay_ms, 600);
        assert_eq!(cfg.max_stat, 100);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_reveal_ms_per_char(10)
            .with_scare_duration_ms(200)
            .with_scare_delay_ms(0)
            .with_max_stat(20);
        assert_eq!(cfg.reveal_ms_per_char, 10);
        assert_eq!(cfg.scare_duration_ms, 200);
        assert_eq!(cfg.scare_delay_ms, 0);
        assert_eq!(cfg.max_stat, 20);
    }

    #[test]
    fn max_stat_clamped() {
        assert_eq!(EngineConfig::default().with_max_stat(-4).max_stat, 1);
    }
}
