//! Session configuration.

use std::time::Duration;

use parlor_core::RulesConfig;

/// Default time on each side's clock.
pub const DEFAULT_CLOCK: Duration = Duration::from_secs(600);

/// Knobs for a game session. Changes take effect at the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Rule engine settings.
    pub rules: RulesConfig,
    /// Starting time on each side's visual clock.
    pub clock: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            clock: DEFAULT_CLOCK,
        }
    }
}
