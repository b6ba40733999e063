use serde::{Deserialize, Serialize};

use super::defaults;

/// Threshold monitor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Composite-score delta that triggers a spike (or, negated, a dip).
    pub spike_threshold: f64,
    /// Prior readings older than this many hours are ignored.
    pub window_hours: i64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            spike_threshold: defaults::SPIKE_THRESHOLD,
            window_hours: defaults::ALERT_WINDOW_HOURS,
        }
    }
}
