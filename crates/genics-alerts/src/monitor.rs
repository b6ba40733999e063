use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use genics_core::config::AlertConfig;
use genics_core::errors::{ScoreError, ScoreResult};
use genics_core::models::{AlertEvent, AlertKind};

/// A prior composite reading supplied by the caller's history lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorScore {
    pub score: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Spike/dip monitor over composite scores.
///
/// One alert per observed (entity, prior, current) pair: re-checking the
/// same pair never fires twice. Absence of a prior reading inside the
/// window means no alert is possible — expected for new entities, not an
/// error.
///
/// Both the dedup set and the alert history grow with use. Long-lived
/// instances should call [`evict_stale`](Self::evict_stale) periodically to
/// bound the dedup set; the history is the instance's record of alerts
/// raised and is only bounded by the instance's lifetime.
pub struct ThresholdMonitor {
    config: AlertConfig,
    seen: HashSet<(String, i64, u64, u64)>,
    history: HashMap<String, Vec<AlertEvent>>,
}

impl ThresholdMonitor {
    pub fn new(config: AlertConfig) -> Self {
        Self {
            config,
            seen: HashSet::new(),
            history: HashMap::new(),
        }
    }

    /// Compare a current score against the prior reading and raise at most
    /// one categorized alert for the pair.
    pub fn check(
        &mut self,
        entity_id: &str,
        current_score: f64,
        prior: Option<PriorScore>,
        now: DateTime<Utc>,
    ) -> ScoreResult<Option<AlertEvent>> {
        if !current_score.is_finite() {
            return Err(ScoreError::NonFiniteInput {
                field: "current_score".to_string(),
                value: current_score,
            });
        }

        let Some(prior) = prior else {
            debug!(entity = entity_id, "no prior score, skipping threshold check");
            return Ok(None);
        };
        if !prior.score.is_finite() {
            return Err(ScoreError::NonFiniteInput {
                field: "prior_score".to_string(),
                value: prior.score,
            });
        }
        if now - prior.recorded_at > Duration::hours(self.config.window_hours) {
            return Ok(None);
        }

        let delta = current_score - prior.score;
        let kind = if delta > self.config.spike_threshold {
            AlertKind::Spike
        } else if delta < -self.config.spike_threshold {
            AlertKind::Dip
        } else {
            return Ok(None);
        };

        let key = (
            entity_id.to_string(),
            prior.recorded_at.timestamp_millis(),
            prior.score.to_bits(),
            current_score.to_bits(),
        );
        if !self.seen.insert(key) {
            // Same pair already alerted.
            return Ok(None);
        }

        let direction = match kind {
            AlertKind::Spike => "spiked",
            _ => "dipped",
        };
        let event = AlertEvent::new(
            entity_id,
            kind,
            format!(
                "composite score {direction} {delta:+.1} points within {}h ({:.1} -> {:.1})",
                self.config.window_hours, prior.score, current_score
            ),
        );
        self.history
            .entry(entity_id.to_string())
            .or_default()
            .push(event.clone());
        Ok(Some(event))
    }

    /// Alerts this monitor instance has raised for one entity, oldest first.
    pub fn history(&self, entity_id: &str) -> &[AlertEvent] {
        self.history.get(entity_id).map_or(&[], Vec::as_slice)
    }

    /// Drop dedup entries whose prior reading has aged out of the window.
    ///
    /// A pair with a stale prior can never fire again, so its dedup entry
    /// is dead weight; evicting keeps the set bounded on long-lived
    /// instances.
    pub fn evict_stale(&mut self, now: DateTime<Utc>) {
        let horizon = now.timestamp_millis()
            - Duration::hours(self.config.window_hours).num_milliseconds();
        self.seen.retain(|(_, recorded_ms, _, _)| *recorded_ms >= horizon);
    }
}

impl Default for ThresholdMonitor {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}
