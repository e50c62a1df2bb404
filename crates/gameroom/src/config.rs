use rps_core::*;
use std::time::Duration;

/// Timing and voting knobs for a room.
///
/// Defaults come from the constants in `rps-core`. Any subset can be
/// overridden from JSON; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Steps shown before capture (3 -> 2 -> 1).
    pub countdown: u8,
    /// Interval between countdown steps.
    pub tick: Duration,
    /// Frames classified in one capture burst.
    pub samples: usize,
    /// Suspension between consecutive capture samples.
    pub spacing: Duration,
    /// Agreeing samples needed to trust a gesture.
    pub quorum: Votes,
    /// Top-gesture confidence below this reads as idle.
    pub threshold: Confidence,
    /// Live-feedback polling cadence.
    pub refresh: Duration,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            countdown: COUNTDOWN_STEPS,
            tick: COUNTDOWN_TICK,
            samples: CAPTURE_SAMPLES,
            spacing: CAPTURE_SPACING,
            quorum: CAPTURE_QUORUM,
            threshold: CONFIDENCE_THRESHOLD,
            refresh: REFRESH_INTERVAL,
        }
    }
}

impl RoomConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        config.validate()
    }
    /// Rejects settings under which no gesture could ever win a round.
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.samples == 0 {
            return Err(anyhow::anyhow!("capture needs at least one sample"));
        }
        if self.quorum > self.samples {
            return Err(anyhow::anyhow!(
                "quorum {} exceeds {} samples",
                self.quorum,
                self.samples
            ));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(anyhow::anyhow!("threshold {} outside [0, 1]", self.threshold));
        }
        if self.refresh.is_zero() {
            return Err(anyhow::anyhow!("refresh interval must be positive"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_match_constants() {
        let config = RoomConfig::default();
        assert_eq!(config.countdown, 3);
        assert_eq!(config.tick, Duration::from_secs(1));
        assert_eq!(config.samples, 5);
        assert_eq!(config.spacing, Duration::from_millis(100));
        assert_eq!(config.quorum, 2);
        assert_eq!(config.threshold, 0.6);
    }
    #[test]
    fn partial_json_keeps_defaults() {
        let config = RoomConfig::from_json(r#"{ "samples": 7, "quorum": 4 }"#).unwrap();
        assert_eq!(config.samples, 7);
        assert_eq!(config.quorum, 4);
        assert_eq!(config.countdown, COUNTDOWN_STEPS);
    }
    #[test]
    fn unreachable_quorum_is_rejected() {
        assert!(RoomConfig::from_json(r#"{ "samples": 3, "quorum": 4 }"#).is_err());
        assert!(RoomConfig::from_json(r#"{ "samples": 0 }"#).is_err());
        assert!(RoomConfig::from_json(r#"{ "threshold": 1.5 }"#).is_err());
        assert!(RoomConfig::from_json("not json").is_err());
    }
}
