use super::*;
use rps_core::*;

/// A single thresholded reading of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Classification {
    gesture: Gesture,
    confidence: Confidence,
}

impl Classification {
    pub fn new(gesture: Gesture, confidence: Confidence) -> Self {
        Self {
            gesture,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
    /// The reading reported when there is no usable signal at all.
    pub fn idle() -> Self {
        Self::new(Gesture::Idle, 0.0)
    }
    /// Collapses a raw distribution to its top gesture. A top confidence
    /// strictly below `threshold` is not trusted and reads as Idle; the
    /// confidence itself is kept.
    pub fn threshold(distribution: &Distribution, threshold: Confidence) -> Self {
        match distribution.top() {
            (gesture, confidence) if confidence >= threshold => Self::new(gesture, confidence),
            (_, confidence) => Self::new(Gesture::Idle, confidence),
        }
    }
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }
}

impl From<&Distribution> for Classification {
    fn from(distribution: &Distribution) -> Self {
        Self::threshold(distribution, CONFIDENCE_THRESHOLD)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.0}%)", self.gesture, self.confidence * 100.0)
    }
}
