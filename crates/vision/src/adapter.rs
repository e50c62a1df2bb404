use super::*;
use rps_core::*;
use rps_gesture::*;
use std::sync::Arc;

/// The only way the game talks to the image model.
///
/// `classify` never fails. A missing model, an undecodable frame, or an
/// inference error all come back as a zero-confidence Idle reading, and a
/// confident-enough reading below the threshold is also forced to Idle: the
/// model is not trusted to tell gestures apart when it is unsure.
#[derive(Debug, Clone)]
pub struct Adapter {
    model: Arc<Model>,
    threshold: Confidence,
}

impl Adapter {
    pub fn new(model: Arc<Model>) -> Self {
        Self {
            model,
            threshold: CONFIDENCE_THRESHOLD,
        }
    }
    pub fn with_threshold(mut self, threshold: Confidence) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }
    pub fn threshold(&self) -> Confidence {
        self.threshold
    }
    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }
    pub fn ready(&self) -> bool {
        self.model.ready()
    }
    pub async fn classify(&self, frame: &Frame) -> Classification {
        let Some(classifier) = self.model.get() else {
            log::trace!("[adapter] model not loaded");
            return Classification::idle();
        };
        if !frame.is_decodable() {
            return Classification::idle();
        }
        match classifier.infer(frame).await {
            Ok(distribution) => Classification::threshold(&distribution, self.threshold),
            Err(e) => {
                log::warn!("[adapter] inference failed: {:#}", e);
                Classification::idle()
            }
        }
    }
    /// Classifies whatever the camera currently shows. `None` when there is
    /// no decodable frame to look at.
    pub async fn sample(&self, camera: &dyn Camera) -> Option<Classification> {
        let frame = camera.frame().filter(Frame::is_decodable)?;
        Some(self.classify(&frame).await)
    }
}
