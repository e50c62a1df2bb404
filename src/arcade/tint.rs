use rps_core::*;
use rps_gesture::*;
use rps_vision::*;
use std::time::Duration;

/// Stand-in gesture model for the arcade.
///
/// Every pose is painted in its own colour by the puppet camera; the
/// classifier scores a frame by how close its mean colour sits to each
/// reference, so noisy frames produce honestly uncertain distributions.
#[derive(Debug, Clone, Copy)]
pub struct Tint {
    sigma: f32,
}

impl Default for Tint {
    fn default() -> Self {
        Self { sigma: 0.25 }
    }
}

impl Tint {
    pub fn new(sigma: f32) -> Self {
        Self { sigma: sigma.max(f32::EPSILON) }
    }
    /// Reference colour for a gesture, as packed RGB.
    pub const fn palette(gesture: Gesture) -> [u8; 3] {
        match gesture {
            Gesture::Idle => [128, 128, 128],
            Gesture::Rock => [200, 48, 48],
            Gesture::Paper => [48, 200, 48],
            Gesture::Scissors => [48, 48, 200],
        }
    }
    /// Loader that takes `delay` to come up, like a model fetched from disk.
    pub fn loader(self, delay: Duration) -> TintLoader {
        TintLoader { tint: self, delay }
    }
    pub fn distribution(&self, mean: [f32; 3]) -> Distribution {
        let raw = Gesture::all().map(|g| {
            let d2 = Self::palette(g)
                .iter()
                .zip(mean.iter())
                .map(|(r, m)| (*r as f32 / 255.0 - m).powi(2))
                .sum::<f32>();
            (-d2 / (self.sigma * self.sigma)).exp()
        });
        let total = raw.iter().sum::<f32>();
        match total > 0.0 {
            true => Distribution::new(raw.map(|s| s / total)),
            false => Distribution::certain(Gesture::Idle),
        }
    }
}

#[async_trait::async_trait]
impl Classifier for Tint {
    async fn infer(&self, frame: &Frame) -> anyhow::Result<Distribution> {
        Ok(self.distribution(frame.mean()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TintLoader {
    tint: Tint,
    delay: Duration,
}

#[async_trait::async_trait]
impl Loader for TintLoader {
    async fn load(&self) -> anyhow::Result<Box<dyn Classifier>> {
        log::debug!("[tint] warming up for {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(Box::new(self.tint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(gesture: Gesture) -> Classification {
        let frame = Frame::solid(4, 4, Tint::palette(gesture));
        Classification::threshold(&Tint::default().distribution(frame.mean()), CONFIDENCE_THRESHOLD)
    }

    #[test]
    fn clean_poses_read_back() {
        for gesture in Gesture::all() {
            assert_eq!(read(gesture).gesture(), gesture);
        }
    }

    #[test]
    fn halfway_colours_are_uncertain() {
        let rock = Tint::palette(Gesture::Rock);
        let idle = Tint::palette(Gesture::Idle);
        let mean = [0, 1, 2].map(|i| (rock[i] as f32 + idle[i] as f32) / 2.0 / 255.0);
        let (_, confidence) = Tint::default().distribution(mean).top();
        assert!(confidence < CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn scores_are_normalised() {
        let d = Tint::default().distribution([0.1, 0.9, 0.3]);
        let total = d.scores().iter().sum::<f32>();
        assert!((total - 1.0).abs() < 1e-4);
    }

    #[tokio::test(start_paused = true)]
    async fn loader_waits_before_answering() {
        let start = tokio::time::Instant::now();
        let model = Model::new(Tint::default().loader(Duration::from_millis(500)));
        assert!(model.load().await);
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }
}
