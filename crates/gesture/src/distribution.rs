use super::*;
use rps_core::*;

/// Raw per-gesture confidence as reported by an image model.
///
/// Indexed by [`Gesture::index`]. Scores are clamped into [0, 1] on the way
/// in and NaN reads as zero, so downstream comparisons are total. The scores
/// are not renormalized: a model that reports low confidence everywhere
/// should stay low.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Distribution([Confidence; 4]);

impl Distribution {
    pub fn new(scores: [Confidence; 4]) -> Self {
        Self(scores.map(|p| if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }))
    }
    /// All mass on a single gesture.
    pub fn certain(gesture: Gesture) -> Self {
        let mut scores = [0.0; 4];
        scores[gesture.index()] = 1.0;
        Self(scores)
    }
    pub fn uniform() -> Self {
        Self([0.25; 4])
    }
    pub fn confidence(&self, gesture: Gesture) -> Confidence {
        self.0[gesture.index()]
    }
    pub fn scores(&self) -> &[Confidence; 4] {
        &self.0
    }
    /// Highest-confidence gesture. Equal scores go to the canonically
    /// first gesture.
    pub fn top(&self) -> (Gesture, Confidence) {
        Gesture::all()
            .into_iter()
            .map(|g| (g, self.confidence(g)))
            .fold((Gesture::Idle, Confidence::MIN), |best, next| {
                if next.1 > best.1 { next } else { best }
            })
    }
}

impl From<[Confidence; 4]> for Distribution {
    fn from(scores: [Confidence; 4]) -> Self {
        Self::new(scores)
    }
}

impl TryFrom<&[Confidence]> for Distribution {
    type Error = anyhow::Error;
    fn try_from(scores: &[Confidence]) -> Result<Self, Self::Error> {
        <[Confidence; 4]>::try_from(scores)
            .map(Self::new)
            .map_err(|_| anyhow::anyhow!("expected 4 scores, got {}", scores.len()))
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = Gesture::all()
            .iter()
            .map(|g| format!("{}={:.2}", g.symbol(), self.confidence(*g)))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn top_picks_highest() {
        let d = Distribution::new([0.1, 0.2, 0.65, 0.05]);
        assert_eq!(d.top(), (Gesture::Paper, 0.65));
    }
    #[test]
    fn top_ties_resolve_canonically() {
        let d = Distribution::new([0.0, 0.4, 0.4, 0.2]);
        assert_eq!(d.top().0, Gesture::Rock);
        assert_eq!(Distribution::uniform().top().0, Gesture::Idle);
    }
    #[test]
    fn sanitizes_scores() {
        let d = Distribution::new([f32::NAN, 1.7, -0.3, 0.5]);
        assert_eq!(d.scores(), &[0.0, 1.0, 0.0, 0.5]);
    }
    #[test]
    fn rejects_wrong_arity() {
        assert!(Distribution::try_from(&[0.5, 0.5][..]).is_err());
        assert!(Distribution::try_from(&[0.1, 0.2, 0.3, 0.4][..]).is_ok());
    }
    #[test]
    fn all_zero_reads_idle() {
        assert_eq!(Distribution::default().top(), (Gesture::Idle, 0.0));
    }
}
