use rps_core::*;
use rps_gesture::*;

/// Running tally for one session.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Score {
    pub player: Points,
    pub computer: Points,
}

impl Score {
    /// Credits at most one side. Draws change nothing.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player += 1,
            Outcome::Lose => self.computer += 1,
            Outcome::Draw => {}
        }
    }
}

impl From<(Points, Points)> for Score {
    fn from((player, computer): (Points, Points)) -> Self {
        Self { player, computer }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn draws_score_nothing() {
        let mut score = Score::default();
        score.record(Outcome::Draw);
        assert_eq!(score, Score::default());
    }
    #[test]
    fn one_side_per_outcome() {
        let mut score = Score::default();
        score.record(Outcome::Win);
        score.record(Outcome::Lose);
        score.record(Outcome::Lose);
        assert_eq!(score, Score::from((1, 2)));
    }
}
