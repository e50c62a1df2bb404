use super::*;
use rps_core::*;
use rps_gesture::*;

/// Score and round count from game start until the player zeroes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    id: ID<Self>,
    score: Score,
    rounds: u32,
}

impl Session {
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
    /// Books a resolved round. The counter advances by exactly one
    /// whatever the outcome.
    pub fn record(&mut self, player: Gesture, computer: Gesture) -> Round {
        self.rounds += 1;
        let round = Round::new(self.rounds, player, computer);
        self.score.record(round.outcome);
        round
    }
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Gesture::*;
    #[test]
    fn score_accumulates_wins_and_losses() {
        let mut session = Session::default();
        let plays = [
            (Rock, Scissors),
            (Rock, Rock),
            (Paper, Scissors),
            (Idle, Rock),
            (Scissors, Paper),
        ];
        for (p, c) in plays {
            session.record(p, c);
        }
        assert_eq!(session.score(), Score::from((2, 2)));
        assert_eq!(session.rounds(), 5);
    }
    #[test]
    fn rounds_are_numbered_from_one() {
        let mut session = Session::default();
        assert_eq!(session.record(Paper, Paper).number, 1);
        assert_eq!(session.record(Paper, Paper).number, 2);
    }
    #[test]
    fn fresh_sessions_differ() {
        assert_ne!(Session::default().id(), Session::default().id());
    }
}
