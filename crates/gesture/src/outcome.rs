use super::*;

/// Result of a resolved round, from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Scores a round. A player who showed no recognizable gesture forfeits,
    /// whatever the computer threw.
    pub fn judge(player: Gesture, computer: Gesture) -> Self {
        match (player, computer) {
            (Gesture::Idle, _) => Self::Lose,
            (_, Gesture::Idle) => Self::Win,
            (p, c) if p == c => Self::Draw,
            (p, c) if p.beats(&c) => Self::Win,
            _ => Self::Lose,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "you win"),
            Self::Lose => write!(f, "you lose"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Gesture::*;
    #[test]
    fn equal_moves_draw() {
        for g in Gesture::moves() {
            assert_eq!(Outcome::judge(g, g), Outcome::Draw);
        }
    }
    #[test]
    fn all_ordered_pairs() {
        assert_eq!(Outcome::judge(Rock, Scissors), Outcome::Win);
        assert_eq!(Outcome::judge(Scissors, Paper), Outcome::Win);
        assert_eq!(Outcome::judge(Paper, Rock), Outcome::Win);
        assert_eq!(Outcome::judge(Scissors, Rock), Outcome::Lose);
        assert_eq!(Outcome::judge(Paper, Scissors), Outcome::Lose);
        assert_eq!(Outcome::judge(Rock, Paper), Outcome::Lose);
    }
    #[test]
    fn idle_player_forfeits() {
        for g in Gesture::all() {
            assert_eq!(Outcome::judge(Idle, g), Outcome::Lose);
        }
    }
    #[test]
    fn outcome_is_antisymmetric() {
        for p in Gesture::moves() {
            for c in Gesture::moves() {
                let there = Outcome::judge(p, c);
                let back = Outcome::judge(c, p);
                match there {
                    Outcome::Draw => assert_eq!(back, Outcome::Draw),
                    Outcome::Win => assert_eq!(back, Outcome::Lose),
                    Outcome::Lose => assert_eq!(back, Outcome::Win),
                }
            }
        }
    }
}
