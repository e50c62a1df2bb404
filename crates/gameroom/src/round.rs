use rps_gesture::*;

/// Everything decided about one resolved round.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub number: u32,
    pub player: Gesture,
    pub computer: Gesture,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(number: u32, player: Gesture, computer: Gesture) -> Self {
        Self {
            number,
            player,
            computer,
            outcome: Outcome::judge(player, computer),
        }
    }
    /// The player showed nothing the ballot could trust.
    pub fn is_forfeit(&self) -> bool {
        self.player.is_idle()
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.is_forfeit() {
            true => write!(
                f,
                "Round #{}: no gesture vs {} - {}",
                self.number, self.computer, self.outcome
            ),
            false => write!(
                f,
                "Round #{}: {} vs {} - {}",
                self.number, self.player, self.computer, self.outcome
            ),
        }
    }
}
