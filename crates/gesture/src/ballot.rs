use super::*;
use rps_core::*;

/// Votes collected over one capture burst.
///
/// A single frame can be misread, so the player's move is only trusted when
/// several samples agree. Idle votes are recorded but never counted toward a
/// winner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Ballot(Vec<Gesture>);

impl Ballot {
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }
    pub fn cast(&mut self, gesture: Gesture) {
        self.0.push(gesture);
    }
    pub fn votes(&self) -> &[Gesture] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn count(&self, gesture: Gesture) -> Votes {
        self.0.iter().filter(|g| **g == gesture).count()
    }
    /// Vote count for each committed move, in canonical order.
    pub fn tally(&self) -> [(Gesture, Votes); 3] {
        Gesture::moves().map(|g| (g, self.count(g)))
    }
    /// The most-voted move with at least `quorum` votes, or Idle when no
    /// move gets there. Equal counts go to the canonically first move.
    pub fn winner(&self, quorum: Votes) -> Gesture {
        self.tally()
            .into_iter()
            .filter(|(_, n)| *n >= quorum.max(1))
            .fold(None, |best: Option<(Gesture, Votes)>, next| match best {
                Some(best) if best.1 >= next.1 => Some(best),
                _ => Some(next),
            })
            .map(|(g, _)| g)
            .unwrap_or(Gesture::Idle)
    }
    /// Winner under the default quorum.
    pub fn resolve(&self) -> Gesture {
        self.winner(CAPTURE_QUORUM)
    }
}

impl FromIterator<Gesture> for Ballot {
    fn from_iter<I: IntoIterator<Item = Gesture>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Gesture>> for Ballot {
    fn from(votes: Vec<Gesture>) -> Self {
        Self(votes)
    }
}

impl std::fmt::Display for Ballot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.iter().map(Gesture::symbol).collect::<Vec<_>>().join("");
        write!(f, "{}", s)
    }
}
