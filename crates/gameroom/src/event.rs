use super::*;
use rps_gesture::*;

/// Everything the room tells its observers.
///
/// Sent on every change, in the order the changes happen. Observers never
/// write back; the only inputs to a room are its [`Command`]s.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The model finished loading; rounds may start.
    Ready,
    /// The controller entered a new phase.
    Phase(Phase),
    /// Countdown value now on screen.
    Countdown(u8),
    /// Latest live-feedback reading. Cosmetic only.
    Live(Classification),
    /// Raw votes from the capture burst.
    Captured(Ballot),
    /// A round was resolved.
    Resolved(Round),
    /// Score after a resolution or reset.
    Score { score: Score, rounds: u32 },
    /// The session was zeroed.
    Reset,
}

impl Event {
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Event::Phase(phase) => Some(*phase),
            _ => None,
        }
    }
    pub fn round(&self) -> Option<&Round> {
        match self {
            Event::Resolved(round) => Some(round),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Ready => write!(f, "model ready"),
            Event::Phase(phase) => write!(f, "phase: {}", phase),
            Event::Countdown(n) => write!(f, "{}...", n),
            Event::Live(reading) => write!(f, "seeing {}", reading),
            Event::Captured(ballot) => write!(f, "votes: {}", ballot),
            Event::Resolved(round) => write!(f, "{}", round),
            Event::Score { score, rounds } => write!(f, "score {} after {} rounds", score, rounds),
            Event::Reset => write!(f, "session reset"),
        }
    }
}
