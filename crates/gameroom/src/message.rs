use super::*;
use rps_core::*;
use rps_gesture::*;
use serde::Serialize;

/// Wire format for a presentation layer (browser, websocket, FFI).
/// One message per [`Event`], tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Ready,
    Phase { phase: Phase },
    Countdown { value: u8 },
    Live { gesture: Gesture, confidence: Confidence },
    Captured { votes: Vec<Gesture>, tally: Vec<Tally> },
    Result {
        round: u32,
        player: Gesture,
        computer: Gesture,
        outcome: Outcome,
        forfeit: bool,
    },
    Score { player: Points, computer: Points, rounds: u32 },
    Reset,
}

/// Votes one move received in a capture burst.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tally {
    pub gesture: Gesture,
    pub votes: Votes,
}

impl From<&Event> for Message {
    fn from(event: &Event) -> Self {
        match event {
            Event::Ready => Self::Ready,
            Event::Phase(phase) => Self::Phase { phase: *phase },
            Event::Countdown(value) => Self::Countdown { value: *value },
            Event::Live(reading) => Self::Live {
                gesture: reading.gesture(),
                confidence: reading.confidence(),
            },
            Event::Captured(ballot) => Self::Captured {
                votes: ballot.votes().to_vec(),
                tally: ballot
                    .tally()
                    .into_iter()
                    .map(|(gesture, votes)| Tally { gesture, votes })
                    .collect(),
            },
            Event::Resolved(round) => Self::Result {
                round: round.number,
                player: round.player,
                computer: round.computer,
                outcome: round.outcome,
                forfeit: round.is_forfeit(),
            },
            Event::Score { score, rounds } => Self::Score {
                player: score.player,
                computer: score.computer,
                rounds: *rounds,
            },
            Event::Reset => Self::Reset,
        }
    }
}

impl Message {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
