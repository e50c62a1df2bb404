use super::*;
use rps_core::*;
use rps_gesture::*;

/// What a countdown tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still counting; the value now on screen.
    Counting(u8),
    /// Count reached zero; capture must run now.
    Capture,
}

/// Functional core of a round.
///
/// Pure state transitions with no clocks, channels or camera. The room
/// (imperative shell) decides when to call these; the engine decides
/// whether the call is legal and what it changes. Calls made in the wrong
/// phase are ignored and reported as such, never treated as errors.
#[derive(Debug, Clone)]
pub struct Engine {
    steps: u8,
    quorum: Votes,
    phase: Phase,
    count: u8,
    session: Session,
    last: Option<Round>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(COUNTDOWN_STEPS, CAPTURE_QUORUM)
    }
}

impl From<&RoomConfig> for Engine {
    fn from(config: &RoomConfig) -> Self {
        Self::new(config.countdown, config.quorum)
    }
}

impl Engine {
    pub fn new(steps: u8, quorum: Votes) -> Self {
        Self {
            steps,
            quorum,
            phase: Phase::Waiting,
            count: 0,
            session: Session::default(),
            last: None,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Countdown value on screen; zero outside the countdown.
    pub fn count(&self) -> u8 {
        self.count
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn score(&self) -> Score {
        self.session.score()
    }
    pub fn rounds(&self) -> u32 {
        self.session.rounds()
    }
    /// The round on screen, if the controller is showing a result.
    pub fn last(&self) -> Option<&Round> {
        self.last.as_ref()
    }
}

impl Engine {
    /// Begins a round. Returns false (and changes nothing) unless the
    /// controller is waiting or showing a result. A zero-step countdown
    /// goes straight to capture.
    pub fn start(&mut self) -> bool {
        if self.phase.is_busy() {
            return false;
        }
        self.last = None;
        self.count = self.steps;
        self.phase = match self.steps {
            0 => Phase::Capture,
            _ => Phase::Countdown,
        };
        true
    }
    /// Advances the countdown by one step. `None` outside the countdown.
    pub fn tick(&mut self) -> Option<Step> {
        if self.phase != Phase::Countdown {
            return None;
        }
        self.count = self.count.saturating_sub(1);
        match self.count {
            0 => {
                self.phase = Phase::Capture;
                Some(Step::Capture)
            }
            n => Some(Step::Counting(n)),
        }
    }
    /// Resolves the capture burst against the computer's move.
    /// `None` unless capture is underway.
    pub fn settle(&mut self, ballot: &Ballot, computer: Gesture) -> Option<Round> {
        if self.phase != Phase::Capture {
            return None;
        }
        let player = ballot.winner(self.quorum);
        let round = self.session.record(player, computer);
        self.phase = Phase::Result;
        self.last = Some(round.clone());
        Some(round)
    }
    /// Zeroes the session and returns to waiting from anywhere.
    pub fn reset(&mut self) {
        self.phase = Phase::Waiting;
        self.count = 0;
        self.last = None;
        self.session = Session::default();
    }
}
