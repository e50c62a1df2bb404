use super::*;
use rps_gesture::*;
use tokio::sync::watch;

/// Everything a presentation layer needs to draw the game, folded from the
/// event stream.
#[derive(Debug, Clone, PartialEq, Default)]
#[derive(serde::Serialize)]
pub struct Snapshot {
    pub ready: bool,
    pub phase: Phase,
    pub countdown: Option<u8>,
    pub live: Option<Classification>,
    pub last: Option<Round>,
    pub score: Score,
    pub rounds: u32,
}

impl Snapshot {
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Ready => self.ready = true,
            Event::Phase(phase) => {
                self.phase = *phase;
                if *phase != Phase::Countdown {
                    self.countdown = None;
                }
                if *phase == Phase::Countdown || *phase == Phase::Waiting {
                    self.last = None;
                }
            }
            Event::Countdown(n) => self.countdown = Some(*n),
            Event::Live(reading) => self.live = Some(*reading),
            Event::Captured(_) => {}
            Event::Resolved(round) => self.last = Some(round.clone()),
            Event::Score { score, rounds } => {
                self.score = *score;
                self.rounds = *rounds;
            }
            Event::Reset => {
                self.last = None;
                self.countdown = None;
            }
        }
    }
    /// Whether the play button should be enabled.
    pub fn can_start(&self) -> bool {
        self.ready && self.phase.is_idle()
    }
}

/// Observer that keeps a [`Snapshot`] current behind a watch channel.
#[derive(Debug)]
pub struct Spectator(watch::Sender<Snapshot>);

impl Spectator {
    pub fn new() -> (Self, watch::Receiver<Snapshot>) {
        let (tx, rx) = watch::channel(Snapshot::default());
        (Self(tx), rx)
    }
}

#[async_trait::async_trait]
impl Observer for Spectator {
    fn alive(&self) -> bool {
        !self.0.is_closed()
    }
    async fn notify(&mut self, event: &Event) {
        self.0.send_modify(|snapshot| snapshot.apply(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn folds_a_round() {
        let mut snapshot = Snapshot::default();
        let round = Round::new(1, Gesture::Rock, Gesture::Scissors);
        let events = [
            Event::Ready,
            Event::Phase(Phase::Countdown),
            Event::Countdown(3),
            Event::Countdown(2),
            Event::Phase(Phase::Capture),
            Event::Captured(Ballot::from(vec![Gesture::Rock; 5])),
            Event::Phase(Phase::Result),
            Event::Resolved(round.clone()),
            Event::Score {
                score: Score::from((1, 0)),
                rounds: 1,
            },
        ];
        for event in events.iter() {
            snapshot.apply(event);
        }
        assert_eq!(snapshot.phase, Phase::Result);
        assert_eq!(snapshot.countdown, None);
        assert_eq!(snapshot.last, Some(round));
        assert_eq!(snapshot.score, Score::from((1, 0)));
        assert!(snapshot.can_start());
    }
    #[test]
    fn busy_or_loading_disables_start() {
        let mut snapshot = Snapshot::default();
        assert!(!snapshot.can_start());
        snapshot.apply(&Event::Ready);
        snapshot.apply(&Event::Phase(Phase::Countdown));
        assert!(!snapshot.can_start());
    }
    #[test]
    fn new_round_clears_last_result() {
        let mut snapshot = Snapshot::default();
        snapshot.apply(&Event::Resolved(Round::new(1, Gesture::Idle, Gesture::Rock)));
        snapshot.apply(&Event::Phase(Phase::Countdown));
        assert_eq!(snapshot.last, None);
    }
}
