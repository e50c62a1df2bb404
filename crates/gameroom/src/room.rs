use super::*;
use rps_core::*;
use rps_gesture::*;
use rps_vision::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Live game coordinator.
///
/// Imperative shell around [`Engine`] (functional core): owns the clock,
/// the camera, the model, the computer opponent, and the observers, and
/// turns commands and timer deadlines into engine transitions.
///
/// Everything runs in one task. The countdown is a deadline polled in the
/// same `select!` as the inbox, so a reset simply clears it. The capture
/// burst runs to completion while the inbox keeps draining: a start is
/// ignored, a reset or quit is held until the round has resolved.
pub struct Room {
    config: RoomConfig,
    engine: Engine,
    timer: Timer,
    adapter: Adapter,
    camera: Arc<dyn Camera>,
    opponent: Box<dyn Opponent>,
    audience: Audience,
    channel: Channel<Signal>,
    phase: watch::Sender<Phase>,
    loading: bool,
    pending: Option<Command>,
}

impl Room {
    pub fn new(config: RoomConfig, model: Arc<Model>, camera: Arc<dyn Camera>) -> Self {
        Self {
            engine: Engine::from(&config),
            timer: Timer::new(config.tick),
            adapter: Adapter::new(model).with_threshold(config.threshold),
            opponent: Box::new(Uniform::default()),
            audience: Audience::default(),
            channel: Channel::default(),
            phase: watch::Sender::new(Phase::Waiting),
            loading: false,
            pending: None,
            camera,
            config,
        }
    }
    pub fn with_opponent<O>(mut self, opponent: O) -> Self
    where
        O: Opponent + 'static,
    {
        self.opponent = Box::new(opponent);
        self
    }
    /// Observers must join before the room runs.
    pub fn join<O>(&mut self, observer: O)
    where
        O: Observer + 'static,
    {
        self.audience.join(observer);
    }
    pub fn remote(&self) -> Remote {
        Remote(self.channel.tx().clone())
    }
    /// Phase as it changes, for callers that only care about that.
    pub fn watch(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Room {
    /// Runs until told to quit. Returns the session as it stood.
    pub async fn run(mut self) -> Session {
        log::info!("[room {}] open", self.engine.session().id());
        let _monitor = Monitor::spawn(
            self.adapter.clone(),
            self.camera.clone(),
            self.phase.subscribe(),
            self.audience.clone(),
            self.config.refresh,
        );
        self.publish(Phase::Waiting);
        self.load();
        loop {
            let deadline = self.timer.deadline();
            tokio::select! {
                biased;
                signal = self.channel.rx().recv() => match signal {
                    Some(Signal::Loaded(ok)) => self.loaded(ok),
                    Some(Signal::Command(Command::Start)) => self.start().await,
                    Some(Signal::Command(Command::Reset)) => self.reset(),
                    Some(Signal::Command(Command::Quit)) | None => break,
                },
                _ = Timer::until(deadline) => self.tick().await,
            }
            match self.pending.take() {
                Some(Command::Reset) => self.reset(),
                Some(Command::Quit) => break,
                _ => continue,
            }
        }
        log::info!("[room {}] closed after {} rounds", self.engine.session().id(), self.engine.rounds());
        self.engine.session().clone()
    }
}

impl Room {
    fn load(&mut self) {
        if self.adapter.ready() {
            self.audience.broadcast(Event::Ready);
            return;
        }
        if self.loading {
            return;
        }
        self.loading = true;
        log::info!("[room] loading model");
        let model = self.adapter.model().clone();
        let tx = self.channel.tx().clone();
        tokio::spawn(async move {
            let ok = model.load().await;
            let _ = tx.send(Signal::Loaded(ok));
        });
    }
    fn loaded(&mut self, ok: bool) {
        self.loading = false;
        match ok {
            true => {
                log::info!("[room] model ready");
                self.audience.broadcast(Event::Ready);
            }
            false => log::warn!("[room] model unavailable, next start will retry"),
        }
    }
    async fn start(&mut self) {
        if !self.adapter.ready() {
            log::debug!("[room] ignoring start, model not ready");
            self.load();
            return;
        }
        if !self.engine.start() {
            log::debug!("[room] ignoring start during {}", self.engine.phase());
            return;
        }
        log::info!("[room] round #{} starting", self.engine.rounds() + 1);
        self.publish(self.engine.phase());
        match self.engine.phase() {
            Phase::Countdown => {
                self.audience.broadcast(Event::Countdown(self.engine.count()));
                self.timer.arm();
            }
            Phase::Capture => self.capture().await,
            _ => {}
        }
    }
    async fn tick(&mut self) {
        self.timer.clear();
        match self.engine.tick() {
            Some(Step::Counting(n)) => {
                self.audience.broadcast(Event::Countdown(n));
                self.timer.arm();
            }
            Some(Step::Capture) => {
                self.publish(Phase::Capture);
                self.capture().await;
            }
            None => log::debug!("[room] stale tick during {}", self.engine.phase()),
        }
    }
    /// Runs the capture burst, then resolves the round against the
    /// computer's throw.
    async fn capture(&mut self) {
        let burst = Self::burst(
            self.adapter.clone(),
            self.camera.clone(),
            self.config.samples,
            self.config.spacing,
        );
        tokio::pin!(burst);
        let ballot = loop {
            tokio::select! {
                biased;
                ballot = &mut burst => break ballot,
                signal = self.channel.rx().recv() => self.defer(signal),
            }
        };
        let computer = self.opponent.throw();
        log::debug!("[room] votes {} vs computer {}", ballot, computer);
        self.audience.broadcast(Event::Captured(ballot.clone()));
        if let Some(round) = self.engine.settle(&ballot, computer) {
            log::info!("[room] {}", round);
            self.publish(Phase::Result);
            self.audience.broadcast(Event::Resolved(round));
            self.audience.broadcast(Event::Score {
                score: self.engine.score(),
                rounds: self.engine.rounds(),
            });
        }
    }
    /// Samples the camera `samples` times, `spacing` apart. With no frame
    /// at all when the burst begins there is nothing to vote on and the
    /// round is forfeited on the spot.
    async fn burst(
        adapter: Adapter,
        camera: Arc<dyn Camera>,
        samples: usize,
        spacing: Duration,
    ) -> Ballot {
        if camera.frame().filter(Frame::is_decodable).is_none() {
            log::warn!("[room] no camera frame at capture, forfeiting");
            return Ballot::default();
        }
        let mut ballot = Ballot::with_capacity(samples);
        for i in 0..samples {
            if i > 0 {
                tokio::time::sleep(spacing).await;
            }
            let reading = adapter
                .sample(&*camera)
                .await
                .unwrap_or_else(Classification::idle);
            log::debug!("[room] sample {}/{}: {}", i + 1, samples, reading);
            ballot.cast(reading.gesture());
        }
        ballot
    }
    /// Inbox handling while a capture is in flight.
    fn defer(&mut self, signal: Option<Signal>) {
        match signal {
            Some(Signal::Loaded(ok)) => self.loaded(ok),
            Some(Signal::Command(Command::Start)) => {
                log::debug!("[room] ignoring start during capture");
            }
            Some(Signal::Command(Command::Reset)) => {
                if self.pending != Some(Command::Quit) {
                    self.pending = Some(Command::Reset);
                }
            }
            Some(Signal::Command(Command::Quit)) | None => self.pending = Some(Command::Quit),
        }
    }
    fn reset(&mut self) {
        self.timer.clear();
        self.engine.reset();
        log::info!("[room {}] session reset", self.engine.session().id());
        self.audience.broadcast(Event::Reset);
        self.publish(Phase::Waiting);
        self.audience.broadcast(Event::Score {
            score: self.engine.score(),
            rounds: self.engine.rounds(),
        });
    }
    fn publish(&mut self, phase: Phase) {
        self.phase.send_replace(phase);
        self.audience.broadcast(Event::Phase(phase));
    }
}
