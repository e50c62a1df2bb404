use super::*;
use rps_gesture::*;
use rps_vision::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Live-feedback loop.
///
/// Polls the camera at display cadence and publishes what the model sees
/// so the player can line up their hand before capture. Purely cosmetic:
/// nothing it reads feeds into round resolution. It idles while the model
/// is loading or a result is on screen.
///
/// The task lives exactly as long as this handle; dropping it aborts the
/// loop.
#[derive(Debug)]
pub struct Monitor {
    task: JoinHandle<()>,
    latest: watch::Receiver<Classification>,
}

impl Monitor {
    pub fn spawn(
        adapter: Adapter,
        camera: Arc<dyn Camera>,
        phase: watch::Receiver<Phase>,
        audience: Audience,
        refresh: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(Classification::idle());
        let task = tokio::spawn(Self::run(adapter, camera, phase, audience, refresh, tx));
        Self { task, latest: rx }
    }
    /// Most recent live reading.
    pub fn latest(&self) -> Classification {
        *self.latest.borrow()
    }
    pub fn subscribe(&self) -> watch::Receiver<Classification> {
        self.latest.clone()
    }
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
    async fn run(
        adapter: Adapter,
        camera: Arc<dyn Camera>,
        phase: watch::Receiver<Phase>,
        audience: Audience,
        refresh: Duration,
        latest: watch::Sender<Classification>,
    ) {
        let mut interval = tokio::time::interval(refresh);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut shown = None::<Gesture>;
        loop {
            interval.tick().await;
            if !adapter.ready() || !phase.borrow().wants_live() {
                continue;
            }
            let Some(reading) = adapter.sample(&*camera).await else {
                continue;
            };
            latest.send_replace(reading);
            if shown != Some(reading.gesture()) {
                shown = Some(reading.gesture());
                audience.broadcast(Event::Live(reading));
            }
        }
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(Gesture);
    #[async_trait::async_trait]
    impl Classifier for Always {
        async fn infer(&self, _: &Frame) -> anyhow::Result<Distribution> {
            Ok(Distribution::certain(self.0))
        }
    }

    fn camera() -> Arc<Feed> {
        let feed = Arc::new(Feed::default());
        feed.push(Frame::solid(2, 2, [9, 9, 9]));
        feed
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_live_readings() {
        let adapter = Adapter::new(Arc::new(Model::preloaded(Always(Gesture::Scissors))));
        let (_phase, rx) = watch::channel(Phase::Waiting);
        let monitor = Monitor::spawn(adapter, camera(), rx, Audience::default(), REFRESH);
        tokio::time::sleep(REFRESH * 3).await;
        assert_eq!(monitor.latest().gesture(), Gesture::Scissors);
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_while_result_is_shown() {
        let adapter = Adapter::new(Arc::new(Model::preloaded(Always(Gesture::Rock))));
        let (_phase, rx) = watch::channel(Phase::Result);
        let monitor = Monitor::spawn(adapter, camera(), rx, Audience::default(), REFRESH);
        tokio::time::sleep(REFRESH * 3).await;
        assert_eq!(monitor.latest(), Classification::idle());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_loop() {
        let adapter = Adapter::new(Arc::new(Model::preloaded(Always(Gesture::Rock))));
        let (_phase, rx) = watch::channel(Phase::Waiting);
        let monitor = Monitor::spawn(adapter, camera(), rx, Audience::default(), REFRESH);
        let mut latest = monitor.subscribe();
        assert!(monitor.is_running());
        drop(monitor);
        tokio::time::sleep(REFRESH * 3).await;
        latest.borrow_and_update();
        assert!(latest.changed().await.is_err());
    }

    const REFRESH: Duration = Duration::from_millis(16);
}
