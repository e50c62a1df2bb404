use super::*;
use tokio::sync::mpsc::*;

/// Runs one Observer in its own task so the room never waits on it.
///
/// - Room broadcasts every Event to all actors
/// - Actor forwards each to Observer::notify, in order
/// - Actor exits when the room hangs up or the observer dies
pub struct Actor {
    id: usize,
    observer: Box<dyn Observer>,
    getter: UnboundedReceiver<Event>,
}

impl Actor {
    pub fn spawn(id: usize, observer: Box<dyn Observer>) -> UnboundedSender<Event> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            id,
            observer,
            getter: rx,
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        while let Some(ref event) = self.getter.recv().await {
            log::trace!("[actor O{}] received {}", self.id, event);
            self.observer.notify(event).await;
            if !self.observer.alive() {
                log::info!("[actor O{}] observer disconnected", self.id);
                break;
            }
        }
    }
}
