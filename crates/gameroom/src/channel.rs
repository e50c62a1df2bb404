use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Coupled sender/receiver pair for a task's inbox.
/// Keeping the sender alongside the receiver means the inbox never closes
/// while its owner is alive, and helpers can be handed fresh senders.
#[derive(Debug)]
pub struct Channel<T> {
    tx: UnboundedSender<T>,
    rx: UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn tx(&self) -> &UnboundedSender<T> {
        &self.tx
    }
    pub fn rx(&mut self) -> &mut UnboundedReceiver<T> {
        &mut self.rx
    }
}
