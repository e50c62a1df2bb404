use super::*;
use tokio::sync::mpsc::UnboundedSender;

/// Fan-out to every observer's actor.
///
/// Cheap to clone; the room and its live monitor each hold one so both can
/// broadcast without routing through each other.
#[derive(Debug, Clone, Default)]
pub struct Audience {
    senders: Vec<UnboundedSender<Event>>,
}

impl Audience {
    /// Spawns an actor for the observer and adds it to the audience.
    pub fn join<O>(&mut self, observer: O)
    where
        O: Observer + 'static,
    {
        let sender = Actor::spawn(self.senders.len(), Box::new(observer));
        self.senders.push(sender);
    }
    pub fn len(&self) -> usize {
        self.senders.len()
    }
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
    /// Observers whose actors are still running.
    pub fn connected(&self) -> usize {
        self.senders.iter().filter(|s| !s.is_closed()).count()
    }
    pub fn broadcast(&self, event: Event) {
        log::debug!("[audience] {}", event);
        for sender in self.senders.iter() {
            let _ = sender.send(event.clone());
        }
    }
}
