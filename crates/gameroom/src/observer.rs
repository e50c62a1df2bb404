use super::*;

/// Anything that reacts to a room: a renderer, a websocket, a logger.
///
/// The async design lets a slow observer (network, terminal) await its own
/// I/O without holding up the round; each one runs in its own [`Actor`].
#[async_trait::async_trait]
pub trait Observer: Send {
    /// Returns false once the observer has gone away (socket closed, etc.).
    /// The actor stops forwarding after that.
    fn alive(&self) -> bool {
        true
    }
    async fn notify(&mut self, event: &Event);
}
