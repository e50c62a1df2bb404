use super::*;
use tokio::sync::watch;

/// Source of the most recent video frame.
///
/// Implementations must not block: the round controller polls this from
/// inside its own task and expects an answer immediately.
pub trait Camera: Send + Sync {
    /// The current frame, or `None` if nothing has been captured yet.
    fn frame(&self) -> Option<Frame>;
}

/// Latest-frame slot.
///
/// Whatever drives the physical camera pushes decoded frames in; the game
/// reads whichever frame is newest at the moment it asks. Older frames are
/// simply overwritten.
#[derive(Debug)]
pub struct Feed(watch::Sender<Option<Frame>>);

impl Default for Feed {
    fn default() -> Self {
        Self(watch::Sender::new(None))
    }
}

impl Feed {
    pub fn push(&self, frame: Frame) {
        self.0.send_replace(Some(frame));
    }
    /// Camera went away.
    pub fn clear(&self) {
        self.0.send_replace(None);
    }
    /// Receiver that wakes on every new frame.
    pub fn subscribe(&self) -> watch::Receiver<Option<Frame>> {
        self.0.subscribe()
    }
}

impl Camera for Feed {
    fn frame(&self) -> Option<Frame> {
        self.0.borrow().clone()
    }
}

impl<C> Camera for std::sync::Arc<C>
where
    C: Camera + ?Sized,
{
    fn frame(&self) -> Option<Frame> {
        self.as_ref().frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn starts_empty() {
        assert!(Feed::default().frame().is_none());
    }
    #[test]
    fn keeps_only_the_newest_frame() {
        let feed = Feed::default();
        feed.push(Frame::solid(1, 1, [1, 1, 1]));
        feed.push(Frame::solid(1, 1, [2, 2, 2]));
        assert_eq!(feed.frame(), Some(Frame::solid(1, 1, [2, 2, 2])));
    }
    #[test]
    fn clear_drops_the_frame() {
        let feed = Feed::default();
        feed.push(Frame::solid(1, 1, [1, 1, 1]));
        feed.clear();
        assert!(feed.frame().is_none());
    }
}
