use tokio::sync::mpsc::UnboundedSender;

/// The player's two buttons, plus shutting the room down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a round. Ignored while a round is underway or the model is
    /// still loading.
    Start,
    /// Zero the score. Cancels a running countdown; waits out a capture.
    Reset,
    /// Stop the room task.
    Quit,
}

/// Everything that can land in a room's inbox.
#[derive(Debug)]
pub(crate) enum Signal {
    Command(Command),
    Loaded(bool),
}

/// Cloneable handle for pressing a room's buttons from anywhere.
#[derive(Debug, Clone)]
pub struct Remote(pub(crate) UnboundedSender<Signal>);

impl Remote {
    /// Returns false once the room has shut down.
    pub fn send(&self, command: Command) -> bool {
        self.0.send(Signal::Command(command)).is_ok()
    }
    pub fn start(&self) -> bool {
        self.send(Command::Start)
    }
    pub fn reset(&self) -> bool {
        self.send(Command::Reset)
    }
    pub fn quit(&self) -> bool {
        self.send(Command::Quit)
    }
}
