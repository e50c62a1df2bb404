//! Async round controller for the gesture game.
//!
//! Turns a stream of noisy per-frame readings into one decision per round:
//! count down, take a short burst of samples, vote, and score the result
//! against the computer.
//!
//! ## Architecture
//!
//! - [`Room`] — Imperative shell: clock, camera, opponent, observers
//! - [`Engine`] — Functional core: phase transitions and scoring
//! - [`Monitor`] — Cancellable live-feedback loop at display cadence
//! - [`Actor`] — Async task wrapper forwarding events to one observer
//! - [`Remote`] — The player's start/reset buttons
//!
//! ## State
//!
//! - [`Phase`] — Waiting, countdown, capture, result
//! - [`Session`] — Score and round counter until reset
//! - [`Round`] — One resolved play
//!
//! ## Presentation
//!
//! - [`Event`] — Messages from room to observers
//! - [`Observer`] — Trait for pluggable observers
//! - [`Snapshot`] — Drawable state folded from events
//! - [`Message`] — JSON wire format of events
mod actor;
mod audience;
mod channel;
mod command;
mod config;
mod engine;
mod event;
mod message;
mod monitor;
mod observer;
mod opponent;
mod phase;
mod room;
mod round;
mod score;
mod session;
mod snapshot;
mod timer;

pub use actor::*;
pub use audience::*;
pub use channel::*;
pub use command::*;
pub use config::*;
pub use engine::*;
pub use event::*;
pub use message::*;
pub use monitor::*;
pub use observer::*;
pub use opponent::*;
pub use phase::*;
pub use room::*;
pub use round::*;
pub use score::*;
pub use session::*;
pub use snapshot::*;
pub use timer::*;
