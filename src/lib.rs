//! Rock-paper-scissors against a camera.
//!
//! This facade crate re-exports the rps crates for convenient access.
//!
//! ### Core Types
//! - [`util`] — Type aliases, constants, and shared traits
//! - [`gesture`] — Gesture labels, readings, voting, and outcomes
//!
//! ### Collaborators
//! - [`vision`] — Frame sources and the thresholding classifier adapter
//!
//! ### Application
//! - [`gameroom`] — Async round controller
//! - [`arcade`] — Terminal demo with a simulated camera and model

pub use rps_core        as util;
pub use rps_gesture     as gesture;
pub use rps_vision      as vision;
pub use rps_gameroom    as gameroom;

pub mod arcade;

#[cfg(feature = "cli")]
pub use rps_core::{kys, log};
