//! Gesture vocabulary and the rules that turn noisy readings into a verdict.
//!
//! ## Readings
//!
//! - [`Gesture`] — The closed label set: idle, rock, paper, scissors
//! - [`Distribution`] — Raw per-gesture confidence from an image model
//! - [`Classification`] — One thresholded reading of one frame
//!
//! ## Resolution
//!
//! - [`Ballot`] — Majority vote over a capture burst
//! - [`Outcome`] — Win, lose, or draw from the player's point of view
mod ballot;
mod classification;
mod distribution;
mod gesture;
mod outcome;

pub use ballot::*;
pub use classification::*;
pub use distribution::*;
pub use gesture::*;
pub use outcome::*;
