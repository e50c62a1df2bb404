//! The camera-facing half of the game.
//!
//! Raw inference is somebody else's problem: a [`Classifier`] turns a frame
//! into a [`Distribution`](rps_gesture::Distribution) and that is all we ask
//! of it. This crate owns everything around that call.
//!
//! - [`Frame`] — One decoded RGB image
//! - [`Camera`] — Anything that can hand over the latest frame
//! - [`Feed`] — Latest-frame slot a camera pump writes into
//! - [`Model`] — Load-once shared handle around a classifier
//! - [`Adapter`] — Thresholding front door; never fails
mod adapter;
mod camera;
mod classifier;
mod frame;
mod model;

pub use adapter::*;
pub use camera::*;
pub use classifier::*;
pub use frame::*;
pub use model::*;
