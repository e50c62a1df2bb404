//! Terminal arcade.
//!
//! Stands a painted puppet in front of a fake camera and a colour-matching
//! model so the whole game can be played without hardware.
mod console;
mod puppet;
mod tint;

#[cfg(feature = "cli")]
mod cli;

pub use console::*;
pub use puppet::*;
pub use tint::*;

#[cfg(feature = "cli")]
pub use cli::*;
