use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rps_gesture::*;

/// The computer's side of the table.
///
/// Called once per round, after the player's capture burst has been voted,
/// so an opponent can never peek at the player's move.
pub trait Opponent: Send {
    fn throw(&mut self) -> Gesture;
}

/// Uniform over rock, paper, scissors. Never idles.
#[derive(Debug, Clone)]
pub struct Uniform(SmallRng);

impl Uniform {
    /// Reproducible sequence of throws.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Opponent for Uniform {
    fn throw(&mut self) -> Gesture {
        Gesture::moves()[self.0.random_range(0..3)]
    }
}

/// Any closure works as an opponent; handy for scripted games.
impl<F> Opponent for F
where
    F: FnMut() -> Gesture + Send,
{
    fn throw(&mut self) -> Gesture {
        self()
    }
}
