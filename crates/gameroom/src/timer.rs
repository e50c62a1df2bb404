use std::time::Duration;
use tokio::time::Instant;

/// Deadline for the next countdown step.
///
/// Holds a deadline rather than a running task, so cancelling is just
/// clearing it: a cleared timer can never fire into a later round.
#[derive(Debug)]
pub struct Timer {
    tick: Duration,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            deadline: None,
        }
    }
    /// Schedules the next step one tick from now.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.tick);
    }
    pub fn clear(&mut self) {
        self.deadline = None;
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn armed(&self) -> bool {
        self.deadline.is_some()
    }
    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
    /// Resolves at `deadline`, or never if there is none.
    pub async fn until(deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}
