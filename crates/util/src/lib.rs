//! Core type aliases, traits, and constants for rochambeau.
//!
//! Every timing and voting knob the round controller uses lives here so the
//! gesture, vision, and gameroom crates agree on a single source of truth.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Classifier-reported probability for a gesture, in [0, 1].
pub type Confidence = f32;
/// Number of capture samples that agreed on a gesture.
pub type Votes = usize;
/// Wins accumulated by one side of the table.
pub type Points = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and opponent sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Typed wrapper over uuid::Uuid so a session id can't be mixed up with
/// any other id at compile time.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

/// Fresh time-ordered id.
impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}

// ============================================================================
// CLASSIFIER POLICY
// ============================================================================
/// Top-gesture confidence below this collapses the reading to Idle.
pub const CONFIDENCE_THRESHOLD: Confidence = 0.6;

// ============================================================================
// ROUND TIMING
// Countdown 3 -> 2 -> 1, one step per tick, then a short capture burst.
// ============================================================================
/// Steps shown before capture begins.
pub const COUNTDOWN_STEPS: u8 = 3;
/// Interval between countdown steps.
pub const COUNTDOWN_TICK: std::time::Duration = std::time::Duration::from_secs(1);
/// Frames classified per capture burst.
pub const CAPTURE_SAMPLES: usize = 5;
/// Suspension between consecutive capture samples.
pub const CAPTURE_SPACING: std::time::Duration = std::time::Duration::from_millis(100);
/// Minimum agreeing samples before a gesture is trusted.
pub const CAPTURE_QUORUM: Votes = 2;

// ============================================================================
// LIVE FEEDBACK
// ============================================================================
/// Polling cadence of the live-feedback loop (display refresh, ~60 Hz).
pub const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_micros(16_667);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "logging")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// Must be called from inside a tokio runtime.
#[cfg(feature = "logging")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
