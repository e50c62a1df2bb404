use super::*;
use image::Rgb;
use image::RgbImage;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rps_gesture::*;
use rps_vision::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const WIDTH: u32 = 32;
const HEIGHT: u32 = 24;
const FRAME_RATE: Duration = Duration::from_millis(33);

/// Simulated camera.
///
/// Holds a pose and keeps painting it into a [`Feed`] at roughly thirty
/// frames a second, each pixel jittered by up to `noise` levels. Clearing
/// the pose unplugs the camera.
#[derive(Debug)]
pub struct Puppet {
    pose: watch::Sender<Option<Gesture>>,
    task: JoinHandle<()>,
}

impl Puppet {
    pub fn spawn(feed: Arc<Feed>, noise: u8, seed: u64) -> Self {
        let pose = watch::Sender::new(Some(Gesture::Idle));
        let task = tokio::spawn(Self::run(feed, pose.subscribe(), noise, seed));
        Self { pose, task }
    }
    pub fn show(&self, gesture: Gesture) {
        log::debug!("[puppet] showing {}", gesture);
        self.pose.send_replace(Some(gesture));
    }
    pub fn unplug(&self) {
        log::debug!("[puppet] camera unplugged");
        self.pose.send_replace(None);
    }
    pub fn pose(&self) -> Option<Gesture> {
        *self.pose.borrow()
    }
    /// One frame of `gesture`'s colour with per-pixel jitter.
    pub fn paint(gesture: Gesture, noise: u8, rng: &mut SmallRng) -> Frame {
        let base = Tint::palette(gesture);
        let spread = noise as i16;
        let image = RgbImage::from_fn(WIDTH, HEIGHT, |_, _| {
            Rgb(base.map(|c| {
                let jitter = match spread {
                    0 => 0,
                    s => rng.random_range(-s..=s),
                };
                (c as i16 + jitter).clamp(0, 255) as u8
            }))
        });
        Frame::new(image)
    }
    async fn run(feed: Arc<Feed>, pose: watch::Receiver<Option<Gesture>>, noise: u8, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut interval = tokio::time::interval(FRAME_RATE);
        loop {
            interval.tick().await;
            match *pose.borrow() {
                Some(gesture) => feed.push(Self::paint(gesture, noise, &mut rng)),
                None => feed.clear(),
            }
        }
    }
}

impl Drop for Puppet {
    fn drop(&mut self) {
        self.task.abort();
    }
}
