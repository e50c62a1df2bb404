use super::*;
use clap::Parser;
use dialoguer::Select;
use rps_gameroom::*;
use rps_gesture::*;
use rps_vision::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Play rock-paper-scissors against the computer with a simulated camera.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the computer's throws and the camera noise
    #[arg(long)]
    pub seed: Option<u64>,
    /// Top-gesture confidence below which a reading counts as idle
    #[arg(long)]
    pub threshold: Option<f32>,
    /// Frames classified per capture burst
    #[arg(long)]
    pub samples: Option<usize>,
    /// Agreeing samples needed to trust a gesture
    #[arg(long)]
    pub quorum: Option<usize>,
    /// Countdown steps before capture
    #[arg(long)]
    pub countdown: Option<u8>,
    /// Per-pixel camera jitter, in colour levels
    #[arg(long, default_value_t = 24)]
    pub noise: u8,
    /// Simulated model load time in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub load_ms: u64,
    /// JSON file with room settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn config(&self) -> anyhow::Result<RoomConfig> {
        let mut config = match &self.config {
            Some(path) => RoomConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => RoomConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(quorum) = self.quorum {
            config.quorum = quorum;
        }
        if let Some(countdown) = self.countdown {
            config.countdown = countdown;
        }
        config.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Show(Gesture),
    Unplug,
    Play,
    Reset,
    Quit,
}

impl Choice {
    const MENU: [Self; 8] = [
        Self::Play,
        Self::Show(Gesture::Rock),
        Self::Show(Gesture::Paper),
        Self::Show(Gesture::Scissors),
        Self::Show(Gesture::Idle),
        Self::Unplug,
        Self::Reset,
        Self::Quit,
    ];
    fn label(&self) -> String {
        match self {
            Self::Show(Gesture::Idle) => String::from("lower hand"),
            Self::Show(g) => format!("show {} {}", g.symbol(), g.label()),
            Self::Unplug => String::from("unplug camera"),
            Self::Play => String::from("play"),
            Self::Reset => String::from("reset score"),
            Self::Quit => String::from("quit"),
        }
    }
}

/// Terminal front end: a puppet camera, a slow-loading tint model, and a
/// menu standing in for the player's hand and buttons.
pub struct Arcade {
    remote: Remote,
    puppet: Puppet,
    snapshot: watch::Receiver<Snapshot>,
    patience: Duration,
}

impl Arcade {
    pub async fn run() -> anyhow::Result<Session> {
        let args = Args::parse();
        let config = args.config()?;
        log::info!("[arcade] {:?}", config);
        let seed = args.seed.unwrap_or_else(rand::random);
        let feed = Arc::new(Feed::default());
        let model = Arc::new(Model::new(
            Tint::default().loader(Duration::from_millis(args.load_ms)),
        ));
        let mut room = Room::new(config, model, feed.clone()).with_opponent(Uniform::seeded(seed));
        let (spectator, snapshot) = Spectator::new();
        room.join(spectator);
        match args.json {
            true => room.join(Console::json()),
            false => room.join(Console::default()),
        }
        let arcade = Self {
            remote: room.remote(),
            puppet: Puppet::spawn(feed, args.noise, seed),
            snapshot,
            patience: Self::patience(&config),
        };
        let handle = tokio::spawn(room.run());
        arcade.play().await?;
        Ok(handle.await?)
    }
    /// Longest a round can take from start to result, plus slack.
    fn patience(config: &RoomConfig) -> Duration {
        config.tick * config.countdown as u32
            + config.spacing * config.samples as u32
            + Duration::from_secs(1)
    }
    async fn play(self) -> anyhow::Result<()> {
        loop {
            match self.choose().await? {
                Choice::Show(gesture) => self.puppet.show(gesture),
                Choice::Unplug => self.puppet.unplug(),
                Choice::Play => self.round().await,
                Choice::Reset => {
                    self.remote.reset();
                }
                Choice::Quit => {
                    self.remote.quit();
                    return Ok(());
                }
            }
        }
    }
    async fn choose(&self) -> anyhow::Result<Choice> {
        let prompt = self.prompt();
        let labels = Choice::MENU.iter().map(Choice::label).collect::<Vec<_>>();
        let index = tokio::task::spawn_blocking(move || {
            Select::new()
                .with_prompt(prompt)
                .report(false)
                .items(&labels)
                .default(0)
                .interact()
        })
        .await??;
        Ok(Choice::MENU[index])
    }
    fn prompt(&self) -> String {
        let snapshot = self.snapshot.borrow();
        let camera = match self.puppet.pose() {
            Some(gesture) => gesture.label(),
            None => "unplugged",
        };
        match snapshot.ready {
            true => format!("{} | hand: {}", snapshot.score, camera),
            false => format!("{} | hand: {} | model loading", snapshot.score, camera),
        }
    }
    /// Presses start and waits for the round to resolve.
    async fn round(&self) {
        let mut snapshot = self.snapshot.clone();
        let before = snapshot.borrow_and_update().rounds;
        if !self.remote.start() {
            log::warn!("[arcade] room is closed");
            return;
        }
        let resolved = snapshot.wait_for(|s| s.rounds > before);
        match tokio::time::timeout(self.patience, resolved).await {
            Ok(Ok(_)) => {}
            Ok(Err(_)) => log::warn!("[arcade] room is closed"),
            Err(_) => println!("no round started, is the model still loading?"),
        }
    }
}
