/// Where the round controller currently is. Exactly one is active.
///
/// `Waiting` is where a fresh or reset session sits. A started round moves
/// through `Countdown` and `Capture` and parks in `Result` until the player
/// starts the next one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Waiting,
    Countdown,
    Capture,
    Result,
}

impl Phase {
    /// A new round may begin from here.
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Waiting | Self::Result)
    }
    /// A round is underway and can't be interrupted by another start.
    pub const fn is_busy(&self) -> bool {
        !self.is_idle()
    }
    /// Live feedback runs everywhere except while a result is on screen.
    pub const fn wants_live(&self) -> bool {
        !matches!(self, Self::Result)
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Countdown => "countdown",
            Self::Capture => "capture",
            Self::Result => "result",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
