use rps_core::Arbitrary;

/// One of the four hand states the image model recognizes.
///
/// The discriminants fix the canonical order Idle < Rock < Paper < Scissors.
/// Every place that has to break a tie between gestures walks them in this
/// order, so resolution never depends on hash or insertion order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    #[default]
    Idle = 0isize,
    Rock = 1isize,
    Paper = 2isize,
    Scissors = 3isize,
}

impl Gesture {
    /// All four labels in canonical order.
    pub const fn all() -> [Self; 4] {
        [Self::Idle, Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The three committed moves in canonical order.
    pub const fn moves() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// Position in the model's output vector.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
    /// The move this one defeats. Idle defeats nothing.
    pub const fn prey(&self) -> Option<Self> {
        match self {
            Self::Rock => Some(Self::Scissors),
            Self::Scissors => Some(Self::Paper),
            Self::Paper => Some(Self::Rock),
            Self::Idle => None,
        }
    }
    /// Cyclic dominance: rock > scissors > paper > rock.
    pub fn beats(&self, other: &Self) -> bool {
        self.prey() == Some(*other)
    }
    /// Single-character abbreviation.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Idle => "-",
            Self::Rock => "R",
            Self::Paper => "P",
            Self::Scissors => "S",
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl From<usize> for Gesture {
    /// Model output index. Anything out of range reads as Idle.
    fn from(index: usize) -> Self {
        match index {
            1 => Self::Rock,
            2 => Self::Paper,
            3 => Self::Scissors,
            _ => Self::Idle,
        }
    }
}

impl TryFrom<&str> for Gesture {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "idle" | "-" => Ok(Self::Idle),
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            other => Err(anyhow::anyhow!("invalid gesture: {}", other)),
        }
    }
}

/// Uniform over the three committed moves. Idle is never drawn.
impl Arbitrary for Gesture {
    fn random() -> Self {
        Self::moves()[rand::random_range(0..3)]
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn dominance_is_cyclic() {
        assert!(Gesture::Rock.beats(&Gesture::Scissors));
        assert!(Gesture::Scissors.beats(&Gesture::Paper));
        assert!(Gesture::Paper.beats(&Gesture::Rock));
        assert!(!Gesture::Scissors.beats(&Gesture::Rock));
        assert!(!Gesture::Paper.beats(&Gesture::Scissors));
        assert!(!Gesture::Rock.beats(&Gesture::Paper));
    }
    #[test]
    fn nothing_beats_itself() {
        for g in Gesture::all() {
            assert!(!g.beats(&g));
        }
    }
    #[test]
    fn idle_beats_nothing() {
        for g in Gesture::all() {
            assert!(!Gesture::Idle.beats(&g));
        }
    }
    #[test]
    fn index_matches_output_slot() {
        for g in Gesture::all() {
            assert_eq!(Gesture::from(g.index()), g);
        }
        assert_eq!(Gesture::from(17), Gesture::Idle);
    }
    #[test]
    fn parses_names_and_symbols() {
        assert_eq!(Gesture::try_from("Rock").unwrap(), Gesture::Rock);
        assert_eq!(Gesture::try_from(" s ").unwrap(), Gesture::Scissors);
        assert!(Gesture::try_from("lizard").is_err());
    }
    #[test]
    fn random_never_idles() {
        for _ in 0..256 {
            assert!(!Gesture::random().is_idle());
        }
    }
    #[test]
    fn canonical_order() {
        assert!(Gesture::Idle < Gesture::Rock);
        assert!(Gesture::Rock < Gesture::Paper);
        assert!(Gesture::Paper < Gesture::Scissors);
    }
}
