use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// The three shapes a participant can throw.
///
/// There is no ordering between moves. Precedence lives in
/// [`Move::beats`], which is all the resolver looks at.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
    /// Strict precedence. A move never beats itself.
    pub const fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }
}

impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            other => Err(format!("invalid move: {}", other)),
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
