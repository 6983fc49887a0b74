use serde::Deserialize;
use serde::Serialize;

/// Who is sitting at the table.
///
/// Human games pit a person against the machine and allow abandonment.
/// Exhibition games are machine against machine and always run to completion.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Versus,
    Exhibition,
}

impl Mode {
    pub const fn initiator(&self) -> Player {
        Player::Initiator(*self)
    }
    pub const fn opponent(&self) -> Player {
        Player::Opponent(*self)
    }
    pub const fn abandonable(&self) -> bool {
        matches!(self, Self::Versus)
    }
}

/// A participant in a game.
///
/// The initiator throws first (player_1), the opponent second (player_2).
/// Ties and forfeits go to the opponent. The display label is fixed by
/// seat and mode, and that label is what the store and API carry.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Player {
    Initiator(Mode),
    Opponent(Mode),
}

impl Player {
    pub const HUMAN: Self = Self::Initiator(Mode::Versus);
    pub const MACHINE: Self = Self::Opponent(Mode::Versus);

    pub const fn all() -> [Self; 4] {
        [
            Self::Initiator(Mode::Versus),
            Self::Opponent(Mode::Versus),
            Self::Initiator(Mode::Exhibition),
            Self::Opponent(Mode::Exhibition),
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initiator(Mode::Versus) => "Human",
            Self::Opponent(Mode::Versus) => "Machine",
            Self::Initiator(Mode::Exhibition) => "Machine_1",
            Self::Opponent(Mode::Exhibition) => "Machine_2",
        }
    }
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Initiator(mode) | Self::Opponent(mode) => *mode,
        }
    }
    pub const fn is_initiator(&self) -> bool {
        matches!(self, Self::Initiator(_))
    }
}

impl TryFrom<&str> for Player {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown participant: {}", s))
    }
}

impl TryFrom<String> for Player {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Player> for String {
    fn from(p: Player) -> Self {
        p.name().to_string()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
