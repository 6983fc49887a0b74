/// The read-only queries the API answers, by route.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Report {
    GlobalInfo,
    StrongHand,
    WeakHand,
    Ranking,
    Statistics,
}

impl Report {
    pub const fn all() -> [Self; 5] {
        [
            Self::GlobalInfo,
            Self::StrongHand,
            Self::WeakHand,
            Self::Ranking,
            Self::Statistics,
        ]
    }
    /// Path under the `/game` scope.
    pub const fn route(&self) -> &'static str {
        match self {
            Self::GlobalInfo => "/get_global_info",
            Self::StrongHand => "/mano_fuerte",
            Self::WeakHand => "/mano_debil",
            Self::Ranking => "/ranking",
            Self::Statistics => "/estadisticas",
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GlobalInfo => "General information about the game history",
            Self::StrongHand => "Strong Hand",
            Self::WeakHand => "Weak Hand",
            Self::Ranking => "Ranking",
            Self::Statistics => "Statistics",
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
