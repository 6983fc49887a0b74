use crate::dto::Report;
use colored::Colorize;

/// What the user can pick from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Play,
    Report(Report),
    Exit,
}

impl Choice {
    pub fn all() -> Vec<Self> {
        std::iter::once(Self::Play)
            .chain(Report::all().into_iter().map(Self::Report))
            .chain(std::iter::once(Self::Exit))
            .collect()
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Play => "Play against machine",
            Self::Report(report) => report.label(),
            Self::Exit => "Exit",
        }
    }
    pub fn render() -> String {
        std::iter::once(format!("\n{}", "--- Main Menu ---".bold()))
            .chain(
                Self::all()
                    .iter()
                    .enumerate()
                    .map(|(i, choice)| format!("{}. {}", i + 1, choice.label())),
            )
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Menu entries are picked by their 1-based number.
impl TryFrom<&str> for Choice {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::all().get(i).copied())
            .ok_or_else(|| format!("invalid option: {}", s.trim()))
    }
}
