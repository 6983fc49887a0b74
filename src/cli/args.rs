use clap::Parser;

/// Keyword that asks for machine-against-machine games before the menu.
pub const EXHIBITION: &str = "mvm";

/// Play rock-paper-scissors against the machine.
///
/// `play mvm 5` first runs five machine-against-machine games.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// `mvm` to run exhibition games first
    pub mode: Option<String>,
    /// how many exhibition games to run
    #[arg(allow_hyphen_values = true)]
    pub games: Option<String>,
}

impl Args {
    /// Number of exhibition games requested.
    ///
    /// Anything malformed is reported and yields `None`, so the caller
    /// goes straight to the menu.
    pub fn exhibitions(&self) -> Option<usize> {
        let (mode, games) = match (self.mode.as_deref(), self.games.as_deref()) {
            (Some(mode), Some(games)) => (mode, games),
            _ => return None,
        };
        if mode != EXHIBITION {
            println!(
                "You have to introduce '{}' as first parameter of the script to play machine vs machine.",
                EXHIBITION
            );
            log::warn!("unknown mode keyword: {}", mode);
            return None;
        }
        match games.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                println!("Second argument must be a number for the number of games to play.");
                log::error!(
                    "the second argument is not a number: {}. cannot play machine against machine.",
                    games
                );
                None
            }
        }
    }
}
