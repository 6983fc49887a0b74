//! Interactive command line.
//!
//! Optional exhibition games first, then the menu loop until the user
//! exits. Every game is played locally and sent to the API afterwards.
pub mod args;
pub mod menu;

pub use args::*;
pub use menu::*;

use crate::Config;
use crate::client::Client;
use crate::dto::Report;
use crate::game::Mode;
use crate::game::Outcome;
use crate::game::Stubborn;
use crate::players::Human;
use crate::players::Robot;
use colored::Colorize;
use dialoguer::Input;

pub struct CLI(Client);

impl CLI {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Client::new(config).map(Self)
    }

    pub async fn run(&self, args: &Args) {
        if let Some(n) = args.exhibitions() {
            log::info!("running {} exhibition games", n);
            for i in 1..=n {
                println!("{}", format!("----------- Game {} -----------", i).cyan());
                self.play(Mode::Exhibition).await;
            }
        }
        loop {
            println!("{}", Choice::render());
            let input = match Input::<String>::new()
                .with_prompt("Select an option")
                .allow_empty(true)
                .interact_text()
            {
                Ok(input) => input,
                Err(e) => {
                    log::error!("reading menu option: {}", e);
                    break;
                }
            };
            match Choice::try_from(input.as_str()) {
                Ok(Choice::Exit) => break,
                Ok(Choice::Play) => self.play(Mode::Versus).await,
                Ok(Choice::Report(report)) => self.report(report).await,
                Err(e) => {
                    log::warn!("{} selected by the user", e);
                    println!("Invalid option, please try again.");
                }
            }
        }
        println!("Thank you for playing! See you next time.");
    }

    /// Play one game in `mode` and hand it to the API.
    pub async fn play(&self, mode: Mode) {
        let a = mode.initiator();
        let b = mode.opponent();
        log::info!("starting {:?} game: {} vs {}", mode, a, b);
        let rounds = match mode {
            Mode::Versus => crate::game::play(mode, &mut Human, &mut Robot, &mut Human),
            Mode::Exhibition => crate::game::play(mode, &mut Robot, &mut Robot, &mut Stubborn),
        };
        let outcome = Outcome::summarize(&rounds, a, b);
        self.0.create_game(&rounds, &outcome).await;
    }

    async fn report(&self, report: Report) {
        match self.0.report(report).await {
            Ok(json) => println!(
                "{}\n{}",
                report.label().bold(),
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
            ),
            Err(e) => {
                log::error!("error displaying {}: {}", report, e);
                println!("{}", format!("Error displaying {}: {}", report, e).red());
            }
        }
    }
}
