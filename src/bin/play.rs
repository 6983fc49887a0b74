//! Interactive Game Binary
//!
//! Optionally runs machine-vs-machine exhibition games (`play mvm <count>`),
//! then opens the menu: play against the machine or read the reports.
//! Games and reports go through the API at API_URL.

use clap::Parser;
use roshambo::*;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    log(&config, false);
    kys();
    let args = cli::Args::parse();
    match cli::CLI::new(&config) {
        Ok(cli) => cli.run(&args).await,
        Err(e) => {
            log::error!("cannot start the game client: {}", e);
            eprintln!("cannot start the game client: {}", e);
        }
    }
}
