//! Rock-paper-scissors against the machine.
//!
//! ## Core
//! - [`game`]: Move resolution, round sequencing, game outcome
//! - [`stats`]: Aggregate reports over finished games
//! - [`dto`]: Wire types shared by the API and its client
//! - [`config`]: Process-wide settings read once at startup
//!
//! ## Application (`server` feature)
//! - [`players`]: Interactive and random move sources
//! - [`store`]: Game persistence behind the [`store::Store`] trait
//! - [`server`]: HTTP persistence and reporting API
//! - [`client`]: HTTP client the game uses to reach the API
//! - [`cli`]: Exhibition runs and the interactive menu
//!
//! ## Persistence (`database` feature)
//! - [`database`]: PostgreSQL schema and [`store::Store`] implementation
pub mod config;
pub mod dto;
pub mod game;
pub mod stats;

#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod players;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod store;

#[cfg(feature = "database")]
pub mod database;

pub use config::Config;

/// Win rates and hand shares, in percent.
pub type Percent = f32;

/// Rounds in a complete game. Anything shorter was abandoned.
pub const ROUNDS: usize = 3;
/// Default number of leaderboard entries.
pub const RANKING_LIMIT: usize = 3;

/// Random instance generation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize logging once for the whole process.
/// DEBUG and above go to a timestamped file under the configured directory;
/// INFO and above also go to the terminal when `terminal` is set.
#[cfg(feature = "server")]
pub fn log(config: &Config, terminal: bool) {
    std::fs::create_dir_all(&config.log_dir).expect("create logs directory");
    let settings = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        settings.clone(),
        std::fs::File::create(config.log_dir.join(format!("{}.log", time)))
            .expect("create log file"),
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![file];
    if terminal {
        loggers.push(simplelog::TermLogger::new(
            log::LevelFilter::Info,
            settings.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ));
    }
    simplelog::CombinedLogger::init(loggers).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
