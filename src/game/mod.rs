//! Round resolution and game outcome.
//!
//! - [`Move`] and [`resolve`] decide single rounds
//! - [`play`] sequences rounds between two [`Agent`]s
//! - [`Outcome`] turns rounds into a game winner
//! - [`Game`] is the persisted unit the statistics read back
pub mod agent;
pub use agent::*;

pub mod game;
pub use game::*;

pub mod moves;
pub use moves::*;

pub mod outcome;
pub use outcome::*;

pub mod player;
pub use player::*;

pub mod round;
pub use round::*;

pub mod sequencer;
pub use sequencer::*;
