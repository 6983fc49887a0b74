//! Move sources for the two seats.
pub mod human;
pub use human::*;

pub mod robot;
pub use robot::*;
