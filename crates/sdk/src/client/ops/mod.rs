/// Tournament operations.
pub mod tournament;

pub use tournament::{EntryFeeCheck, TournamentOps, TournamentParams};
