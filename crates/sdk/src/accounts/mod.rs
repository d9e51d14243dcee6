/// Tournament account.
pub mod tournament;

/// Platform account.
pub mod platform;

/// SPL token account.
pub mod token;

pub use platform::PlatformAccount;
pub use token::{read_token_amount, TokenAccount};
pub use tournament::{TournamentAccount, TournamentStatus};
