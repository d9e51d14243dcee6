#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Football Fusion SDK
//!
//! Client for the Football Fusion tournament program: address derivation,
//! the program's wire format, instruction builders, account decoders and an
//! RPC client tying them together.

/// Error type.
pub mod error;

/// Constants.
pub mod constants;

/// Functions for constructing Program Derived Addresses.
pub mod pda;

/// Binary codec.
pub mod codec;

/// Instruction discriminators.
pub mod discriminator;

/// Instruction Builders.
pub mod builders;

/// Account decoders.
pub mod accounts;

/// Client.
pub mod client;

/// Utils.
pub mod utils;

pub use client::Client;
pub use error::Error;

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use fusion_solana_utils as solana_utils;
