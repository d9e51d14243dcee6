#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Football Fusion Solana Utils
//!
//! Program-agnostic plumbing shared by the Football Fusion client: cluster
//! selection, the wallet connector, single-instruction transaction assembly
//! and submission.

/// Error type.
pub mod error;

/// Cluster.
pub mod cluster;

/// Wallet Config.
pub mod config;

/// Signer.
pub mod signer;

/// Wallet connector.
pub mod wallet;

/// Program.
pub mod program;

/// Transaction builder.
pub mod transaction_builder;

/// RPC client extension.
pub(crate) mod client;

/// Utils.
pub mod utils;

pub use crate::error::Error;

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use solana_client;
pub use solana_sdk;
