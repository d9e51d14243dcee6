use solana_sdk::{pubkey, pubkey::Pubkey};

/// Program ID of the devnet deployment.
pub const DEVNET_PROGRAM_ID: Pubkey = pubkey!("5AaoN6kBmNoEqTiNPaV2y1am9QrEEHwgRHneR1QNExLm");

/// USDC mint on devnet.
pub const DEVNET_USDC_MINT: Pubkey = pubkey!("4zMMC9srt5Ri5X14GAgXhaHii3GnPAEERYPJgZJDncDU");

/// SPL Token program ID.
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Associated Token Account program ID.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// Decimals of USDC.
pub const USDC_DECIMALS: u8 = 6;

/// Decimals of SOL.
pub const LAMPORT_DECIMALS: u8 = 9;

/// Number of players in a squad.
pub const PLAYERS_PER_SQUAD: usize = 15;

/// Length of the discriminator prefixing every persisted account.
pub const ACCOUNT_DISCRIMINATOR_LEN: usize = 8;

/// Offset of the tournament counter in the platform account.
pub const PLATFORM_TOURNAMENT_COUNT_OFFSET: usize = ACCOUNT_DISCRIMINATOR_LEN + 32;

/// Offset of the amount in an SPL token account.
pub const TOKEN_ACCOUNT_AMOUNT_OFFSET: usize = 64;
