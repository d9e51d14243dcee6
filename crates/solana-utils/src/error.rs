use solana_sdk::signer::SignerError;

/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parse url error.
    #[error("parse url: {0}")]
    ParseUrl(#[from] url::ParseError),
    /// Parse cluster error.
    #[error("parse cluster: {0}")]
    ParseCluster(&'static str),
    /// Compile message error.
    #[error("compile message: {0}")]
    CompileMessage(#[from] solana_sdk::message::CompileError),
    /// Client error.
    #[error("client: {0}")]
    Client(#[from] Box<solana_client::client_error::ClientError>),
    /// Signer error.
    #[error("signer: {0}")]
    Signer(#[from] SignerError),
    /// The transaction has no instruction to execute.
    #[error("missing instruction")]
    MissingInstruction,
    /// The wallet has no connected account.
    #[error("wallet not connected")]
    WalletNotConnected,
    /// No signer is available in this build or environment.
    #[error("wallet not available")]
    WalletUnavailable,
}

impl Error {
    /// Returns whether the error is an explicit rejection by the signer.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Signer(SignerError::UserCancel(_)))
    }
}

