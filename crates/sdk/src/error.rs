use fusion_solana_utils::{solana_client::client_error::ClientError, Error as UtilsError};

use crate::codec::EncodingError;

/// SDK Error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad caller input, reported before any network call.
    #[error("precondition: {0}")]
    Precondition(String),
    /// Malformed bytes.
    #[error("encoding: {0}")]
    Encoding(#[from] EncodingError),
    /// No off-curve address exists for the seeds.
    #[error("derivation: no valid bump for seeds `{0}`")]
    Derivation(String),
    /// RPC failure.
    #[error("network: {0}")]
    Network(Box<ClientError>),
    /// The signer declined the request.
    #[error("user rejected: {0}")]
    UserRejection(String),
    /// Error from [`fusion_solana_utils`].
    #[error("utils: {0}")]
    SolanaUtils(UtilsError),
    /// Unknown error.
    #[error("unknown: {0}")]
    Unknown(String),
}

impl Error {
    /// Create a precondition error.
    pub fn precondition(msg: impl ToString) -> Self {
        Self::Precondition(msg.to_string())
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl ToString) -> Self {
        Self::Unknown(msg.to_string())
    }

    /// Returns whether the error is an explicit rejection by the signer.
    ///
    /// Callers should show a neutral "cancelled" message for these.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::UserRejection(_))
    }

    /// Returns whether the error comes from the network.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<ClientError> for Error {
    fn from(err: ClientError) -> Self {
        Self::Network(Box::new(err))
    }
}

impl From<Box<ClientError>> for Error {
    fn from(err: Box<ClientError>) -> Self {
        Self::Network(err)
    }
}

impl From<UtilsError> for Error {
    fn from(err: UtilsError) -> Self {
        match err {
            UtilsError::Client(err) => Self::Network(err),
            err if err.is_user_rejection() => Self::UserRejection(err.to_string()),
            err @ (UtilsError::WalletNotConnected | UtilsError::WalletUnavailable) => {
                Self::Precondition(err.to_string())
            }
            err => Self::SolanaUtils(err),
        }
    }
}
