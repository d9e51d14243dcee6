use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    message::VersionedMessage, pubkey::Pubkey, signature::Signature, signer::Signer,
    transaction::VersionedTransaction,
};

use crate::{client::SendAndConfirm, signer::LocalSignerRef};

/// Wallet connector.
///
/// The wallet is an opaque signer and broadcaster: callers hand it a compiled
/// message and get back a signature or a wallet-originated failure. An
/// explicit rejection by the signer surfaces as
/// [`SignerError::UserCancel`](solana_sdk::signer::SignerError::UserCancel),
/// see [`Error::is_user_rejection`](crate::Error::is_user_rejection).
#[allow(async_fn_in_trait)]
pub trait Wallet {
    /// Returns whether a signer backs this wallet.
    fn is_available(&self) -> bool;

    /// Returns the connected account, if any.
    fn account(&self) -> Option<Pubkey>;

    /// Connect and return the account key.
    fn connect(&self) -> crate::Result<Pubkey>;

    /// Disconnect.
    fn disconnect(&self);

    /// Sign the message.
    fn sign(&self, message: VersionedMessage) -> crate::Result<VersionedTransaction>;

    /// Sign the message and broadcast the transaction, waiting for confirmation.
    async fn sign_and_send(
        &self,
        client: &RpcClient,
        message: VersionedMessage,
        config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature>;
}

/// A wallet backed by a local signer.
#[derive(Clone)]
pub struct SignerWallet {
    signer: LocalSignerRef,
    connected: Arc<AtomicBool>,
}

impl SignerWallet {
    /// Create a disconnected wallet.
    pub fn new(signer: LocalSignerRef) -> Self {
        Self {
            signer,
            connected: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a wallet and connect it.
    pub fn new_connected(signer: LocalSignerRef) -> crate::Result<Self> {
        let wallet = Self::new(signer);
        wallet.connect()?;
        Ok(wallet)
    }

    /// Get the underlying signer.
    pub fn signer(&self) -> &LocalSignerRef {
        &self.signer
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}

impl fmt::Debug for SignerWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerWallet")
            .field("pubkey", &self.signer.pubkey())
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Wallet for SignerWallet {
    fn is_available(&self) -> bool {
        true
    }

    fn account(&self) -> Option<Pubkey> {
        self.is_connected().then(|| self.signer.pubkey())
    }

    fn connect(&self) -> crate::Result<Pubkey> {
        let pubkey = self.signer.try_pubkey()?;
        self.connected.store(true, Ordering::Release);
        tracing::debug!(%pubkey, "wallet connected");
        Ok(pubkey)
    }

    fn disconnect(&self) {
        self.connected.store(false, Ordering::Release);
    }

    fn sign(&self, message: VersionedMessage) -> crate::Result<VersionedTransaction> {
        if !self.is_connected() {
            return Err(crate::Error::WalletNotConnected);
        }
        let signers: Vec<&dyn Signer> = vec![&*self.signer];
        Ok(VersionedTransaction::try_new(message, &signers)?)
    }

    async fn sign_and_send(
        &self,
        client: &RpcClient,
        message: VersionedMessage,
        mut config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature> {
        let tx = self.sign(message)?;

        config.preflight_commitment = config
            .preflight_commitment
            .or(Some(client.commitment().commitment));

        let signature = client
            .send_and_confirm_transaction_with_config(&tx, config)
            .await
            .map_err(Box::new)?;

        Ok(signature)
    }
}

/// The wallet used when no signer is available.
///
/// Every operation that needs a signature fails with
/// [`Error::WalletUnavailable`](crate::Error::WalletUnavailable).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableWallet;

impl Wallet for UnavailableWallet {
    fn is_available(&self) -> bool {
        false
    }

    fn account(&self) -> Option<Pubkey> {
        None
    }

    fn connect(&self) -> crate::Result<Pubkey> {
        tracing::warn!("no signer is available in this environment");
        Err(crate::Error::WalletUnavailable)
    }

    fn disconnect(&self) {}

    fn sign(&self, _message: VersionedMessage) -> crate::Result<VersionedTransaction> {
        Err(crate::Error::WalletUnavailable)
    }

    async fn sign_and_send(
        &self,
        _client: &RpcClient,
        _message: VersionedMessage,
        _config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature> {
        Err(crate::Error::WalletUnavailable)
    }
}

/// Wallet implementation chosen at startup.
#[derive(Debug, Clone)]
pub enum WalletKind {
    /// Backed by a local signer.
    Signer(SignerWallet),
    /// No signer available.
    Unavailable(UnavailableWallet),
}

impl WalletKind {
    /// Select the wallet implementation from the signer capability.
    ///
    /// This is meant to be called once; the rest of the program only sees
    /// the [`Wallet`] interface.
    pub fn select(signer: Option<LocalSignerRef>) -> Self {
        match signer {
            Some(signer) => Self::Signer(SignerWallet::new(signer)),
            None => Self::Unavailable(UnavailableWallet),
        }
    }
}

impl From<SignerWallet> for WalletKind {
    fn from(wallet: SignerWallet) -> Self {
        Self::Signer(wallet)
    }
}

impl From<UnavailableWallet> for WalletKind {
    fn from(wallet: UnavailableWallet) -> Self {
        Self::Unavailable(wallet)
    }
}

impl Wallet for WalletKind {
    fn is_available(&self) -> bool {
        match self {
            Self::Signer(wallet) => wallet.is_available(),
            Self::Unavailable(wallet) => wallet.is_available(),
        }
    }

    fn account(&self) -> Option<Pubkey> {
        match self {
            Self::Signer(wallet) => wallet.account(),
            Self::Unavailable(wallet) => wallet.account(),
        }
    }

    fn connect(&self) -> crate::Result<Pubkey> {
        match self {
            Self::Signer(wallet) => wallet.connect(),
            Self::Unavailable(wallet) => wallet.connect(),
        }
    }

    fn disconnect(&self) {
        match self {
            Self::Signer(wallet) => wallet.disconnect(),
            Self::Unavailable(wallet) => wallet.disconnect(),
        }
    }

    fn sign(&self, message: VersionedMessage) -> crate::Result<VersionedTransaction> {
        match self {
            Self::Signer(wallet) => wallet.sign(message),
            Self::Unavailable(wallet) => wallet.sign(message),
        }
    }

    async fn sign_and_send(
        &self,
        client: &RpcClient,
        message: VersionedMessage,
        config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature> {
        match self {
            Self::Signer(wallet) => wallet.sign_and_send(client, message, config).await,
            Self::Unavailable(wallet) => wallet.sign_and_send(client, message, config).await,
        }
    }
}
