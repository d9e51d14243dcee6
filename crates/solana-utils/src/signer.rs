use std::sync::Arc;

use solana_sdk::signer::Signer;

/// Shared reference to a signer held by this process.
pub type LocalSignerRef = Arc<dyn Signer + Send + Sync>;

/// Wrap a signer into a [`LocalSignerRef`].
pub fn local_signer(signer: impl Signer + Send + Sync + 'static) -> LocalSignerRef {
    Arc::new(signer)
}
