use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::{cluster::Cluster, wallet::Wallet};

/// Wallet Config.
#[derive(Clone)]
pub struct Config<W> {
    cluster: Cluster,
    wallet: W,
    options: CommitmentConfig,
}

impl<W> Config<W> {
    /// Create a new wallet config.
    pub fn new(cluster: Cluster, wallet: W, options: CommitmentConfig) -> Self {
        Self {
            cluster,
            wallet,
            options,
        }
    }

    /// Get cluster.
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Get commitment config.
    pub fn commitment(&self) -> &CommitmentConfig {
        &self.options
    }

    /// Get the wallet.
    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Create a Solana RPC Client.
    pub fn rpc(&self) -> RpcClient {
        self.cluster.rpc(self.options)
    }
}

impl<W: Wallet> Config<W> {
    /// Get the fee payer, i.e. the connected wallet account.
    pub fn payer(&self) -> Option<Pubkey> {
        self.wallet.account()
    }

    /// Get the fee payer or fail if the wallet cannot sign.
    pub fn try_payer(&self) -> crate::Result<Pubkey> {
        match self.payer() {
            Some(payer) => Ok(payer),
            None if self.wallet.is_available() => Err(crate::Error::WalletNotConnected),
            None => Err(crate::Error::WalletUnavailable),
        }
    }
}
