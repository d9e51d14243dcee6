/// Utilities for program accounts.
pub mod accounts;

/// Balance reader.
pub mod balance;

/// Operations.
pub mod ops;

use std::sync::OnceLock;

use accounts::get_account_with_context;
use balance::Balances;
use fusion_solana_utils::{
    cluster::Cluster, config::Config, program::Program,
    transaction_builder::TransactionBuilder, utils::WithSlot, wallet::Wallet,
};
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcSendTransactionConfig},
};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature};
use typed_builder::TypedBuilder;

use crate::{
    accounts::{PlatformAccount, TournamentAccount},
    builders::FusionProgram,
};

/// Options for [`Client`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ClientOptions {
    #[builder(default)]
    program: FusionProgram,
    #[builder(default)]
    commitment: CommitmentConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Client for the tournament program.
pub struct Client<W> {
    cfg: Config<W>,
    program: FusionProgram,
    fusion_program: Program<W>,
    rpc: OnceLock<RpcClient>,
}

impl<W: Wallet + Clone> Client<W> {
    /// Create a new [`Client`] with the given options.
    pub fn new_with_options(
        cluster: Cluster,
        wallet: W,
        options: ClientOptions,
    ) -> crate::Result<Self> {
        let ClientOptions {
            program,
            commitment,
        } = options;
        let cfg = Config::new(cluster, wallet, commitment);
        Ok(Self {
            fusion_program: Program::new(program.id.0, cfg.clone()),
            program,
            cfg,
            rpc: Default::default(),
        })
    }

    /// Create a new [`Client`] with default options.
    pub fn new(cluster: Cluster, wallet: W) -> crate::Result<Self> {
        Self::new_with_options(cluster, wallet, ClientOptions::default())
    }

    /// Replace the RPC client used for reads and submissions.
    pub fn with_rpc(mut self, rpc: RpcClient) -> Self {
        self.rpc = OnceLock::from(rpc);
        self
    }

    /// Get current cluster.
    pub fn cluster(&self) -> &Cluster {
        self.cfg.cluster()
    }

    /// Get current commitment config.
    pub fn commitment(&self) -> CommitmentConfig {
        *self.cfg.commitment()
    }

    /// Get the wallet.
    pub fn wallet(&self) -> &W {
        self.cfg.wallet()
    }

    /// Get the connected account, if any.
    pub fn payer(&self) -> Option<Pubkey> {
        self.cfg.payer()
    }

    /// Get the connected account or fail with a precondition error.
    pub fn try_payer(&self) -> crate::Result<Pubkey> {
        Ok(self.cfg.try_payer()?)
    }

    /// Get [`RpcClient`].
    pub fn rpc(&self) -> &RpcClient {
        self.rpc.get_or_init(|| self.cfg.rpc())
    }

    /// Get the program configuration.
    pub fn program(&self) -> &FusionProgram {
        &self.program
    }

    /// Create a [`TransactionBuilder`] for the tournament program.
    pub fn transaction(&self) -> TransactionBuilder<W> {
        self.fusion_program.transaction()
    }

    /// Sign and send a transaction through this client's RPC.
    pub async fn send_transaction<T>(
        &self,
        tx: &TransactionBuilder<W, T>,
    ) -> crate::Result<Signature> {
        let config = RpcSendTransactionConfig {
            preflight_commitment: Some(self.commitment().commitment),
            ..Default::default()
        };
        Ok(tx.send_with_client(self.rpc(), config).await?)
    }

    fn account_config(&self) -> RpcAccountInfoConfig {
        RpcAccountInfoConfig {
            commitment: Some(self.commitment()),
            ..Default::default()
        }
    }

    /// Fetch the platform account.
    pub async fn platform(&self) -> crate::Result<WithSlot<PlatformAccount>> {
        let address = self.program.find_platform_address()?;
        let account = get_account_with_context(self.rpc(), &address, self.account_config()).await?;
        account
            .map(|account| -> crate::Result<_> {
                let account =
                    account.ok_or_else(|| crate::Error::precondition("platform not initialized"))?;
                Ok(PlatformAccount::decode(&account.data)?)
            })
            .transpose()
    }

    /// Read the platform counter and return the id of the next tournament.
    pub async fn next_tournament_id(&self) -> crate::Result<u64> {
        let platform = self.platform().await?;
        let id = platform
            .value()
            .next_tournament_id()
            .ok_or_else(|| crate::Error::unknown("tournament counter overflow"))?;
        tracing::debug!(slot = platform.slot(), id, "read next tournament id");
        Ok(id)
    }

    /// Fetch a tournament by id.
    ///
    /// Returns `None` if the tournament account does not exist.
    pub async fn tournament(
        &self,
        tournament_id: u64,
    ) -> crate::Result<WithSlot<Option<TournamentAccount>>> {
        let address = self.program.find_tournament_address(tournament_id)?;
        let account = get_account_with_context(self.rpc(), &address, self.account_config()).await?;
        account
            .map(|account| {
                account
                    .map(|account| TournamentAccount::decode(&account.data))
                    .transpose()
                    .map_err(crate::Error::from)
            })
            .transpose()
    }

    /// Get native and token balances of `owner`, defaulting to the payer.
    pub async fn balances(&self, owner: Option<&Pubkey>) -> crate::Result<Balances> {
        let owner = match owner {
            Some(owner) => *owner,
            None => self.try_payer()?,
        };
        balance::balances(self.rpc(), &self.program, &owner).await
    }
}
