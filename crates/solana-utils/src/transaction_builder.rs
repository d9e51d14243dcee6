use std::fmt;

use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};

use crate::{config::Config, wallet::Wallet};

/// A builder for a transaction wrapping exactly one instruction.
///
/// The fee payer is the connected wallet account. The recent blockhash is
/// only fetched when signing, so a builder can be kept around without its
/// validity window running out.
#[must_use = "transaction builder do nothing if not built"]
#[derive(Clone)]
pub struct TransactionBuilder<W, T = ()> {
    output: T,
    program_id: Pubkey,
    cfg: Config<W>,
    accounts: Vec<AccountMeta>,
    instruction_data: Option<Vec<u8>>,
}

impl<W: Wallet, T: fmt::Debug> fmt::Debug for TransactionBuilder<W, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionBuilder")
            .field("output", &self.output)
            .field("program_id", &self.program_id)
            .field("payer", &self.cfg.payer())
            .field("accounts", &self.accounts)
            .field("instruction_data", &self.instruction_data)
            .finish()
    }
}

impl<W: Wallet + Clone> TransactionBuilder<W> {
    /// Create a new transaction builder.
    pub fn new(program_id: Pubkey, cfg: &Config<W>) -> Self {
        Self {
            output: (),
            program_id,
            cfg: cfg.clone(),
            accounts: Default::default(),
            instruction_data: None,
        }
    }
}

impl<W: Wallet + Clone, T> TransactionBuilder<W, T> {
    /// Replace program id, accounts and data with those of a built instruction.
    pub fn instruction(mut self, ix: Instruction) -> Self {
        self.program_id = ix.program_id;
        self.accounts = ix.accounts;
        self.instruction_data = Some(ix.data);
        self
    }

    /// Construct the instruction if present.
    pub fn get_instruction(&self) -> Option<Instruction> {
        let ix_data = self.instruction_data.as_ref()?;
        Some(Instruction {
            program_id: self.program_id,
            data: ix_data.clone(),
            accounts: self.accounts.clone(),
        })
    }

    /// Get the output.
    pub fn get_output(&self) -> &T {
        &self.output
    }

    /// Set the output and return the previous.
    pub fn swap_output<U>(self, output: U) -> (TransactionBuilder<W, U>, T) {
        let Self {
            cfg,
            output: previous,
            program_id,
            accounts,
            instruction_data,
        } = self;

        (
            TransactionBuilder {
                cfg,
                output,
                program_id,
                accounts,
                instruction_data,
            },
            previous,
        )
    }

    /// Set the output.
    pub fn output<U>(self, output: U) -> TransactionBuilder<W, U> {
        self.swap_output(output).0
    }

    /// Get versioned message with the given blockhash.
    pub fn message_with_blockhash(&self, latest_hash: Hash) -> crate::Result<VersionedMessage> {
        let payer = self.cfg.try_payer()?;
        let ix = self
            .get_instruction()
            .ok_or(crate::Error::MissingInstruction)?;
        let message = v0::Message::try_compile(&payer, &[ix], &[], latest_hash)?;
        Ok(VersionedMessage::V0(message))
    }

    /// Get signed transaction with the given blockhash.
    pub fn signed_transaction_with_blockhash(
        &self,
        latest_hash: Hash,
    ) -> crate::Result<VersionedTransaction> {
        let message = self.message_with_blockhash(latest_hash)?;
        self.cfg.wallet().sign(message)
    }

    /// Get signed transaction, fetching the latest blockhash with the given client.
    pub async fn signed_transaction_with_client(
        &self,
        client: &RpcClient,
    ) -> crate::Result<VersionedTransaction> {
        let latest_hash = client.get_latest_blockhash().await.map_err(Box::new)?;
        self.signed_transaction_with_blockhash(latest_hash)
    }

    /// Get signed transaction.
    pub async fn signed_transaction(&self) -> crate::Result<VersionedTransaction> {
        self.signed_transaction_with_client(&self.cfg.rpc()).await
    }

    /// Sign and send the transaction with the given client and options.
    ///
    /// The blockhash is fetched right before the wallet is asked to sign.
    pub async fn send_with_client(
        &self,
        client: &RpcClient,
        config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature> {
        // Fail on a disconnected wallet before touching the network.
        let payer = self.cfg.try_payer()?;
        let latest_hash = client.get_latest_blockhash().await.map_err(Box::new)?;
        let message = self.message_with_blockhash(latest_hash)?;
        tracing::debug!(%payer, %latest_hash, program = %self.program_id, "submitting transaction");
        self.cfg
            .wallet()
            .sign_and_send(client, message, config)
            .await
    }

    /// Sign and send the transaction with options.
    pub async fn send_with_options(
        &self,
        config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature> {
        self.send_with_client(&self.cfg.rpc(), config).await
    }

    /// Build and send the transaction with default options.
    pub async fn send(self) -> crate::Result<Signature> {
        self.send_with_options(Default::default()).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use solana_client::rpc_request::RpcRequest;
    use solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair, signer::Signer};

    use super::*;
    use crate::{
        cluster::Cluster,
        signer::local_signer,
        wallet::{SignerWallet, UnavailableWallet, WalletKind},
    };

    fn config(wallet: WalletKind) -> Config<WalletKind> {
        Config::new(Cluster::Localnet, wallet, CommitmentConfig::confirmed())
    }

    fn builder(wallet: WalletKind) -> TransactionBuilder<WalletKind> {
        let program_id = Pubkey::new_unique();
        TransactionBuilder::new(program_id, &config(wallet)).instruction(Instruction {
            program_id,
            accounts: vec![AccountMeta::new(Pubkey::new_unique(), false)],
            data: vec![1, 2, 3],
        })
    }

    #[test]
    fn fee_payer_is_wallet_account() {
        let keypair = Keypair::new();
        let payer = keypair.pubkey();
        let wallet = SignerWallet::new_connected(local_signer(keypair)).unwrap();
        let tx = builder(wallet.into())
            .signed_transaction_with_blockhash(Hash::new_unique())
            .unwrap();
        let keys = tx.message.static_account_keys();
        assert_eq!(keys[0], payer);
        assert_eq!(tx.message.instructions().len(), 1);
        assert_eq!(tx.message.instructions()[0].data, vec![1, 2, 3]);
    }

    #[test]
    fn requires_connected_wallet() {
        let wallet = SignerWallet::new(local_signer(Keypair::new()));
        let err = builder(wallet.into())
            .message_with_blockhash(Hash::new_unique())
            .unwrap_err();
        assert!(matches!(err, crate::Error::WalletNotConnected));

        let err = builder(UnavailableWallet.into())
            .message_with_blockhash(Hash::new_unique())
            .unwrap_err();
        assert!(matches!(err, crate::Error::WalletUnavailable));
    }

    #[test]
    fn requires_instruction() {
        let wallet = SignerWallet::new_connected(local_signer(Keypair::new())).unwrap();
        let builder = TransactionBuilder::new(Pubkey::new_unique(), &config(wallet.into()));
        assert!(matches!(
            builder.message_with_blockhash(Hash::new_unique()),
            Err(crate::Error::MissingInstruction)
        ));
    }

    #[test]
    fn output_can_be_swapped() {
        let wallet = SignerWallet::new_connected(local_signer(Keypair::new())).unwrap();
        let (builder, previous) = builder(wallet.into()).output(7u64).swap_output("id");
        assert_eq!(previous, 7);
        assert_eq!(*builder.get_output(), "id");
    }

    #[test]
    fn debug_shows_payer_and_instruction() {
        let keypair = Keypair::new();
        let payer = keypair.pubkey();
        let wallet = SignerWallet::new_connected(local_signer(keypair)).unwrap();
        let debug = format!("{:?}", builder(wallet.into()).output(5u64));
        assert!(debug.contains(&payer.to_string()));
        assert!(debug.contains("output: 5"));
        assert!(debug.contains("[1, 2, 3]"));
    }

    #[tokio::test]
    async fn blockhash_is_fetched_when_signing() {
        let hash = Hash::new_unique();
        let mut mocks = HashMap::new();
        mocks.insert(
            RpcRequest::GetLatestBlockhash,
            json!({
                "context": { "slot": 1 },
                "value": { "blockhash": hash.to_string(), "lastValidBlockHeight": 100 },
            }),
        );
        let client = RpcClient::new_mock_with_mocks("succeeds".to_string(), mocks);

        let wallet = SignerWallet::new_connected(local_signer(Keypair::new())).unwrap();
        let tx = builder(wallet.into())
            .signed_transaction_with_client(&client)
            .await
            .unwrap();
        assert_eq!(*tx.message.recent_blockhash(), hash);
    }
}
