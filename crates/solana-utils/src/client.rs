use std::time::Duration;

use solana_client::{
    client_error::ClientError as SolanaClientError, nonblocking::rpc_client::RpcClient,
    rpc_client::SerializableTransaction, rpc_config::RpcSendTransactionConfig,
    rpc_request::RpcError,
};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use tokio::time::sleep;

const STATUS_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub(crate) trait SendAndConfirm {
    async fn send_and_confirm_transaction_with_config(
        &self,
        transaction: &impl SerializableTransaction,
        config: RpcSendTransactionConfig,
    ) -> std::result::Result<Signature, SolanaClientError>;
}

impl SendAndConfirm for RpcClient {
    async fn send_and_confirm_transaction_with_config(
        &self,
        transaction: &impl SerializableTransaction,
        config: RpcSendTransactionConfig,
    ) -> std::result::Result<Signature, SolanaClientError> {
        let signature = self
            .send_transaction_with_config(transaction, config)
            .await?;
        tracing::debug!(%signature, "sent, waiting for confirmation");

        let recent_blockhash = *transaction.get_recent_blockhash();

        loop {
            match self.get_signature_status(&signature).await? {
                Some(Ok(_)) => return Ok(signature),
                Some(Err(err)) => return Err(err.into()),
                None => {
                    // Once the blockhash expires the transaction can no longer land.
                    if !self
                        .is_blockhash_valid(&recent_blockhash, CommitmentConfig::processed())
                        .await?
                    {
                        break;
                    }
                    sleep(STATUS_POLL_INTERVAL).await;
                }
            }
        }

        tracing::warn!(%signature, %recent_blockhash, "blockhash expired before confirmation");
        Err(RpcError::ForUser(
            "unable to confirm transaction: the recent blockhash expired before it was processed. \
             Rebuild the transaction with a fresh blockhash and submit again"
                .to_string(),
        )
        .into())
    }
}
