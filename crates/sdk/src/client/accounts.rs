use fusion_solana_utils::utils::WithSlot;
use serde_json::json;
use solana_account_decoder::{UiAccount, UiAccountEncoding};
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcTokenAccountsFilter},
    rpc_request::{RpcError, RpcRequest, TokenAccountsFilter},
    rpc_response::{Response, RpcKeyedAccount},
};
use solana_sdk::{account::Account, pubkey::Pubkey};

/// Get account with context.
///
/// The value inside the context will be `None` if the account does not exist.
pub async fn get_account_with_context(
    client: &RpcClient,
    address: &Pubkey,
    mut config: RpcAccountInfoConfig,
) -> crate::Result<WithSlot<Option<Account>>> {
    config.encoding = Some(config.encoding.unwrap_or(UiAccountEncoding::Base64));
    let commitment = config.commitment.unwrap_or_else(|| client.commitment());
    config.commitment = Some(commitment);
    tracing::debug!(%address, ?config, "fetching account");
    let res = client
        .send::<Response<Option<UiAccount>>>(
            RpcRequest::GetAccountInfo,
            json!([address.to_string(), config]),
        )
        .await?;
    WithSlot::from(res)
        .map(|value| {
            value
                .map(|account| decode_ui_account(account, RpcRequest::GetAccountInfo))
                .transpose()
        })
        .transpose()
}

/// Get token accounts by owner and return with the context.
pub async fn get_token_accounts_by_owner_with_context(
    client: &RpcClient,
    owner: &Pubkey,
    token_account_filter: TokenAccountsFilter,
    mut config: RpcAccountInfoConfig,
) -> crate::Result<WithSlot<Vec<(Pubkey, Account)>>> {
    let token_account_filter = match token_account_filter {
        TokenAccountsFilter::Mint(mint) => RpcTokenAccountsFilter::Mint(mint.to_string()),
        TokenAccountsFilter::ProgramId(program_id) => {
            RpcTokenAccountsFilter::ProgramId(program_id.to_string())
        }
    };

    config.encoding = Some(config.encoding.unwrap_or(UiAccountEncoding::Base64));
    if config.commitment.is_none() {
        config.commitment = Some(client.commitment());
    }

    tracing::debug!(%owner, ?token_account_filter, "fetching token accounts");
    let res = client
        .send::<Response<Vec<RpcKeyedAccount>>>(
            RpcRequest::GetTokenAccountsByOwner,
            json!([owner.to_string(), token_account_filter, config]),
        )
        .await?;

    WithSlot::from(res)
        .map(|accounts| parse_keyed_accounts(accounts, RpcRequest::GetTokenAccountsByOwner))
        .transpose()
}

fn decode_ui_account(account: UiAccount, request: RpcRequest) -> crate::Result<Account> {
    account.decode().ok_or_else(|| {
        ClientError::new_with_request(
            RpcError::ParseError("Account from rpc".to_string()).into(),
            request,
        )
        .into()
    })
}

fn parse_keyed_accounts(
    accounts: Vec<RpcKeyedAccount>,
    request: RpcRequest,
) -> crate::Result<Vec<(Pubkey, Account)>> {
    let mut pubkey_accounts: Vec<(Pubkey, Account)> = Vec::with_capacity(accounts.len());
    for RpcKeyedAccount { pubkey, account } in accounts.into_iter() {
        let pubkey = pubkey.parse().map_err(|_| {
            ClientError::new_with_request(
                RpcError::ParseError("Pubkey".to_string()).into(),
                request,
            )
        })?;
        pubkey_accounts.push((pubkey, decode_ui_account(account, request)?));
    }
    Ok(pubkey_accounts)
}
