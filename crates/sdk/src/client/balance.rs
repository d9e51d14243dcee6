use rust_decimal::Decimal;
use solana_client::{
    nonblocking::rpc_client::RpcClient, rpc_config::RpcAccountInfoConfig,
    rpc_request::TokenAccountsFilter,
};
use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::{
    accounts::read_token_amount, builders::FusionProgram,
    client::accounts::get_token_accounts_by_owner_with_context, constants::LAMPORT_DECIMALS,
    utils::amount_to_decimal,
};

/// Token balance of an owner for one mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBalance {
    /// The token account read, `None` if the owner has none.
    pub account: Option<Pubkey>,
    /// Amount in minor units.
    pub amount: u64,
}

/// Native and token balances of an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balances {
    /// Owner.
    pub owner: Pubkey,
    /// Native balance in lamports.
    pub lamports: u64,
    /// Native balance in SOL.
    pub sol: Decimal,
    /// Token balance.
    pub token: TokenBalance,
    /// Token balance in token units.
    pub token_amount: Decimal,
}

/// Get the native balance in lamports.
pub async fn native_balance(client: &RpcClient, owner: &Pubkey) -> crate::Result<u64> {
    Ok(client.get_balance(owner).await?)
}

/// Get the balance of the configured mint held by `owner`.
///
/// An owner without token accounts has a zero balance. When several token
/// accounts hold the mint, the associated token account is preferred.
pub async fn token_balance(
    client: &RpcClient,
    program: &FusionProgram,
    owner: &Pubkey,
) -> crate::Result<TokenBalance> {
    let accounts = get_token_accounts_by_owner_with_context(
        client,
        owner,
        TokenAccountsFilter::Mint(program.mint.0),
        RpcAccountInfoConfig::default(),
    )
    .await?
    .into_value();

    let Some((address, account)) = select_token_account(program, owner, accounts)? else {
        return Ok(TokenBalance {
            account: None,
            amount: 0,
        });
    };

    Ok(TokenBalance {
        account: Some(address),
        amount: read_token_amount(&account.data)?,
    })
}

fn select_token_account(
    program: &FusionProgram,
    owner: &Pubkey,
    mut accounts: Vec<(Pubkey, Account)>,
) -> crate::Result<Option<(Pubkey, Account)>> {
    if accounts.len() <= 1 {
        return Ok(accounts.pop());
    }
    let ata = program.find_associated_token_address(owner)?;
    match accounts.iter().position(|(address, _)| *address == ata) {
        Some(idx) => Ok(Some(accounts.swap_remove(idx))),
        None => {
            tracing::warn!(
                %owner,
                count = accounts.len(),
                "several token accounts and none is the associated one, using the first"
            );
            Ok(Some(accounts.swap_remove(0)))
        }
    }
}

/// Get native and token balances of `owner`.
pub async fn balances(
    client: &RpcClient,
    program: &FusionProgram,
    owner: &Pubkey,
) -> crate::Result<Balances> {
    let lamports = native_balance(client, owner).await?;
    let token = token_balance(client, program, owner).await?;
    Ok(Balances {
        owner: *owner,
        lamports,
        sol: amount_to_decimal(lamports, LAMPORT_DECIMALS)?,
        token,
        token_amount: amount_to_decimal(token.amount, program.mint_decimals)?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use base64::{engine::general_purpose::STANDARD, Engine};
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use solana_client::rpc_request::RpcRequest;

    use super::*;
    use crate::constants::TOKEN_PROGRAM_ID;

    fn token_account(program: &FusionProgram, owner: &Pubkey, amount: u64) -> Value {
        let mut data = vec![0u8; 165];
        data[..32].copy_from_slice(program.mint.as_ref());
        data[32..64].copy_from_slice(owner.as_ref());
        data[64..72].copy_from_slice(&amount.to_le_bytes());
        json!({
            "data": [STANDARD.encode(&data), "base64"],
            "executable": false,
            "lamports": 2_039_280,
            "owner": TOKEN_PROGRAM_ID.to_string(),
            "rentEpoch": 0,
            "space": data.len(),
        })
    }

    fn mock(token_accounts: Vec<(Pubkey, Value)>) -> RpcClient {
        let value = token_accounts
            .into_iter()
            .map(|(pubkey, account)| json!({ "pubkey": pubkey.to_string(), "account": account }))
            .collect::<Vec<_>>();
        let mut mocks = HashMap::new();
        mocks.insert(
            RpcRequest::GetTokenAccountsByOwner,
            json!({ "context": { "slot": 1 }, "value": value }),
        );
        mocks.insert(
            RpcRequest::GetBalance,
            json!({ "context": { "slot": 1 }, "value": 1_500_000_000u64 }),
        );
        RpcClient::new_mock_with_mocks("succeeds".to_string(), mocks)
    }

    #[tokio::test]
    async fn no_token_account_is_zero() {
        let program = FusionProgram::default();
        let owner = Pubkey::new_unique();
        let balance = token_balance(&mock(vec![]), &program, &owner).await.unwrap();
        assert_eq!(
            balance,
            TokenBalance {
                account: None,
                amount: 0
            }
        );
    }

    #[tokio::test]
    async fn single_token_account() {
        let program = FusionProgram::default();
        let owner = Pubkey::new_unique();
        let address = Pubkey::new_unique();
        let client = mock(vec![(address, token_account(&program, &owner, 42_000_000))]);
        let balances = balances(&client, &program, &owner).await.unwrap();
        assert_eq!(balances.lamports, 1_500_000_000);
        assert_eq!(balances.sol, dec!(1.5));
        assert_eq!(balances.token.account, Some(address));
        assert_eq!(balances.token.amount, 42_000_000);
        assert_eq!(balances.token_amount, dec!(42));
    }

    #[tokio::test]
    async fn prefer_associated_token_account() {
        let program = FusionProgram::default();
        let owner = Pubkey::new_unique();
        let ata = program.find_associated_token_address(&owner).unwrap();
        let client = mock(vec![
            (Pubkey::new_unique(), token_account(&program, &owner, 1)),
            (ata, token_account(&program, &owner, 2)),
        ]);
        let balance = token_balance(&client, &program, &owner).await.unwrap();
        assert_eq!(balance.account, Some(ata));
        assert_eq!(balance.amount, 2);
    }

    #[tokio::test]
    async fn fall_back_to_first_token_account() {
        let program = FusionProgram::default();
        let owner = Pubkey::new_unique();
        let first = Pubkey::new_unique();
        let client = mock(vec![
            (first, token_account(&program, &owner, 5)),
            (Pubkey::new_unique(), token_account(&program, &owner, 6)),
        ]);
        let balance = token_balance(&client, &program, &owner).await.unwrap();
        assert_eq!(balance.account, Some(first));
        assert_eq!(balance.amount, 5);
    }
}
