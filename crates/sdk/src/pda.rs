use solana_sdk::pubkey::Pubkey;

/// Seed for the platform account.
pub const PLATFORM_SEED: &[u8] = b"platform";

/// Seed for tournament accounts.
pub const TOURNAMENT_SEED: &[u8] = b"tournament";

/// Seed for prize vaults.
pub const PRIZE_VAULT_SEED: &[u8] = b"prize_vault";

/// Seed for team accounts.
pub const TEAM_SEED: &[u8] = b"team";

/// Seed for player stats accounts.
pub const PLAYER_STATS_SEED: &[u8] = b"player_stats";

/// Seed for participant lists.
pub const PARTICIPANT_LIST_SEED: &[u8] = b"participant_list";

/// Find a program derived address, trying bumps from 255 down to 0.
///
/// Returns [`Error::Derivation`](crate::Error::Derivation) if every candidate
/// lies on the curve.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> crate::Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or_else(|| {
        crate::Error::Derivation(
            seeds
                .iter()
                .map(|seed| String::from_utf8_lossy(seed).into_owned())
                .collect::<Vec<_>>()
                .join("/"),
        )
    })
}

/// Find the PDA for the platform account.
pub fn find_platform_address(program_id: &Pubkey) -> crate::Result<(Pubkey, u8)> {
    find_program_address(&[PLATFORM_SEED], program_id)
}

/// Find the PDA for a tournament account.
pub fn find_tournament_address(
    tournament_id: u64,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(&[TOURNAMENT_SEED, &tournament_id.to_le_bytes()], program_id)
}

/// Find the PDA for the prize vault of a tournament.
pub fn find_prize_vault_address(
    tournament_id: u64,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(&[PRIZE_VAULT_SEED, &tournament_id.to_le_bytes()], program_id)
}

/// Find the PDA for the team of a participant in a tournament.
pub fn find_team_address(
    tournament_id: u64,
    participant: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(
        &[TEAM_SEED, &tournament_id.to_le_bytes(), participant.as_ref()],
        program_id,
    )
}

/// Find the PDA for the stats of a participant.
///
/// Shared by every tournament the participant joins.
pub fn find_player_stats_address(
    participant: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(&[PLAYER_STATS_SEED, participant.as_ref()], program_id)
}

/// Find the PDA for the participant list of a tournament.
pub fn find_participant_list_address(
    tournament_id: u64,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(&[PARTICIPANT_LIST_SEED, &tournament_id.to_le_bytes()], program_id)
}

/// Find the associated token account of `owner` for `mint`.
pub fn find_associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
    associated_token_program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(
        &[owner.as_ref(), token_program_id.as_ref(), mint.as_ref()],
        associated_token_program_id,
    )
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey;

    use super::*;
    use crate::constants::{
        ASSOCIATED_TOKEN_PROGRAM_ID, DEVNET_PROGRAM_ID, DEVNET_USDC_MINT, TOKEN_PROGRAM_ID,
    };

    const OWNER: Pubkey = pubkey!("4wBqpZM9xaSheZzJSMawUKKwhdpChKbZ5eu5ky4Vigw");

    #[test]
    fn owner_fixture() {
        let bytes: Vec<u8> = (1..=32).collect();
        assert_eq!(OWNER.as_ref(), bytes.as_slice());
    }

    #[test]
    fn platform() {
        assert_eq!(
            find_platform_address(&DEVNET_PROGRAM_ID).unwrap(),
            (pubkey!("GF3j5cQWZJQ9AYoFzkoVknPYkoiQwuhfMw3U2KeS1bbA"), 255)
        );
    }

    #[test]
    fn tournament_is_stable_and_id_dependent() {
        let first = find_tournament_address(1, &DEVNET_PROGRAM_ID).unwrap();
        assert_eq!(
            first,
            (pubkey!("BMwMRe28w4ZURRC8JDyffr4MG7rPFzzQyV3C6YGEXFfh"), 254)
        );
        assert_eq!(first, find_tournament_address(1, &DEVNET_PROGRAM_ID).unwrap());

        let second = find_tournament_address(2, &DEVNET_PROGRAM_ID).unwrap();
        assert_eq!(
            second.0,
            pubkey!("GXma7ikM3mmdxDvcdqJC25Bf4daj59wpAGCTF7nvQuUx")
        );
        assert_ne!(first.0, second.0);
    }

    #[test]
    fn tournament_scoped_addresses() {
        assert_eq!(
            find_prize_vault_address(1, &DEVNET_PROGRAM_ID).unwrap().0,
            pubkey!("3GmiLnSVxbkiAtJshWnVfgi4eUu113EfrRSGhcyY3Eou")
        );
        assert_eq!(
            find_participant_list_address(1, &DEVNET_PROGRAM_ID)
                .unwrap()
                .0,
            pubkey!("A9EiSg39W3sQckorvyvVhBDdUcJweA98Ck8NXmVNbJtm")
        );
        assert_eq!(
            find_team_address(1, &OWNER, &DEVNET_PROGRAM_ID).unwrap(),
            (pubkey!("76Zreo2Yee5VnPBaPQ8UwW6BLTfqyusnPzdye39eA5Lu"), 251)
        );
    }

    #[test]
    fn participant_scoped_addresses() {
        assert_eq!(
            find_player_stats_address(&OWNER, &DEVNET_PROGRAM_ID).unwrap(),
            (pubkey!("6SkemZS8oeJzCWXCzQTcz6LFd4b6iWcGWGECK3AfFPx2"), 253)
        );
        assert_eq!(
            find_associated_token_address(
                &OWNER,
                &DEVNET_USDC_MINT,
                &TOKEN_PROGRAM_ID,
                &ASSOCIATED_TOKEN_PROGRAM_ID
            )
            .unwrap()
            .0,
            pubkey!("2XMDdLg8sfyxttZAyQAVFnkKRWS15uAWzbZUMP7mTy4E")
        );
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let (address, _) = find_tournament_address(42, &DEVNET_PROGRAM_ID).unwrap();
        assert!(!address.is_on_curve());
    }
}
