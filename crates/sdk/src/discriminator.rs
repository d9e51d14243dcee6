use sha2::{Digest, Sha256};

/// Length of a discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Discriminator.
pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// Name of the `create_tournament` instruction.
pub const CREATE_TOURNAMENT: &str = "create_tournament";

/// Name of the `join_tournament` instruction.
pub const JOIN_TOURNAMENT: &str = "join_tournament";

/// Name of the `initialize_participant_list` instruction.
pub const INITIALIZE_PARTICIPANT_LIST: &str = "initialize_participant_list";

/// Discriminator of `create_tournament`.
pub const CREATE_TOURNAMENT_DISCRIMINATOR: Discriminator = [158, 137, 233, 231, 73, 132, 191, 68];

/// Discriminator of `join_tournament`.
pub const JOIN_TOURNAMENT_DISCRIMINATOR: Discriminator = [77, 21, 212, 206, 77, 82, 124, 31];

/// Discriminator of `initialize_participant_list`.
pub const INITIALIZE_PARTICIPANT_LIST_DISCRIMINATOR: Discriminator =
    [72, 183, 2, 183, 242, 181, 202, 178];

/// Resolve the discriminator of an instruction.
///
/// Known instructions are looked up in the registered table, others are hashed
/// with [`sighash`].
pub fn resolve(name: &str) -> Discriminator {
    match name {
        CREATE_TOURNAMENT => CREATE_TOURNAMENT_DISCRIMINATOR,
        JOIN_TOURNAMENT => JOIN_TOURNAMENT_DISCRIMINATOR,
        INITIALIZE_PARTICIPANT_LIST => INITIALIZE_PARTICIPANT_LIST_DISCRIMINATOR,
        unknown => sighash("global", unknown),
    }
}

/// Returns whether the instruction has a registered discriminator.
pub fn is_registered(name: &str) -> bool {
    matches!(
        name,
        CREATE_TOURNAMENT | JOIN_TOURNAMENT | INITIALIZE_PARTICIPANT_LIST
    )
}

/// First 8 bytes of `sha256("{namespace}:{name}")`.
pub fn sighash(namespace: &str, name: &str) -> Discriminator {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let hash = hasher.finalize();
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    discriminator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_table_matches_hash() {
        for name in [CREATE_TOURNAMENT, JOIN_TOURNAMENT, INITIALIZE_PARTICIPANT_LIST] {
            assert!(is_registered(name));
            assert_eq!(resolve(name), sighash("global", name), "{name}");
        }
    }

    #[test]
    fn unknown_names_are_hashed() {
        assert!(!is_registered("distribute_prizes"));
        assert_eq!(
            resolve("distribute_prizes"),
            sighash("global", "distribute_prizes")
        );
        assert_ne!(resolve("distribute_prizes"), resolve("cancel_tournament"));
    }

    #[test]
    fn account_namespace() {
        assert_eq!(
            sighash("account", "Tournament"),
            [175, 139, 119, 242, 115, 194, 57, 92]
        );
    }
}
