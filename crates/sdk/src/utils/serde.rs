use std::{fmt, ops::Deref, str::FromStr};

use solana_sdk::pubkey::Pubkey;

/// A wrapper for [`Pubkey`], allowing it to be serialized to and deserialized from base58 string.
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringPubkey(#[cfg_attr(serde, serde(with = "pubkey"))] pub Pubkey);

impl From<Pubkey> for StringPubkey {
    fn from(value: Pubkey) -> Self {
        Self(value)
    }
}

impl From<StringPubkey> for Pubkey {
    fn from(value: StringPubkey) -> Self {
        value.0
    }
}

impl Deref for StringPubkey {
    type Target = Pubkey;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for StringPubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StringPubkey {
    type Err = <Pubkey as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Serialize [`Pubkey`](solana_sdk::pubkey::Pubkey) as string.
#[cfg(serde)]
pub mod pubkey {
    use std::borrow::Cow;

    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;

    /// Serialize as string.
    pub fn serialize<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&pubkey.to_string())
    }

    /// Deserialize from str.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pubkey: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
        pubkey
            .parse::<Pubkey>()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}
