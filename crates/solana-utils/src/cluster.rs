use std::{fmt, str::FromStr};

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use url::Url;

const MAINNET_URL: &str = "https://api.mainnet-beta.solana.com";
const DEVNET_URL: &str = "https://api.devnet.solana.com";
const TESTNET_URL: &str = "https://api.testnet.solana.com";
const LOCALNET_URL: &str = "http://127.0.0.1:8899";

/// Cluster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cluster {
    /// Mainnet Beta.
    Mainnet,
    /// Devnet.
    #[default]
    Devnet,
    /// Testnet.
    Testnet,
    /// Local validator.
    Localnet,
    /// Custom RPC endpoint.
    Custom(Url),
}

impl Cluster {
    /// Get the RPC url.
    pub fn url(&self) -> &str {
        match self {
            Self::Mainnet => MAINNET_URL,
            Self::Devnet => DEVNET_URL,
            Self::Testnet => TESTNET_URL,
            Self::Localnet => LOCALNET_URL,
            Self::Custom(url) => url.as_str(),
        }
    }

    /// Create a Solana RPC Client for this cluster.
    pub fn rpc(&self, commitment: CommitmentConfig) -> RpcClient {
        RpcClient::new_with_commitment(self.url().to_string(), commitment)
    }
}

impl FromStr for Cluster {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cluster = match s.to_lowercase().as_str() {
            "m" | "mainnet" | "mainnet-beta" => Self::Mainnet,
            "d" | "devnet" => Self::Devnet,
            "t" | "testnet" => Self::Testnet,
            "l" | "localnet" | "localhost" => Self::Localnet,
            _ => {
                let url = Url::parse(s)?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(crate::Error::ParseCluster("only http(s) endpoints are supported"));
                }
                Self::Custom(url)
            }
        };
        Ok(cluster)
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Devnet => write!(f, "devnet"),
            Self::Testnet => write!(f, "testnet"),
            Self::Localnet => write!(f, "localnet"),
            Self::Custom(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(serde)]
impl serde::Serialize for Cluster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(serde)]
impl<'de> serde::Deserialize<'de> for Cluster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
