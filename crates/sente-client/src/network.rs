use crate::principal::{
    StandardPrincipal, VERSION_MAINNET_MULTISIG, VERSION_MAINNET_SINGLESIG,
    VERSION_TESTNET_MULTISIG, VERSION_TESTNET_SINGLESIG,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which Stacks network the pool contract lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    /// Local devnet node (testnet address versions)
    Devnet,
}

impl Network {
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.mainnet.hiro.so",
            Network::Testnet => "https://api.testnet.hiro.so",
            Network::Devnet => "http://localhost:3999",
        }
    }

    /// Single-sig address version for this network.
    pub fn address_version(&self) -> u8 {
        match self {
            Network::Mainnet => VERSION_MAINNET_SINGLESIG,
            Network::Testnet | Network::Devnet => VERSION_TESTNET_SINGLESIG,
        }
    }

    pub fn accepts(&self, principal: &StandardPrincipal) -> bool {
        match self {
            Network::Mainnet => matches!(
                principal.version,
                VERSION_MAINNET_SINGLESIG | VERSION_MAINNET_MULTISIG
            ),
            Network::Testnet | Network::Devnet => matches!(
                principal.version,
                VERSION_TESTNET_SINGLESIG | VERSION_TESTNET_MULTISIG
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" | "mocknet" => Ok(Network::Devnet),
            other => Err(format!(
                "Unknown network '{}' (expected mainnet, testnet or devnet)",
                other
            )),
        }
    }
}
