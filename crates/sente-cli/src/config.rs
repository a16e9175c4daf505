//! `~/.sente/config.toml`
//!
//! ```toml
//! network = "testnet"
//! contract = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.sente-dex"
//! slippage_percent = 0.5
//! poll_interval_secs = 2
//!
//! [tokens]
//! TKA = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.token-a"
//! ```

use sente_client::{ContractPrincipal, Network, StandardPrincipal};
use sente_core::{AmmError, SlippageTolerance, DEFAULT_SLIPPAGE_BPS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

const DEVNET_DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

fn default_slippage_percent() -> f64 {
    DEFAULT_SLIPPAGE_BPS as f64 / 100.0
}

fn default_poll_interval() -> u64 {
    2
}

fn default_max_polls() -> u32 {
    150
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenteConfig {
    #[serde(default)]
    pub network: Network,
    /// Overrides the network's default API URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Pool contract, `ADDRESS.name`
    pub contract: String,
    /// Address the wallet signs with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default = "default_slippage_percent")]
    pub slippage_percent: f64,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_max_polls")]
    pub max_poll_attempts: u32,
    /// Symbol → SIP-010 token contract
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
}

impl Default for SenteConfig {
    fn default() -> Self {
        let mut tokens = BTreeMap::new();
        tokens.insert("TKA".to_string(), format!("{}.token-a", DEVNET_DEPLOYER));
        tokens.insert("TKB".to_string(), format!("{}.token-b", DEVNET_DEPLOYER));
        Self {
            network: Network::Testnet,
            api_url: None,
            contract: format!("{}.sente-dex", DEVNET_DEPLOYER),
            sender: None,
            slippage_percent: default_slippage_percent(),
            poll_interval_secs: default_poll_interval(),
            max_poll_attempts: default_max_polls(),
            tokens,
        }
    }
}

impl SenteConfig {
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: SenteConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Config from `config_dir`, or the defaults when no file exists yet.
    pub fn load_or_default(config_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path_in(config_dir);
        if !path.exists() {
            log::warn!("{} not found, using defaults (run `sente config init`)", path.display());
            return Ok(Self::default());
        }
        let config = Self::load_from_file(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        let contract = self.contract_principal()?;
        if !self.network.accepts(&contract.issuer) {
            return Err(format!(
                "Contract {} is not a {} address",
                self.contract, self.network
            ));
        }

        if let Some(sender) = &self.sender {
            let sender: StandardPrincipal = sender
                .parse()
                .map_err(|e| format!("Invalid sender '{}': {}", sender, e))?;
            if !self.network.accepts(&sender) {
                return Err(format!("Sender {} is not a {} address", sender, self.network));
            }
        }

        self.slippage().map_err(|e| e.to_string())?;

        if self.poll_interval_secs == 0 {
            return Err("poll_interval_secs must be at least 1".to_string());
        }
        if self.max_poll_attempts == 0 {
            return Err("max_poll_attempts must be at least 1".to_string());
        }

        for (symbol, token) in &self.tokens {
            token
                .parse::<ContractPrincipal>()
                .map_err(|e| format!("Token {}: {}", symbol, e))?;
        }

        Ok(())
    }

    pub fn contract_principal(&self) -> Result<ContractPrincipal, String> {
        self.contract
            .parse()
            .map_err(|e| format!("Invalid contract '{}': {}", self.contract, e))
    }

    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| self.network.default_api_url().to_string())
    }

    pub fn slippage(&self) -> Result<SlippageTolerance, AmmError> {
        SlippageTolerance::from_percent(self.slippage_percent)
    }

    /// A configured symbol (case-insensitive) or a literal `ADDRESS.name`.
    pub fn resolve_token(&self, token: &str) -> Result<ContractPrincipal, String> {
        if token.contains('.') {
            return token
                .parse()
                .map_err(|e| format!("Invalid token '{}': {}", token, e));
        }
        let (_, contract) = self
            .tokens
            .iter()
            .find(|(symbol, _)| symbol.eq_ignore_ascii_case(token))
            .ok_or_else(|| format!("Unknown token symbol '{}'", token))?;
        contract
            .parse()
            .map_err(|e| format!("Invalid token '{}': {}", contract, e))
    }

    /// Symbol for a token contract, falling back to the contract name.
    pub fn symbol_for(&self, token: &ContractPrincipal) -> String {
        let id = token.to_string();
        self.tokens
            .iter()
            .find(|(_, contract)| **contract == id)
            .map(|(symbol, _)| symbol.clone())
            .unwrap_or_else(|| token.name.clone())
    }
}

pub fn slippage_label(tolerance: SlippageTolerance) -> String {
    if tolerance.ppm() % 100 == 0 {
        format!("{:.2}%", tolerance.percent())
    } else {
        format!("{:.4}%", tolerance.percent())
    }
}
