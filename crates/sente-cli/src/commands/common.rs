use crate::config::SenteConfig;
use crate::print_success;
use sente_client::{
    ContractCallRequest, ContractPrincipal, PoolContract, StacksClient, StandardPrincipal,
    WalletSession,
};
use sente_core::{to_micro_units, AmmError, SlippageTolerance};
use std::path::Path;

/// Everything a command needs: config, the pool binding and the wallet.
pub struct Context {
    pub config: SenteConfig,
    pub pool: PoolContract,
    pub session: WalletSession,
}

/// Shared setup for every network command. CLI flags win over the config
/// file; a sender from either connects the wallet session.
pub fn load_context(
    config_dir: &Path,
    api_override: Option<&str>,
    sender_override: Option<&str>,
) -> Result<Context, Box<dyn std::error::Error>> {
    let config = SenteConfig::load_or_default(config_dir)?;

    let api_url = api_override
        .map(str::to_string)
        .unwrap_or_else(|| config.api_url());
    log::debug!("network {} via {}", config.network, api_url);

    let client = StacksClient::new(&api_url)?;
    let pool = PoolContract::new(client, config.contract_principal()?, config.network);

    let session = WalletSession::new();
    let sender = sender_override
        .map(str::to_string)
        .or_else(|| config.sender.clone());
    if let Some(sender) = sender {
        let address = session.connect(&sender)?;
        if !config.network.accepts(&address) {
            return Err(format!("Sender {} is not a {} address", address, config.network).into());
        }
    }

    Ok(Context {
        config,
        pool,
        session,
    })
}

impl Context {
    pub fn token(&self, token: &str) -> Result<ContractPrincipal, String> {
        self.config.resolve_token(token)
    }

    pub fn symbol(&self, token: &ContractPrincipal) -> String {
        self.config.symbol_for(token)
    }

    /// `--slippage` when given, else the configured tolerance.
    pub fn tolerance(&self, percent: Option<f64>) -> Result<SlippageTolerance, AmmError> {
        match percent {
            Some(p) => SlippageTolerance::from_percent(p),
            None => self.config.slippage(),
        }
    }

    /// An explicit address, else the connected sender.
    pub fn address_or_sender(
        &self,
        address: Option<&str>,
    ) -> Result<StandardPrincipal, Box<dyn std::error::Error>> {
        match address {
            Some(a) => Ok(a.trim().parse()?),
            None => Ok(self.session.require_address()?),
        }
    }
}

pub fn parse_amount(input: &str) -> Result<u128, AmmError> {
    to_micro_units(input)
}

/// Print the call request, or write it to `output` for the wallet to pick up.
/// On stdout the JSON is the only output; summaries go to stderr.
pub fn emit_call(
    call: &ContractCallRequest,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(call)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            print_success(&format!("Contract call written to {}", path.display()));
        }
        None => println!("{}", json),
    }
    Ok(())
}
