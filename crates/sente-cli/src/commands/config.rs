use crate::config::SenteConfig;
use crate::{print_info, print_success, ConfigCommands};
use colored::Colorize;
use sente_client::Network;
use std::path::Path;

pub fn handle(action: ConfigCommands, config_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigCommands::Init {
            network,
            contract,
            force,
        } => init(config_dir, &network, contract, force),
        ConfigCommands::Show => show(config_dir),
    }
}

fn init(
    config_dir: &Path,
    network: &str,
    contract: Option<String>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = SenteConfig::path_in(config_dir);
    if path.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }

    let network: Network = network.parse()?;
    let mut config = SenteConfig {
        network,
        ..SenteConfig::default()
    };
    if let Some(contract) = contract {
        config.contract = contract;
    }
    if network == Network::Devnet {
        config.api_url = Some(network.default_api_url().to_string());
    }
    config.validate()?;

    config.save_to_file(&path)?;
    print_success(&format!("Config written to {}", path.display()));
    print_info("Add your wallet address as `sender` to enable swaps and liquidity.");
    Ok(())
}

fn show(config_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let path = SenteConfig::path_in(config_dir);
    let config = SenteConfig::load_or_default(config_dir)?;

    println!("{}", "Config".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("  File:     {}", path.display());
    println!("  API:      {}", config.api_url().yellow());
    println!();
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
