// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SENTE CLI - Swap & Liquidity Front-End for the Sente Pool Contract
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "sente")]
#[command(about = "Sente DEX - swaps and liquidity on Stacks", long_about = None)]
#[command(version)]
struct Cli {
    /// Stacks API URL (reads SENTE_API_URL; defaults to the configured network's API)
    #[arg(short, long, env = "SENTE_API_URL")]
    api: Option<String>,

    /// Config directory (default: ~/.sente)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Address your wallet signs with (reads SENTE_SENDER)
    #[arg(short, long, env = "SENTE_SENDER")]
    sender: Option<String>,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show reserves and price for a token pair
    Pool {
        /// First token (symbol from config or ADDRESS.name)
        token0: String,

        /// Second token
        token1: String,
    },

    /// Quote an exact-input swap
    Quote {
        /// Token to sell
        token_in: String,

        /// Token to buy
        token_out: String,

        /// Amount to sell (decimal, e.g. 1.5)
        amount: String,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an LP position
    Position {
        token0: String,

        token1: String,

        /// LP holder (default: the sender)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show STX and configured token balances
    Balance {
        /// Address (default: the sender)
        address: Option<String>,
    },

    /// Prepare a swap for your wallet to sign
    Swap {
        token_in: String,

        token_out: String,

        /// Amount to sell (decimal)
        amount: String,

        /// Slippage tolerance in percent (default from config)
        #[arg(long)]
        slippage: Option<f64>,

        /// Write the contract-call request to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Prepare a liquidity deposit for your wallet to sign
    AddLiquidity {
        token0: String,

        token1: String,

        /// Amount of token0 (decimal)
        amount0: String,

        /// Amount of token1 (decimal)
        amount1: String,

        /// Slippage tolerance in percent (default from config)
        #[arg(long)]
        slippage: Option<f64>,

        /// Write the contract-call request to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Prepare a liquidity withdrawal for your wallet to sign
    RemoveLiquidity {
        token0: String,

        token1: String,

        /// LP shares to burn (decimal)
        shares: String,

        /// Slippage tolerance in percent (default from config)
        #[arg(long)]
        slippage: Option<f64>,

        /// Write the contract-call request to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Transaction tracking
    Tx {
        #[command(subcommand)]
        action: TxCommands,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum TxCommands {
    /// Query transaction status once
    Status {
        /// Transaction id (0x-prefixed or bare hex)
        txid: String,
    },

    /// Poll until the transaction settles
    Wait {
        txid: String,

        /// Seconds between polls (default from config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Give up after this many polls (default from config)
        #[arg(short, long)]
        max_attempts: Option<u32>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a starter config file
    Init {
        /// mainnet, testnet or devnet
        #[arg(short, long, default_value = "testnet")]
        network: String,

        /// Pool contract (ADDRESS.name)
        #[arg(short, long)]
        contract: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if !json_on_stdout(&cli.command) {
        print_banner();
    }

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = cli.config_dir.unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".sente")
    });
    std::fs::create_dir_all(&config_dir)?;

    if let Commands::Config { action } = cli.command {
        return commands::config::handle(action, &config_dir);
    }

    let ctx = commands::common::load_context(
        &config_dir,
        cli.api.as_deref(),
        cli.sender.as_deref(),
    )?;

    match cli.command {
        Commands::Tx { action } => commands::tx::handle(action, &ctx).await?,
        Commands::Config { .. } => {}
        other => commands::dex::handle(other, &ctx).await?,
    }

    Ok(())
}

/// Commands whose stdout is a JSON document and nothing else.
fn json_on_stdout(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Quote { json: true, .. }
            | Commands::Swap { output: None, .. }
            | Commands::AddLiquidity { output: None, .. }
            | Commands::RemoveLiquidity { output: None, .. }
    )
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn print_banner() {
    println!(
        "{}",
        "╔═══════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║          SENTE DEX - CLI                      ║"
            .cyan()
            .bold()
    );
    println!(
        "{}",
        "║     Constant-Product Pools on Stacks          ║".cyan()
    );
    println!(
        "{}",
        "╚═══════════════════════════════════════════════╝".cyan()
    );
    println!();
}

fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

fn print_info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

/// Like [`print_info`] but on stderr, for flows that keep stdout for JSON.
fn print_note(msg: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), msg);
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
