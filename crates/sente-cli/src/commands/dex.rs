use crate::commands::common::{emit_call, parse_amount, Context};
use crate::config::slippage_label;
use crate::{print_note, Commands};
use colored::Colorize;
use sente_client::{ContractPrincipal, PrincipalData};
use sente_core::{format_micro_units, spot_price, Quote, PRICE_PRECISION};
use serde::Serialize;
use std::path::Path;

/// Impact above this (bps) is printed as a warning
const HIGH_IMPACT_BPS: u128 = 500;

/// Handle pool, quote, position, balance and the prepared write flows.
pub async fn handle(command: Commands, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Pool { token0, token1 } => pool_info(ctx, &token0, &token1).await,
        Commands::Quote {
            token_in,
            token_out,
            amount,
            json,
        } => get_quote(ctx, &token_in, &token_out, &amount, json).await,
        Commands::Position {
            token0,
            token1,
            user,
        } => get_position(ctx, &token0, &token1, user.as_deref()).await,
        Commands::Balance { address } => get_balance(ctx, address.as_deref()).await,
        Commands::Swap {
            token_in,
            token_out,
            amount,
            slippage,
            output,
        } => swap(ctx, &token_in, &token_out, &amount, slippage, output.as_deref()).await,
        Commands::AddLiquidity {
            token0,
            token1,
            amount0,
            amount1,
            slippage,
            output,
        } => {
            add_liquidity(
                ctx,
                &token0,
                &token1,
                &amount0,
                &amount1,
                slippage,
                output.as_deref(),
            )
            .await
        }
        Commands::RemoveLiquidity {
            token0,
            token1,
            shares,
            slippage,
            output,
        } => remove_liquidity(ctx, &token0, &token1, &shares, slippage, output.as_deref()).await,
        Commands::Tx { .. } | Commands::Config { .. } => {
            Err("not a pool command".into())
        }
    }
}

fn impact_label(bps: u128) -> String {
    let text = format!("{:.2}%", bps as f64 / 100.0);
    if bps > HIGH_IMPACT_BPS {
        text.red().bold().to_string()
    } else {
        text.white().to_string()
    }
}

async fn pool_info(
    ctx: &Context,
    token0: &str,
    token1: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let t0 = ctx.token(token0)?;
    let t1 = ctx.token(token1)?;
    let pool = ctx.pool.get_pool_info(&t0, &t1).await?;
    let (s0, s1) = (ctx.symbol(&t0), ctx.symbol(&t1));

    println!("{}", format!("Pool {} / {}", s0, s1).cyan().bold());
    println!("{}", "─".repeat(50));
    println!("  Contract:      {}", ctx.pool.contract().to_string().yellow());
    println!("  Reserve {:<6} {}", format!("{}:", s0), format_micro_units(pool.reserve0).green());
    println!("  Reserve {:<6} {}", format!("{}:", s1), format_micro_units(pool.reserve1).green());
    println!("  LP Supply:     {}", format_micro_units(pool.total_supply));

    match spot_price(pool.reserve0, pool.reserve1) {
        Ok(price) if !pool.is_empty() => println!(
            "  Price:         1 {} = {:.6} {}",
            s0,
            price as f64 / PRICE_PRECISION as f64,
            s1
        ),
        _ => println!("  {}", "Pool is empty".dimmed()),
    }
    Ok(())
}

#[derive(Serialize)]
struct QuoteReport<'a> {
    token_in: String,
    token_out: String,
    #[serde(flatten)]
    quote: &'a Quote,
    min_amount_out: u128,
    slippage_ppm: u128,
}

async fn get_quote(
    ctx: &Context,
    token_in: &str,
    token_out: &str,
    amount: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let t_in = ctx.token(token_in)?;
    let t_out = ctx.token(token_out)?;
    let amount_in = parse_amount(amount)?;
    let tolerance = ctx.tolerance(None)?;

    let quote = ctx.pool.quote(&t_in, &t_out, amount_in).await?;
    let min_out = quote.minimum_received(tolerance);

    if json {
        let report = QuoteReport {
            token_in: t_in.to_string(),
            token_out: t_out.to_string(),
            quote: &quote,
            min_amount_out: min_out,
            slippage_ppm: tolerance.ppm(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let (s_in, s_out) = (ctx.symbol(&t_in), ctx.symbol(&t_out));
    println!("{}", "Swap Quote".cyan().bold());
    println!("{}", "─".repeat(40));
    println!("  You Pay:         {} {}", format_micro_units(amount_in), s_in);
    println!(
        "  You Receive:     {} {}",
        format_micro_units(quote.amount_out).green(),
        s_out
    );
    println!("  Fee (0.3%):      {} {}", format_micro_units(quote.fee).yellow(), s_in);
    println!("  Price Impact:    {}", impact_label(quote.price_impact_bps));
    println!(
        "  Min Received:    {} {} ({} slippage)",
        format_micro_units(min_out),
        s_out,
        slippage_label(tolerance)
    );
    Ok(())
}

async fn get_position(
    ctx: &Context,
    token0: &str,
    token1: &str,
    user: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let t0 = ctx.token(token0)?;
    let t1 = ctx.token(token1)?;
    let user = ctx.address_or_sender(user)?;

    let (info, position) = ctx.pool.fetch_position(&user, &t0, &t1).await?;
    let (s0, s1) = (ctx.symbol(&t0), ctx.symbol(&t1));

    println!("{}", format!("LP Position {} / {}", s0, s1).cyan().bold());
    println!("{}", "─".repeat(50));
    println!("  Holder:        {}", user.to_string().yellow());
    if info.liquidity == 0 {
        println!("  {}", "No liquidity in this pool".dimmed());
        return Ok(());
    }
    println!("  LP Shares:     {}", format_micro_units(info.liquidity).green());
    println!(
        "  Pool Share:    {:.2}%",
        position.share_of_pool() * 100.0
    );
    println!("  {:<14} {}", format!("{}:", s0), format_micro_units(position.amount0));
    println!("  {:<14} {}", format!("{}:", s1), format_micro_units(position.amount1));
    println!("  Value:         {}", format_micro_units(info.value));
    println!("  Unclaimed Fees: {}", format_micro_units(info.unclaimed_fees));
    Ok(())
}

async fn get_balance(ctx: &Context, address: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let address = ctx.address_or_sender(address)?;
    let balances = ctx
        .pool
        .client()
        .get_balances(&PrincipalData::Standard(address.clone()))
        .await?;

    println!("{}", "Balances".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("  Address:  {}", address.to_string().yellow());
    println!("  STX:      {}", format_micro_units(balances.stx.balance).green());
    for (symbol, token) in &ctx.config.tokens {
        let token = match token.parse::<ContractPrincipal>() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("skipping token {}: {}", symbol, e);
                continue;
            }
        };
        println!(
            "  {:<9} {}",
            format!("{}:", symbol),
            format_micro_units(balances.token(&token))
        );
    }
    Ok(())
}

async fn swap(
    ctx: &Context,
    token_in: &str,
    token_out: &str,
    amount: &str,
    slippage: Option<f64>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let t_in = ctx.token(token_in)?;
    let t_out = ctx.token(token_out)?;
    let amount_in = parse_amount(amount)?;
    let tolerance = ctx.tolerance(slippage)?;
    let (s_in, s_out) = (ctx.symbol(&t_in), ctx.symbol(&t_out));

    print_note(&format!("Preparing swap of {} {} for {}...", amount, s_in, s_out));
    let prepared = ctx
        .pool
        .prepare_swap(&ctx.session, &t_in, &t_out, amount_in, tolerance)
        .await?;

    eprintln!("{}", "Swap".cyan().bold());
    eprintln!("{}", "─".repeat(40));
    eprintln!("  You Pay:         {} {}", format_micro_units(amount_in), s_in);
    eprintln!(
        "  Expected:        {} {}",
        format_micro_units(prepared.quote.amount_out).green(),
        s_out
    );
    eprintln!(
        "  Min Received:    {} {} ({})",
        format_micro_units(prepared.min_amount_out),
        s_out,
        slippage_label(tolerance)
    );
    eprintln!("  Price Impact:    {}", impact_label(prepared.quote.price_impact_bps));

    emit_call(&prepared.call, output)?;
    print_note("Sign and broadcast with your wallet, then run `sente tx wait <txid>`.");
    Ok(())
}

async fn add_liquidity(
    ctx: &Context,
    token0: &str,
    token1: &str,
    amount0: &str,
    amount1: &str,
    slippage: Option<f64>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let t0 = ctx.token(token0)?;
    let t1 = ctx.token(token1)?;
    let a0 = parse_amount(amount0)?;
    let a1 = parse_amount(amount1)?;
    let tolerance = ctx.tolerance(slippage)?;
    let (s0, s1) = (ctx.symbol(&t0), ctx.symbol(&t1));

    print_note(&format!(
        "Preparing deposit of {} {} + {} {}...",
        amount0, s0, amount1, s1
    ));
    let prepared = ctx
        .pool
        .prepare_add_liquidity(&ctx.session, &t0, &t1, a0, a1, tolerance)
        .await?;

    eprintln!("{}", "Add Liquidity".cyan().bold());
    eprintln!("{}", "─".repeat(40));
    eprintln!(
        "  Expected Shares: {}",
        format_micro_units(prepared.expected_shares).green()
    );
    eprintln!(
        "  Min Shares:      {} ({})",
        format_micro_units(prepared.min_liquidity),
        slippage_label(tolerance)
    );

    emit_call(&prepared.call, output)?;
    print_note("Sign and broadcast with your wallet, then run `sente tx wait <txid>`.");
    Ok(())
}

async fn remove_liquidity(
    ctx: &Context,
    token0: &str,
    token1: &str,
    shares: &str,
    slippage: Option<f64>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let t0 = ctx.token(token0)?;
    let t1 = ctx.token(token1)?;
    let shares = parse_amount(shares)?;
    let tolerance = ctx.tolerance(slippage)?;
    let (s0, s1) = (ctx.symbol(&t0), ctx.symbol(&t1));

    let prepared = ctx
        .pool
        .prepare_remove_liquidity(&ctx.session, &t0, &t1, shares, tolerance)
        .await?;

    eprintln!("{}", "Remove Liquidity".cyan().bold());
    eprintln!("{}", "─".repeat(40));
    eprintln!("  Burn Shares:     {}", format_micro_units(shares));
    eprintln!(
        "  Expected:        {} {} + {} {}",
        format_micro_units(prepared.amount0).green(),
        s0,
        format_micro_units(prepared.amount1).green(),
        s1
    );
    eprintln!(
        "  Minimum:         {} {} + {} {} ({})",
        format_micro_units(prepared.min_amount0),
        s0,
        format_micro_units(prepared.min_amount1),
        s1,
        slippage_label(tolerance)
    );

    emit_call(&prepared.call, output)?;
    print_note("Sign and broadcast with your wallet, then run `sente tx wait <txid>`.");
    Ok(())
}
