use crate::commands::common::Context;
use crate::{print_error, print_info, print_success, TxCommands};
use colored::*;
use sente_client::{wait_for_transaction, TxRecord, TxStatus, WaitOptions};
use sente_core::format_micro_units;
use std::time::Duration;

pub async fn handle(action: TxCommands, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TxCommands::Status { txid } => query_status(ctx, &txid).await?,
        TxCommands::Wait {
            txid,
            interval,
            max_attempts,
        } => wait(ctx, &txid, interval, max_attempts).await?,
    }
    Ok(())
}

fn status_label(status: &TxStatus) -> ColoredString {
    let text = status.to_string();
    match status {
        TxStatus::Success => text.green().bold(),
        TxStatus::Pending => text.yellow(),
        _ => text.red().bold(),
    }
}

fn print_record(record: &TxRecord) {
    println!("{}", "Transaction".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("  ID:           {}", record.tx_id);
    println!("  Status:       {}", status_label(&record.tx_status));
    println!("  Sender:       {}", record.sender_address);
    match record.block_height {
        Some(h) => println!("  Block Height: {}", h),
        None => println!("  Block Height: {}", "unconfirmed".dimmed()),
    }
    println!("  Fee:          {} STX", format_micro_units(record.fee_rate));
    if let Some(result) = &record.tx_result {
        println!("  Result:       {}", result.repr);
    }
}

async fn query_status(ctx: &Context, txid: &str) -> Result<(), Box<dyn std::error::Error>> {
    let record = ctx.pool.client().get_transaction(txid).await?;
    print_record(&record);
    Ok(())
}

async fn wait(
    ctx: &Context,
    txid: &str,
    interval: Option<u64>,
    max_attempts: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = WaitOptions {
        interval: Duration::from_secs(interval.unwrap_or(ctx.config.poll_interval_secs).max(1)),
        max_attempts: max_attempts.unwrap_or(ctx.config.max_poll_attempts).max(1),
    };
    print_info(&format!(
        "Waiting for {} (every {}s, up to {} polls)...",
        txid,
        options.interval.as_secs(),
        options.max_attempts
    ));

    let record = wait_for_transaction(ctx.pool.client(), txid, options).await?;
    print_record(&record);

    if record.tx_status.is_success() {
        print_success("Transaction confirmed.");
        Ok(())
    } else {
        print_error("Transaction did not succeed.");
        Err(format!("transaction ended as {}", record.tx_status).into())
    }
}
