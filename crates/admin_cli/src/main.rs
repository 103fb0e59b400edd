use std::{error::Error, fs, path::Path};

use api_types::report::SalesReport;
use clap::{Parser, Subcommand};
use engine::{Ledger, Record, TransactionCandidate, grand_total};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "sales_admin")]
#[command(about = "Offline utilities over the sales transaction store")]
struct Cli {
    /// Transaction store path (also read from `SALES_FILE`).
    #[arg(long, env = "SALES_FILE", default_value = engine::DEFAULT_STORE_PATH)]
    data_file: String,

    /// Log level written to stderr (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the grand total of all sales to a JSON file.
    Report {
        #[arg(long, default_value = "data/results.json")]
        output: String,
    },
    /// Print the total of every product.
    Totals,
    /// Append a sale to the store.
    Add { product_id: String, amount: f64 },
}

fn build_report(records: &[Record]) -> SalesReport {
    for (idx, record) in records.iter().enumerate() {
        if record.parts().is_none() {
            tracing::warn!("skipping record #{idx}: missing productId or amount");
        }
    }

    SalesReport {
        total_sales: grand_total(records),
    }
}

fn write_report(path: &Path, report: &SalesReport) -> Result<String, Box<dyn Error + Send + Sync>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, &json)?;
    Ok(json)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let ledger = Ledger::open(&cli.data_file);

    match cli.command {
        Command::Report { output } => {
            let report = build_report(&ledger.records());
            let json = write_report(Path::new(&output), &report)?;
            println!("total sales written to {output}");
            println!("{json}");
        }
        Command::Totals => {
            for (product_id, total) in ledger.totals() {
                println!("{product_id}\t{total}");
            }
        }
        Command::Add { product_id, amount } => {
            let tx = ledger
                .add(&TransactionCandidate::new(product_id, amount))
                .await?;
            println!("added {} ({})", tx.product_id, tx.amount);
        }
    }

    Ok(())
}
