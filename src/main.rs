use clap::Parser;
use paygate::report::{write_order, write_payments};
use paygate::{ClientConfig, Currency, GatewayClient, OrderRequest, Result};
use std::io::{self, Write};
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Create a payment order, then list existing payments.
///
/// Credentials come from RAZORPAY_API_KEY_ID and RAZORPAY_API_KEY_SECRET.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Order amount in minor currency units (e.g. paise)
    #[arg(long, default_value_t = 1000)]
    amount: u64,

    /// Three-letter currency code
    #[arg(long, default_value = "INR")]
    currency: Currency,

    /// Receipt reference attached to the order
    #[arg(long, default_value = "receipt #121")]
    receipt: String,

    /// Override the gateway API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Total request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let client = GatewayClient::new(config)?;
    let mut stdout = io::stdout().lock();

    let request = OrderRequest::new(cli.amount, cli.currency, cli.receipt);
    let order = client.create_order(&request).await?;
    write_order(&mut stdout, &order)?;

    let payments = client.fetch_payments().await?;
    write_payments(&mut stdout, &payments)?;

    stdout.flush()?;
    Ok(())
}
