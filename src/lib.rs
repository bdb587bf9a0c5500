//! # paygate - minimal payment-gateway API client
//!
//! Authenticates with an API key pair, creates payment orders and lists
//! existing payments over the gateway's REST API.
//!
//! ```no_run
//! use paygate::{ClientConfig, Currency, GatewayClient, OrderRequest};
//!
//! # async fn run() -> paygate::Result<()> {
//! let client = GatewayClient::new(ClientConfig::from_env())?;
//! let order = client
//!     .create_order(&OrderRequest::new(1000, Currency::inr(), "receipt #121"))
//!     .await?;
//! let payments = client.fetch_payments().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod payments;
pub mod report;
pub mod types;

// Re-exports for convenience
pub use client::GatewayClient;
pub use config::{ClientConfig, Credentials};
pub use error::{PaygateError, Result};
pub use types::*;

/// Current version of the paygate library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
