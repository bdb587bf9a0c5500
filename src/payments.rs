//! Payment listing

use crate::client::GatewayClient;
use crate::types::{Payment, PaymentCollection};
use crate::Result;
use tracing::info;

/// Payments endpoint, relative to the base URL
pub const PAYMENTS_PATH: &str = "/payments";

impl GatewayClient {
    /// Fetch the first page of payments as returned by the gateway.
    pub async fn list_payments(&self) -> Result<PaymentCollection> {
        let collection: PaymentCollection = self.get_json(PAYMENTS_PATH).await?;
        info!(count = collection.items.len(), "payments fetched");
        Ok(collection)
    }

    /// Fetch payments in server order. Only the first page is returned.
    pub async fn fetch_payments(&self) -> Result<Vec<Payment>> {
        Ok(self.list_payments().await?.items)
    }
}
