//! Order creation

use crate::client::GatewayClient;
use crate::types::{Order, OrderRequest};
use crate::Result;
use tracing::info;

/// Orders endpoint, relative to the base URL
pub const ORDERS_PATH: &str = "/orders";

impl GatewayClient {
    /// Create an order.
    ///
    /// The request is validated locally first and then sent exactly once.
    /// A status >= 300 yields [`crate::PaygateError::Api`] with the raw body;
    /// connection and decode failures yield [`crate::PaygateError::Transport`].
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Order> {
        request.validate()?;

        let order: Order = self.post_json(ORDERS_PATH, request).await?;
        info!(order_id = %order.id, amount = request.amount, currency = %request.currency, "order created");
        Ok(order)
    }
}
