//! Human-readable output for the order and payment sections

use crate::types::{Order, Payment};
use std::io::{self, Write};

/// Write the "Orders" section
pub fn write_order<W: Write>(out: &mut W, order: &Order) -> io::Result<()> {
    writeln!(out, "// Orders")?;
    writeln!(out, "order_id: {}", order.id)
}

/// Write the "Payments" section, one numbered line per payment
pub fn write_payments<W: Write>(out: &mut W, payments: &[Payment]) -> io::Result<()> {
    writeln!(out, "// Payments")?;
    for (index, payment) in payments.iter().enumerate() {
        writeln!(
            out,
            "{}. payment_id : {} \t amount : {}",
            index + 1,
            payment.id,
            payment.amount
        )?;
    }
    Ok(())
}
