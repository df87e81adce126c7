//! Checkout Data

use jiff::civil::Date;

/// Validated checkout form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_email: String,
    /// E.164 number for WhatsApp updates.
    pub whatsapp_number: Option<String>,
    pub pickup_date: Date,
    /// Overrides any coupon code stashed on the session.
    pub coupon_code: Option<String>,
}
