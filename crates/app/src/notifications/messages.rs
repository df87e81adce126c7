//! Message bodies for order notifications.

use crate::domain::orders::{records::OrderRecord, status::OrderStatus};

/// Render an amount of minor units as rupees, e.g. `₹900.00`.
pub(crate) fn format_amount(paise: u64) -> String {
    format!("₹{}.{:02}", paise / 100, paise % 100)
}

/// Short human label for a status, used in subjects and bodies.
pub(crate) fn status_headline(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Order Received",
        OrderStatus::Confirmed => "Order Confirmed",
        OrderStatus::Processing => "Being Prepared",
        OrderStatus::ReadyForPickup => "Ready for Pickup",
        OrderStatus::OutForDelivery => "Out for Delivery",
        OrderStatus::PickedUp => "Order Completed",
        OrderStatus::Cancelled => "Order Cancelled",
    }
}

/// One template per status.
fn status_line(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "We have received your order and will confirm it shortly.",
        OrderStatus::Confirmed => {
            "Your order is confirmed and our bakers have it on the schedule."
        }
        OrderStatus::Processing => "Your order is being prepared right now.",
        OrderStatus::ReadyForPickup => "Your order is ready! Come and collect it at the store.",
        OrderStatus::OutForDelivery => "Your order is on its way to you.",
        OrderStatus::PickedUp => "Thanks for collecting your order. Enjoy!",
        OrderStatus::Cancelled => {
            "Your order has been cancelled. Contact us if you have any questions."
        }
    }
}

pub(crate) fn admin_new_order_subject(order: &OrderRecord) -> String {
    format!("New Order #{} - Pending", order.short_reference())
}

pub(crate) fn admin_new_order_message(order: &OrderRecord) -> String {
    let lines = [
        format!("New order #{}", order.short_reference()),
        format!("Customer: {}", order.customer_name),
        format!("Email: {}", order.customer_email),
        format!(
            "WhatsApp: {}",
            order.whatsapp_number.as_deref().unwrap_or("-")
        ),
        format!("Pickup date: {}", order.pickup_date),
        format!("Total: {}", format_amount(order.total_amount)),
        "Status: Pending".to_string(),
    ];

    lines.join("\n")
}

pub(crate) fn customer_status_subject(order: &OrderRecord) -> String {
    format!(
        "{} - Order #{}",
        status_headline(order.status),
        order.short_reference()
    )
}

pub(crate) fn customer_status_message(order: &OrderRecord, store_name: &str) -> String {
    format!(
        "Hi {name},\n\n\
         {headline}: order #{reference}.\n\
         {line}\n\n\
         Total: {total}\n\
         Pickup date: {pickup_date}\n\n\
         Thank you for choosing {store_name}!",
        name = order.customer_name,
        headline = status_headline(order.status),
        reference = order.short_reference(),
        line = status_line(order.status),
        total = format_amount(order.total_amount),
        pickup_date = order.pickup_date,
    )
}
