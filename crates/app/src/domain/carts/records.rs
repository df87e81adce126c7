//! Cart Records

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Session UUID
///
/// Supplied by the client; the cart lives exactly as long as this key.
pub type SessionUuid = TypedUuid<SessionCart>;

/// A session's cart: product quantities plus an optionally stashed coupon
/// code. Ephemeral; no persistent identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCart {
    pub lines: Vec<CartLine>,
    pub coupon_code: Option<String>,
}

impl SessionCart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// One (product, quantity) pair in a session cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}
