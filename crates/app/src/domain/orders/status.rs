//! Order status lifecycle.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order lifecycle states.
///
/// Orders move strictly forward through
/// `pending → confirmed → processing → ready_for_pickup → out_for_delivery
/// → picked_up`, with `picked_up` also reachable directly from
/// `ready_for_pickup` for in-store collection. `cancelled` is reachable
/// from any non-terminal state. `picked_up` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    ReadyForPickup,
    OutForDelivery,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    /// All states in lifecycle order, `cancelled` last.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Confirmed,
        Self::Processing,
        Self::ReadyForPickup,
        Self::OutForDelivery,
        Self::PickedUp,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::ReadyForPickup => "ready_for_pickup",
            Self::OutForDelivery => "out_for_delivery",
            Self::PickedUp => "picked_up",
            Self::Cancelled => "cancelled",
        }
    }

    /// No transitions leave a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::PickedUp | Self::Cancelled)
    }

    /// Position in the forward sequence; `None` for `cancelled`, which sits
    /// outside it.
    const fn sequence(self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::Confirmed => Some(1),
            Self::Processing => Some(2),
            Self::ReadyForPickup => Some(3),
            Self::OutForDelivery => Some(4),
            Self::PickedUp => Some(5),
            Self::Cancelled => None,
        }
    }

    /// Whether an admin may move an order from `self` to `to`.
    ///
    /// Transitions are one-way: only strictly later states are allowed, so
    /// skipping intermediate states is permitted but going back never is.
    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        if self.is_terminal() {
            return false;
        }

        match (self.sequence(), to.sequence()) {
            (_, None) => true,
            (Some(from), Some(to)) => to > from,
            (None, Some(_)) => false,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseOrderStatusError(s.to_string()))
    }
}
