//! Session cart store.
//!
//! Carts are browser-session state, not catalog data: a mapping from
//! product to quantity that lives exactly as long as its session key and is
//! thrown away after checkout. The store keeps them in process memory
//! behind the same kind of service seam the persistent domains use.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::{
    carts::records::{CartLine, SessionCart, SessionUuid},
    products::records::ProductUuid,
};

#[derive(Debug, Default)]
struct CartState {
    quantities: FxHashMap<ProductUuid, u32>,
    coupon_code: Option<String>,
}

impl CartState {
    fn snapshot(&self) -> SessionCart {
        let mut lines: Vec<CartLine> = self
            .quantities
            .iter()
            .map(|(&product_uuid, &quantity)| CartLine {
                product_uuid,
                quantity,
            })
            .collect();

        // Stable ordering for display and deterministic order-item creation.
        lines.sort_by_key(|line| line.product_uuid);

        SessionCart {
            lines,
            coupon_code: self.coupon_code.clone(),
        }
    }
}

/// In-memory cart store keyed by session UUID.
#[derive(Debug, Default)]
pub struct MemoryCartsService {
    sessions: RwLock<FxHashMap<SessionUuid, CartState>>,
}

impl MemoryCartsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartsService for MemoryCartsService {
    async fn get_cart(&self, session: SessionUuid) -> SessionCart {
        self.sessions
            .read()
            .await
            .get(&session)
            .map(CartState::snapshot)
            .unwrap_or_default()
    }

    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> SessionCart {
        let mut sessions = self.sessions.write().await;

        let cart = sessions.entry(session).or_default();

        if quantity > 0 {
            let count = cart.quantities.entry(product).or_insert(0);
            *count = count.saturating_add(quantity);
        }

        cart.snapshot()
    }

    async fn remove_item(&self, session: SessionUuid, product: ProductUuid) -> SessionCart {
        let mut sessions = self.sessions.write().await;

        let Some(cart) = sessions.get_mut(&session) else {
            return SessionCart::default();
        };

        if let Some(count) = cart.quantities.get_mut(&product) {
            *count -= 1;

            if *count == 0 {
                cart.quantities.remove(&product);
            }
        }

        cart.snapshot()
    }

    async fn set_coupon(&self, session: SessionUuid, code: Option<String>) {
        let mut sessions = self.sessions.write().await;

        sessions.entry(session).or_default().coupon_code = code;
    }

    async fn clear_cart(&self, session: SessionUuid) {
        self.sessions.write().await.remove(&session);
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The session's cart; empty if the session has never added anything.
    async fn get_cart(&self, session: SessionUuid) -> SessionCart;

    /// Add `quantity` units of a product, accumulating onto any existing
    /// line.
    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> SessionCart;

    /// Remove a single unit of a product. Removing the last unit drops the
    /// line; quantities never go negative.
    async fn remove_item(&self, session: SessionUuid, product: ProductUuid) -> SessionCart;

    /// Stash (or clear) a coupon code on the session for checkout to pick
    /// up.
    async fn set_coupon(&self, session: SessionUuid, code: Option<String>);

    /// Drop the whole cart, coupon stash included.
    async fn clear_cart(&self, session: SessionUuid);
}
