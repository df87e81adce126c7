//! Orders service.
//!
//! Owns the order lifecycle after checkout has created the record: status
//! transitions, history, and the customer notifications each transition
//! triggers.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        records::{OrderRecord, OrderUuid},
        repositories::{PgOrderItemsRepository, PgOrdersRepository},
        status::OrderStatus,
    },
    notifications::Notifier,
};

#[derive(Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    notifier: Arc<dyn Notifier>,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            notifier,
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.orders_repository.get_order(&mut tx, order).await?;

        let items = self
            .items_repository
            .get_order_items(&mut tx, order.uuid)
            .await?;

        tx.commit().await?;

        order.items = items;

        Ok(order)
    }

    async fn list_orders_by_email(
        &self,
        customer_email: String,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .list_orders_by_email(&mut tx, &customer_email)
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn transition_order(
        &self,
        order: OrderUuid,
        to: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.orders_repository.get_order(&mut tx, order).await?;

        if !current.status.can_transition_to(to) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to,
            });
        }

        let updated = self
            .orders_repository
            .transition_order(&mut tx, order, current.status, to)
            .await?;

        tx.commit().await?;

        // A concurrent transition changed the status between read and
        // update; report against the state we checked.
        let updated = updated.ok_or(OrdersServiceError::InvalidTransition {
            from: current.status,
            to,
        })?;

        // Status change is committed; notification is best-effort and must
        // not affect the outcome.
        self.notifier.notify_customer_status_changed(&updated);

        Ok(updated)
    }

    async fn transition_orders(
        &self,
        orders: Vec<OrderUuid>,
        to: OrderStatus,
    ) -> Result<u32, OrdersServiceError> {
        let mut updated = 0;

        for order in orders {
            match self.transition_order(order, to).await {
                Ok(_) => updated += 1,
                Err(error) => {
                    warn!("skipping order {order} in bulk transition to {to}: {error}");
                }
            }
        }

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieve an order with its line items.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// A customer's past orders, newest first (without line items).
    async fn list_orders_by_email(
        &self,
        customer_email: String,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Move an order to a new status and notify the customer.
    ///
    /// Only forward transitions are accepted; terminal orders reject
    /// everything. The notification is fire-and-forget.
    async fn transition_order(
        &self,
        order: OrderUuid,
        to: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Bulk admin action: transition every given order, skipping those the
    /// lifecycle rejects, and report how many were updated.
    async fn transition_orders(
        &self,
        orders: Vec<OrderUuid>,
        to: OrderStatus,
    ) -> Result<u32, OrdersServiceError>;
}
