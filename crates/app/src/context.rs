//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, MemoryCartsService},
        categories::{CategoriesService, PgCategoriesService},
        checkout::{CheckoutService, PgCheckoutService, pricing::DeliveryPolicy},
        coupons::{CouponsService, PgCouponsService},
        offers::{OffersService, PgOffersService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
    notifications::{Dispatcher, DispatcherConfig, Notifier},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub offers: Arc<dyn OffersService>,
    pub coupons: Arc<dyn CouponsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        notifications: DispatcherConfig,
        delivery: DeliveryPolicy,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);
        let carts: Arc<dyn CartsService> = Arc::new(MemoryCartsService::new());
        let notifier: Arc<dyn Notifier> = Arc::new(Dispatcher::new(notifications));

        Ok(Self::assemble(db, carts, notifier, delivery))
    }

    /// Wire every service over the given database handle.
    #[must_use]
    pub fn assemble(
        db: Db,
        carts: Arc<dyn CartsService>,
        notifier: Arc<dyn Notifier>,
        delivery: DeliveryPolicy,
    ) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            offers: Arc::new(PgOffersService::new(db.clone())),
            coupons: Arc::new(PgCouponsService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(
                db.clone(),
                carts.clone(),
                notifier.clone(),
                delivery,
            )),
            orders: Arc::new(PgOrdersService::new(db, notifier)),
            carts,
        }
    }
}
