//! Checkout service.
//!
//! Orchestrates the whole purchase: prices the session cart, resolves
//! offer and coupon discounts, and creates the order with its line items.
//! Coupon redemption and order creation share one transaction, so a
//! rejected coupon rolls everything back and a crash can never leave an
//! order without items or a redeemed coupon without an order.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rand::Rng;

use crate::{
    database::Db,
    domain::{
        carts::{CartsService, records::SessionUuid},
        checkout::{
            data::CheckoutRequest,
            errors::CheckoutError,
            pricing::{self, DeliveryPolicy, PricedLine, PricingBreakdown},
        },
        coupons::{PgCouponsRepository, records::normalize_code},
        offers::PgOffersRepository,
        orders::{
            PgOrderItemsRepository, PgOrdersRepository,
            data::{NewOrder, NewOrderItem},
            records::{OrderItemUuid, OrderRecord, OrderUuid},
        },
        products::PgProductsRepository,
    },
    notifications::Notifier,
};

#[derive(Clone)]
pub struct PgCheckoutService {
    db: Db,
    products_repository: PgProductsRepository,
    offers_repository: PgOffersRepository,
    coupons_repository: PgCouponsRepository,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    carts: Arc<dyn CartsService>,
    notifier: Arc<dyn Notifier>,
    delivery: DeliveryPolicy,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(
        db: Db,
        carts: Arc<dyn CartsService>,
        notifier: Arc<dyn Notifier>,
        delivery: DeliveryPolicy,
    ) -> Self {
        Self {
            db,
            products_repository: PgProductsRepository::new(),
            offers_repository: PgOffersRepository::new(),
            coupons_repository: PgCouponsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            carts,
            notifier,
            delivery,
        }
    }

    /// Price every cart line against the current catalog.
    async fn price_cart(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        cart: &crate::domain::carts::records::SessionCart,
        point_in_time: Timestamp,
    ) -> Result<Vec<PricedLine>, CheckoutError> {
        let mut lines = Vec::with_capacity(cart.lines.len());

        for line in &cart.lines {
            let product = self
                .products_repository
                .get_product(tx, line.product_uuid, point_in_time)
                .await?;

            lines.push(PricedLine {
                product_uuid: product.uuid,
                product_name: product.name,
                unit_price: product.price,
                quantity: line.quantity,
            });
        }

        Ok(lines)
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn quote(
        &self,
        session: SessionUuid,
        point_in_time: Timestamp,
    ) -> Result<PricingBreakdown, CheckoutError> {
        let cart = self.carts.get_cart(session).await;

        let mut tx = self.db.begin().await?;

        let lines = self.price_cart(&mut tx, &cart, point_in_time).await?;

        let offers = self
            .offers_repository
            .list_active_offers(&mut tx, point_in_time)
            .await?;

        // A stashed code that has since lapsed silently drops out of the
        // preview; only submission hard-fails on it.
        let coupon = match &cart.coupon_code {
            Some(code) => {
                self.coupons_repository
                    .find_usable_coupon(&mut tx, &normalize_code(code), point_in_time)
                    .await?
            }
            None => None,
        };

        tx.commit().await?;

        Ok(pricing::resolve(
            lines,
            &offers,
            coupon.as_ref(),
            &self.delivery,
            point_in_time,
        ))
    }

    async fn submit(
        &self,
        session: SessionUuid,
        request: CheckoutRequest,
        point_in_time: Timestamp,
    ) -> Result<OrderRecord, CheckoutError> {
        let cart = self.carts.get_cart(session).await;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut tx = self.db.begin().await?;

        let lines = self.price_cart(&mut tx, &cart, point_in_time).await?;

        let offers = self
            .offers_repository
            .list_active_offers(&mut tx, point_in_time)
            .await?;

        // The form field wins over the session stash.
        let coupon_code = request
            .coupon_code
            .as_deref()
            .or(cart.coupon_code.as_deref())
            .map(normalize_code)
            .filter(|code| !code.is_empty());

        let coupon = match coupon_code {
            Some(code) => {
                let redeemed = self
                    .coupons_repository
                    .redeem_coupon(&mut tx, &code, point_in_time)
                    .await?;

                Some(redeemed.ok_or(CheckoutError::InvalidCoupon)?)
            }
            None => None,
        };

        let breakdown = pricing::resolve(
            lines,
            &offers,
            coupon.as_ref(),
            &self.delivery,
            point_in_time,
        );

        let mut order = self
            .orders_repository
            .create_order(
                &mut tx,
                NewOrder {
                    uuid: OrderUuid::new(),
                    customer_name: request.customer_name,
                    customer_email: request.customer_email,
                    whatsapp_number: request.whatsapp_number,
                    pickup_date: request.pickup_date,
                    subtotal: breakdown.subtotal,
                    discount_amount: breakdown.discount_amount(),
                    total_amount: breakdown.total,
                    coupon_uuid: breakdown.applied_coupon.as_ref().map(|c| c.uuid),
                    offer_uuid: breakdown.applied_offer.as_ref().map(|o| o.uuid),
                    tracking_number: generate_tracking_number(),
                },
            )
            .await?;

        let mut items = Vec::with_capacity(breakdown.lines.len());

        for line in &breakdown.lines {
            let item = self
                .items_repository
                .create_order_item(
                    &mut tx,
                    order.uuid,
                    NewOrderItem {
                        uuid: OrderItemUuid::new(),
                        product_uuid: line.product_uuid,
                        quantity: line.quantity,
                        price: line.unit_price,
                    },
                )
                .await?;

            items.push(item);
        }

        tx.commit().await?;

        order.items = items;

        self.carts.clear_cart(session).await;

        // Committed; the admin ping is best-effort.
        self.notifier.notify_admin_new_order(&order);

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Price the session's cart without touching anything: subtotal, offer
    /// preview, stashed coupon, delivery charge, total.
    async fn quote(
        &self,
        session: SessionUuid,
        point_in_time: Timestamp,
    ) -> Result<PricingBreakdown, CheckoutError>;

    /// Turn the session's cart into an order.
    ///
    /// Fails with [`CheckoutError::EmptyCart`] on an empty cart and
    /// [`CheckoutError::InvalidCoupon`] when a supplied code cannot be
    /// redeemed; in both cases the cart is untouched. On success the cart
    /// is cleared and the admin notified best-effort.
    async fn submit(
        &self,
        session: SessionUuid,
        request: CheckoutRequest,
        point_in_time: Timestamp,
    ) -> Result<OrderRecord, CheckoutError>;
}

const TRACKING_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const TRACKING_LENGTH: usize = 10;

fn generate_tracking_number() -> String {
    let mut rng = rand::thread_rng();

    let suffix: String = (0..TRACKING_LENGTH)
        .map(|_| TRACKING_CHARSET[rng.gen_range(0..TRACKING_CHARSET.len())] as char)
        .collect();

    format!("TRK-{suffix}")
}
