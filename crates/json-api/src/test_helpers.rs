//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use crumb_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService,
        categories::MockCategoriesService,
        checkout::MockCheckoutService,
        coupons::{MockCouponsService, records::CouponRecord, records::CouponUuid},
        offers::{MockOffersService, records::OfferUuid, records::SpecialOfferRecord},
        orders::{
            MockOrdersService,
            records::{OrderRecord, OrderUuid},
            status::OrderStatus,
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::state::State;

pub(crate) const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// One mock per service. Expectations left unset panic on use, so each
/// test only configures the services its handler is supposed to touch.
pub(crate) struct MockApp {
    pub(crate) products: MockProductsService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) offers: MockOffersService,
    pub(crate) coupons: MockCouponsService,
    pub(crate) carts: MockCartsService,
    pub(crate) checkout: MockCheckoutService,
    pub(crate) orders: MockOrdersService,
}

impl MockApp {
    pub(crate) fn new() -> Self {
        Self {
            products: MockProductsService::new(),
            categories: MockCategoriesService::new(),
            offers: MockOffersService::new(),
            coupons: MockCouponsService::new(),
            carts: MockCartsService::new(),
            checkout: MockCheckoutService::new(),
            orders: MockOrdersService::new(),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::new(
            AppContext {
                products: Arc::new(self.products),
                categories: Arc::new(self.categories),
                offers: Arc::new(self.offers),
                coupons: Arc::new(self.coupons),
                carts: Arc::new(self.carts),
                checkout: Arc::new(self.checkout),
                orders: Arc::new(self.orders),
            },
            TEST_ADMIN_TOKEN.to_string(),
        )
    }
}

pub(crate) fn service_with(route: Router, app: MockApp) -> Service {
    Service::new(Router::new().hoop(inject(app.into_state())).push(route))
}

pub(crate) fn service_with_hoop<H: Handler>(hoop: H, route: Router, app: MockApp) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app.into_state()))
            .hoop(hoop)
            .push(route),
    )
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Chocolate Truffle".to_string(),
        description: "Rich dark ganache".to_string(),
        price: 500_00,
        weight_grams: Some(1000),
        featured: false,
        category_uuid: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_offer(uuid: OfferUuid) -> SpecialOfferRecord {
    SpecialOfferRecord {
        uuid,
        title: "Festive Special".to_string(),
        discount_percentage: Decimal::from(10),
        discount_amount: 0,
        minimum_order_value: 0,
        active: true,
        valid_from: Timestamp::UNIX_EPOCH,
        valid_until: Timestamp::MAX,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_coupon(uuid: CouponUuid, code: &str) -> CouponRecord {
    CouponRecord {
        uuid,
        code: code.to_string(),
        discount_percentage: Decimal::from(10),
        valid_from: Timestamp::UNIX_EPOCH,
        valid_until: Timestamp::MAX,
        active: true,
        usage_limit: 5,
        used_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        uuid,
        customer_name: "Asha".to_string(),
        customer_email: "asha@example.com".to_string(),
        whatsapp_number: None,
        pickup_date: date(2026, 9, 1),
        subtotal: 1000_00,
        discount_amount: 100_00,
        total_amount: 900_00,
        status,
        coupon_uuid: None,
        offer_uuid: None,
        tracking_number: "TRK-TESTTRACK0".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        items: Vec::new(),
    }
}
