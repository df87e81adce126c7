//! App Router

use salvo::Router;

use crate::{admin, cart, categories, checkout, coupons, home, offers, orders, products, search};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("home").get(home::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("categories").get(categories::index::handler))
        .push(
            Router::with_path("search")
                .get(search::index::handler)
                .push(Router::with_path("suggestions").get(search::suggestions::handler)),
        )
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .push(
                    Router::with_path("items/{product}")
                        .post(cart::add_item::handler)
                        .delete(cart::remove_item::handler),
                )
                .push(Router::with_path("coupon").post(cart::apply_coupon::handler)),
        )
        .push(
            Router::with_path("checkout")
                .get(checkout::quote::handler)
                .post(checkout::submit::handler),
        )
        .push(
            Router::with_path("orders")
                .get(orders::history::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(admin_router())
}

/// Admin surface: catalog, offer, and coupon management plus bulk order
/// transitions, all behind the admin token.
fn admin_router() -> Router {
    Router::with_path("admin")
        .hoop(admin::middleware::handler)
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("categories")
                .post(categories::create::handler)
                .push(Router::with_path("{category}").delete(categories::delete::handler)),
        )
        .push(
            Router::with_path("offers")
                .get(offers::index::handler)
                .post(offers::create::handler)
                .push(Router::with_path("{offer}").delete(offers::delete::handler)),
        )
        .push(
            Router::with_path("coupons")
                .get(coupons::index::handler)
                .post(coupons::create::handler),
        )
        .push(Router::with_path("orders/status").post(orders::transition::handler))
}
