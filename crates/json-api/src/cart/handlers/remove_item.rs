//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{cart::add_item::CartMutationResponse, extensions::*, state::State};

/// Remove Cart Item Handler
///
/// Removes a single unit of a product from the session's cart. Removing
/// the last unit drops the line; quantities never go negative.
#[endpoint(tags("cart"), summary = "Remove Cart Item")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartMutationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_uuid_or_400()?;

    let cart = state
        .app
        .carts
        .remove_item(session, product.into_inner().into())
        .await;

    Ok(Json(CartMutationResponse {
        total_quantity: cart.total_quantity(),
    }))
}
