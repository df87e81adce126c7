//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_app::domain::products::{ProductsService as _, records::ProductRecord};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Long description
    pub description: String,

    /// Unit price in minor currency units (paise)
    pub price: u64,

    /// Weight in grams, if known
    pub weight_grams: Option<u32>,

    /// Whether the product is featured on the homepage
    pub featured: bool,

    /// Owning category, if any
    pub category_uuid: Option<Uuid>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            weight_grams: product.weight_grams,
            featured: product.featured,
            category_uuid: product.category_uuid.map(Into::into),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let point_in_time = at.into_point_in_time()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into(), point_in_time)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
