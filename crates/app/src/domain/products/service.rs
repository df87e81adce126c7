//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::records::CategoryUuid,
        products::{
            data::{NewProduct, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
            search,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        category: Option<CategoryUuid>,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products(&mut tx, category, point_in_time)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
        point_in_time: Timestamp,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .repository
            .get_product(&mut tx, product, point_in_time)
            .await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn list_featured(
        &self,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_featured(&mut tx, point_in_time).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn search_products(
        &self,
        query: String,
        category: Option<CategoryUuid>,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .search_products(&mut tx, &query, category, point_in_time)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn suggest_products(
        &self,
        query: String,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products(&mut tx, None, point_in_time)
            .await?;

        tx.commit().await?;

        Ok(search::rank_suggestions(&query, products))
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// List catalog products, optionally filtered to a category, sorted by
    /// category name then product name.
    async fn list_products(
        &self,
        category: Option<CategoryUuid>,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductUuid,
        point_in_time: Timestamp,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// List products flagged for the homepage.
    async fn list_featured(
        &self,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Case-insensitive substring search on name and description.
    async fn search_products(
        &self,
        query: String,
        category: Option<CategoryUuid>,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Suggestions for a partial query, with a fuzzy fallback when nothing
    /// matches by substring.
    async fn suggest_products(
        &self,
        query: String,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Add a product to the catalog.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Update an existing product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft-delete a product.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_product(name: &str, price: u64) -> NewProduct {
        NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            description: String::new(),
            price,
            weight_grams: None,
            featured: false,
            category_uuid: None,
        }
    }

    #[tokio::test]
    async fn create_product_roundtrips() -> TestResult {
        let ctx = TestContext::new().await;

        let new = new_product("Chocolate Truffle", 550_00);
        let uuid = new.uuid;

        let created = ctx.products.create_product(new).await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.price, 550_00);
        assert!(created.deleted_at.is_none());

        let fetched = ctx.products.get_product(uuid, Timestamp::now()).await?;

        assert_eq!(fetched.name, "Chocolate Truffle");

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .get_product(ProductUuid::new(), Timestamp::now())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_sorts_by_category_then_name() -> TestResult {
        let ctx = TestContext::new().await;

        let cheesecakes = ctx.create_category("Cheesecakes").await;
        let brownies = ctx.create_category("Brownies").await;

        for (name, category) in [
            ("Zesty Lemon", Some(cheesecakes)),
            ("Classic Baked", Some(cheesecakes)),
            ("Walnut Square", Some(brownies)),
            ("Uncategorised Loaf", None),
        ] {
            ctx.products
                .create_product(NewProduct {
                    category_uuid: category,
                    ..new_product(name, 400_00)
                })
                .await?;
        }

        let products = ctx.products.list_products(None, Timestamp::now()).await?;

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Walnut Square",
                "Classic Baked",
                "Zesty Lemon",
                "Uncategorised Loaf",
            ],
            "expected category-then-name ordering with uncategorised last"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_filters_by_category() -> TestResult {
        let ctx = TestContext::new().await;

        let cheesecakes = ctx.create_category("Cheesecakes").await;

        ctx.products
            .create_product(NewProduct {
                category_uuid: Some(cheesecakes),
                ..new_product("Classic Baked", 450_00)
            })
            .await?;

        ctx.products
            .create_product(new_product("Uncategorised Loaf", 300_00))
            .await?;

        let products = ctx
            .products
            .list_products(Some(cheesecakes), Timestamp::now())
            .await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Classic Baked");

        Ok(())
    }

    #[tokio::test]
    async fn search_matches_name_and_description_case_insensitively() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(NewProduct {
                description: "Rich dark ganache".to_string(),
                ..new_product("Chocolate Truffle", 550_00)
            })
            .await?;

        ctx.products
            .create_product(new_product("Vanilla Slice", 350_00))
            .await?;

        let by_name = ctx
            .products
            .search_products("CHOCOLATE".to_string(), None, Timestamp::now())
            .await?;

        assert_eq!(by_name.len(), 1);

        let by_description = ctx
            .products
            .search_products("ganache".to_string(), None, Timestamp::now())
            .await?;

        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Chocolate Truffle");

        Ok(())
    }

    #[tokio::test]
    async fn suggest_falls_back_to_fuzzy_matching() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(new_product("Chocolate Cake", 500_00))
            .await?;

        let suggestions = ctx
            .products
            .suggest_products("chocolte cake".to_string(), Timestamp::now())
            .await?;

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Chocolate Cake");

        Ok(())
    }

    #[tokio::test]
    async fn deleted_product_disappears_from_listings() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(new_product("Short Lived", 200_00))
            .await?;

        ctx.products.delete_product(created.uuid).await?;

        let result = ctx
            .products
            .get_product(created.uuid, Timestamp::now())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        let products = ctx.products.list_products(None, Timestamp::now()).await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_product_changes_price_for_new_reads() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(new_product("Repriced", 400_00))
            .await?;

        let updated = ctx
            .products
            .update_product(
                created.uuid,
                ProductUpdate {
                    name: created.name.clone(),
                    description: created.description.clone(),
                    price: 475_00,
                    weight_grams: created.weight_grams,
                    featured: created.featured,
                    category_uuid: created.category_uuid,
                },
            )
            .await?;

        assert_eq!(updated.price, 475_00);

        Ok(())
    }
}
