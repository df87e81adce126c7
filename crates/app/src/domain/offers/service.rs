//! Offers service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::offers::{
        data::NewOffer,
        errors::OffersServiceError,
        records::{OfferUuid, SpecialOfferRecord},
        repository::PgOffersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOffersService {
    db: Db,
    repository: PgOffersRepository,
}

impl PgOffersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOffersRepository::new(),
        }
    }
}

#[async_trait]
impl OffersService for PgOffersService {
    async fn list_offers(&self) -> Result<Vec<SpecialOfferRecord>, OffersServiceError> {
        let mut tx = self.db.begin().await?;

        let offers = self.repository.list_offers(&mut tx).await?;

        tx.commit().await?;

        Ok(offers)
    }

    async fn list_active_offers(
        &self,
        point_in_time: Timestamp,
    ) -> Result<Vec<SpecialOfferRecord>, OffersServiceError> {
        let mut tx = self.db.begin().await?;

        let offers = self
            .repository
            .list_active_offers(&mut tx, point_in_time)
            .await?;

        tx.commit().await?;

        Ok(offers)
    }

    async fn create_offer(
        &self,
        offer: NewOffer,
    ) -> Result<SpecialOfferRecord, OffersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_offer(&mut tx, offer).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_offer(&self, offer: OfferUuid) -> Result<(), OffersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_offer(&mut tx, offer).await?;

        if rows_affected == 0 {
            return Err(OffersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Every offer on record, including inactive ones.
    async fn list_offers(&self) -> Result<Vec<SpecialOfferRecord>, OffersServiceError>;

    /// Offers active and inside their validity window at the given instant.
    async fn list_active_offers(
        &self,
        point_in_time: Timestamp,
    ) -> Result<Vec<SpecialOfferRecord>, OffersServiceError>;

    /// Create a new offer.
    async fn create_offer(&self, offer: NewOffer)
    -> Result<SpecialOfferRecord, OffersServiceError>;

    /// Soft-delete an offer.
    async fn delete_offer(&self, offer: OfferUuid) -> Result<(), OffersServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, ToSpan};
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_offer(title: &str, percentage: u32) -> NewOffer {
        let now = Timestamp::now();

        NewOffer {
            uuid: OfferUuid::new(),
            title: title.to_string(),
            discount_percentage: Decimal::from(percentage),
            discount_amount: 0,
            minimum_order_value: 0,
            active: true,
            valid_from: now - 1.hour(),
            valid_until: now + 1.hour(),
        }
    }

    #[tokio::test]
    async fn active_offer_is_listed() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.offers.create_offer(new_offer("Weekend Deal", 10)).await?;

        let active = ctx.offers.list_active_offers(Timestamp::now()).await?;

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Weekend Deal");

        Ok(())
    }

    #[tokio::test]
    async fn expired_offer_is_not_listed_as_active() -> TestResult {
        let ctx = TestContext::new().await;

        let now = Timestamp::now();

        ctx.offers
            .create_offer(NewOffer {
                valid_from: now - 2.hours(),
                valid_until: now - 1.hour(),
                ..new_offer("Lapsed Deal", 10)
            })
            .await?;

        let active = ctx.offers.list_active_offers(now).await?;

        assert!(active.is_empty());

        let all = ctx.offers.list_offers().await?;

        assert_eq!(all.len(), 1, "expired offers remain on record");

        Ok(())
    }

    #[tokio::test]
    async fn inactive_offer_is_not_listed_as_active() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.offers
            .create_offer(NewOffer {
                active: false,
                ..new_offer("Paused Deal", 10)
            })
            .await?;

        let active = ctx.offers.list_active_offers(Timestamp::now()).await?;

        assert!(active.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn deleted_offer_disappears() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.offers.create_offer(new_offer("Gone Soon", 10)).await?;

        ctx.offers.delete_offer(created.uuid).await?;

        assert!(ctx.offers.list_offers().await?.is_empty());

        Ok(())
    }
}
