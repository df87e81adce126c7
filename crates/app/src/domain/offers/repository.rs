//! Offers Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    amounts::{amount_to_i64, try_get_amount},
    offers::{
        data::NewOffer,
        records::{OfferUuid, SpecialOfferRecord},
    },
};

const LIST_OFFERS_SQL: &str = include_str!("sql/list_offers.sql");
const LIST_ACTIVE_OFFERS_SQL: &str = include_str!("sql/list_active_offers.sql");
const CREATE_OFFER_SQL: &str = include_str!("sql/create_offer.sql");
const DELETE_OFFER_SQL: &str = include_str!("sql/delete_offer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOffersRepository;

impl PgOffersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<SpecialOfferRecord>, sqlx::Error> {
        query_as::<Postgres, SpecialOfferRecord>(LIST_OFFERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Offers that are active and inside their validity window, in UUID
    /// order. The stable ordering is what makes best-offer ties
    /// deterministic.
    pub(crate) async fn list_active_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        point_in_time: Timestamp,
    ) -> Result<Vec<SpecialOfferRecord>, sqlx::Error> {
        query_as::<Postgres, SpecialOfferRecord>(LIST_ACTIVE_OFFERS_SQL)
            .bind(SqlxTimestamp::from(point_in_time))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        offer: NewOffer,
    ) -> Result<SpecialOfferRecord, sqlx::Error> {
        let discount_amount = amount_to_i64(offer.discount_amount, "discount_amount")?;
        let minimum_order_value = amount_to_i64(offer.minimum_order_value, "minimum_order_value")?;

        query_as::<Postgres, SpecialOfferRecord>(CREATE_OFFER_SQL)
            .bind(offer.uuid.into_uuid())
            .bind(&offer.title)
            .bind(offer.discount_percentage)
            .bind(discount_amount)
            .bind(minimum_order_value)
            .bind(offer.active)
            .bind(SqlxTimestamp::from(offer.valid_from))
            .bind(SqlxTimestamp::from(offer.valid_until))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        offer: OfferUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_OFFER_SQL)
            .bind(offer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for SpecialOfferRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OfferUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            discount_percentage: row.try_get::<Decimal, _>("discount_percentage")?,
            discount_amount: try_get_amount(row, "discount_amount")?,
            minimum_order_value: try_get_amount(row, "minimum_order_value")?,
            active: row.try_get("active")?,
            valid_from: row.try_get::<SqlxTimestamp, _>("valid_from")?.to_jiff(),
            valid_until: row.try_get::<SqlxTimestamp, _>("valid_until")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
