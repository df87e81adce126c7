//! Coupons Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    amounts::try_get_count,
    coupons::{
        data::NewCoupon,
        records::{CouponRecord, CouponUuid},
    },
};

const FIND_USABLE_COUPON_SQL: &str = include_str!("sql/find_usable_coupon.sql");
const REDEEM_COUPON_SQL: &str = include_str!("sql/redeem_coupon.sql");
const CREATE_COUPON_SQL: &str = include_str!("sql/create_coupon.sql");
const LIST_COUPONS_SQL: &str = include_str!("sql/list_coupons.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCouponsRepository;

impl PgCouponsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Look up a coupon that could be redeemed right now. Read-only; the
    /// usable state may be gone by the time a redemption is attempted.
    pub(crate) async fn find_usable_coupon(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
        point_in_time: Timestamp,
    ) -> Result<Option<CouponRecord>, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(FIND_USABLE_COUPON_SQL)
            .bind(code)
            .bind(SqlxTimestamp::from(point_in_time))
            .fetch_optional(&mut **tx)
            .await
    }

    /// Atomically claim one usage slot. Returns `None` when no usable
    /// coupon matched, including the case where a concurrent checkout took
    /// the last slot first.
    pub(crate) async fn redeem_coupon(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
        point_in_time: Timestamp,
    ) -> Result<Option<CouponRecord>, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(REDEEM_COUPON_SQL)
            .bind(code)
            .bind(SqlxTimestamp::from(point_in_time))
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_coupon(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        coupon: NewCoupon,
    ) -> Result<CouponRecord, sqlx::Error> {
        let usage_limit =
            i32::try_from(coupon.usage_limit).map_err(|e| sqlx::Error::ColumnDecode {
                index: "usage_limit".to_string(),
                source: Box::new(e),
            })?;

        query_as::<Postgres, CouponRecord>(CREATE_COUPON_SQL)
            .bind(coupon.uuid.into_uuid())
            .bind(&coupon.code)
            .bind(coupon.discount_percentage)
            .bind(SqlxTimestamp::from(coupon.valid_from))
            .bind(SqlxTimestamp::from(coupon.valid_until))
            .bind(coupon.active)
            .bind(usage_limit)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_coupons(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CouponRecord>, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(LIST_COUPONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CouponRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CouponUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            discount_percentage: row.try_get::<Decimal, _>("discount_percentage")?,
            valid_from: row.try_get::<SqlxTimestamp, _>("valid_from")?.to_jiff(),
            valid_until: row.try_get::<SqlxTimestamp, _>("valid_until")?.to_jiff(),
            active: row.try_get("active")?,
            usage_limit: try_get_count(row, "usage_limit")?,
            used_count: try_get_count(row, "used_count")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
