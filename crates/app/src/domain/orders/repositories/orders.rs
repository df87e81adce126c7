//! Orders Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    amounts::{amount_to_i64, try_get_amount},
    coupons::records::CouponUuid,
    offers::records::OfferUuid,
    orders::{
        data::NewOrder,
        records::{OrderRecord, OrderUuid},
        status::OrderStatus,
    },
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_BY_EMAIL_SQL: &str = include_str!("../sql/list_orders_by_email.sql");
const TRANSITION_ORDER_SQL: &str = include_str!("../sql/transition_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        let subtotal = amount_to_i64(order.subtotal, "subtotal")?;
        let discount_amount = amount_to_i64(order.discount_amount, "discount_amount")?;
        let total_amount = amount_to_i64(order.total_amount, "total_amount")?;

        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(&order.customer_name)
            .bind(&order.customer_email)
            .bind(order.whatsapp_number.as_deref())
            .bind(SqlxDate::from(order.pickup_date))
            .bind(subtotal)
            .bind(discount_amount)
            .bind(total_amount)
            .bind(order.coupon_uuid.map(CouponUuid::into_uuid))
            .bind(order.offer_uuid.map(OfferUuid::into_uuid))
            .bind(&order.tracking_number)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_email: &str,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_BY_EMAIL_SQL)
            .bind(customer_email)
            .fetch_all(&mut **tx)
            .await
    }

    /// Move an order from `from` to `to`. Returns `None` when the order no
    /// longer has status `from`.
    pub(crate) async fn transition_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(TRANSITION_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(to.as_str())
            .bind(from.as_str())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer_name: row.try_get("customer_name")?,
            customer_email: row.try_get("customer_email")?,
            whatsapp_number: row.try_get("whatsapp_number")?,
            pickup_date: row.try_get::<SqlxDate, _>("pickup_date")?.to_jiff(),
            subtotal: try_get_amount(row, "subtotal")?,
            discount_amount: try_get_amount(row, "discount_amount")?,
            total_amount: try_get_amount(row, "total_amount")?,
            status,
            coupon_uuid: row
                .try_get::<Option<Uuid>, _>("coupon_uuid")?
                .map(CouponUuid::from_uuid),
            offer_uuid: row
                .try_get::<Option<Uuid>, _>("offer_uuid")?
                .map(OfferUuid::from_uuid),
            tracking_number: row.try_get("tracking_number")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            items: Vec::new(),
        })
    }
}
