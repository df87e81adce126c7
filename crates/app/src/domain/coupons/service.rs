//! Coupons service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::coupons::{
        data::NewCoupon,
        errors::CouponsServiceError,
        records::{CouponRecord, normalize_code},
        repository::PgCouponsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCouponsService {
    db: Db,
    repository: PgCouponsRepository,
}

impl PgCouponsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCouponsRepository::new(),
        }
    }
}

#[async_trait]
impl CouponsService for PgCouponsService {
    async fn validate_coupon(
        &self,
        code: String,
        point_in_time: Timestamp,
    ) -> Result<CouponRecord, CouponsServiceError> {
        let code = normalize_code(&code);

        let mut tx = self.db.begin().await?;

        let coupon = self
            .repository
            .find_usable_coupon(&mut tx, &code, point_in_time)
            .await?;

        tx.commit().await?;

        coupon.ok_or(CouponsServiceError::NotFound)
    }

    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError> {
        let coupon = NewCoupon {
            code: normalize_code(&coupon.code),
            ..coupon
        };

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_coupon(&mut tx, coupon).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let coupons = self.repository.list_coupons(&mut tx).await?;

        tx.commit().await?;

        Ok(coupons)
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Look up a usable coupon by code (case-insensitive). Fails with
    /// [`CouponsServiceError::NotFound`] when the code is unknown, inactive,
    /// expired, or fully redeemed.
    async fn validate_coupon(
        &self,
        code: String,
        point_in_time: Timestamp,
    ) -> Result<CouponRecord, CouponsServiceError>;

    /// Create a new coupon. The code is stored uppercase.
    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError>;

    /// Every coupon on record.
    async fn list_coupons(&self) -> Result<Vec<CouponRecord>, CouponsServiceError>;
}
