//! Money helpers: row decoding for amount columns and percentage
//! arithmetic over minor currency units.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use sqlx::{Row, postgres::PgRow};

/// Decode a `BIGINT` money column into minor currency units.
pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Decode an `INTEGER` counter column.
pub(crate) fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i32: i32 = row.try_get(col)?;

    u32::try_from(count_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Encode minor currency units for a `BIGINT` bind.
pub(crate) fn amount_to_i64(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// `amount × percentage / 100`, rounded to the nearest minor unit.
///
/// Negative or non-representable results collapse to zero.
pub(crate) fn percentage_of(amount: u64, percentage: Decimal) -> u64 {
    let share = Decimal::from(amount) * percentage / Decimal::ONE_HUNDRED;

    share.round().to_u64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_of_thousand_rupees() {
        assert_eq!(percentage_of(1000_00, Decimal::from(10)), 100_00);
    }

    #[test]
    fn fractional_percentage_rounds() {
        // 2.5% of ₹999.99 = ₹25.00 (2499.975 paise rounds to 2500)
        assert_eq!(percentage_of(999_99, Decimal::new(25, 1)), 25_00);
    }

    #[test]
    fn zero_percentage_is_zero() {
        assert_eq!(percentage_of(1000_00, Decimal::ZERO), 0);
    }

    #[test]
    fn negative_percentage_collapses_to_zero() {
        assert_eq!(percentage_of(1000_00, Decimal::from(-10)), 0);
    }
}
