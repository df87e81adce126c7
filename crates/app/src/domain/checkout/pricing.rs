//! Pricing and discount resolution.
//!
//! Pure arithmetic over priced cart lines: subtotal, best-offer selection,
//! coupon percentage, delivery surcharge, final total. No storage access;
//! the checkout service feeds this with whatever it read inside its
//! transaction.

use jiff::Timestamp;

use crate::domain::{
    coupons::records::CouponRecord, offers::records::SpecialOfferRecord,
    products::records::ProductUuid,
};

/// A cart line priced against the catalog at checkout time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub product_uuid: ProductUuid,
    pub product_name: String,
    /// Unit price in minor units, snapshotted from the product.
    pub unit_price: u64,
    pub quantity: u32,
}

impl PricedLine {
    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_subtotal(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// Sum of all line subtotals.
#[must_use]
pub fn subtotal(lines: &[PricedLine]) -> u64 {
    lines.iter().map(PricedLine::line_subtotal).sum()
}

/// Pick the offer granting the strictly greatest discount on `subtotal`.
///
/// Offers granting nothing are skipped. A later offer must beat the current
/// best strictly, so over a UUID-ordered slice equal discounts resolve to
/// the lowest UUID.
#[must_use]
pub fn select_best_offer(
    offers: &[SpecialOfferRecord],
    subtotal: u64,
    now: Timestamp,
) -> Option<(&SpecialOfferRecord, u64)> {
    let mut best: Option<(&SpecialOfferRecord, u64)> = None;

    for offer in offers {
        let discount = offer.discount_for(subtotal, now);

        if discount == 0 {
            continue;
        }

        if best.is_none_or(|(_, best_discount)| discount > best_discount) {
            best = Some((offer, discount));
        }
    }

    best
}

/// Delivery surcharge configuration. The default charges nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryPolicy {
    /// Flat surcharge in minor units; zero disables delivery charging.
    pub charge: u64,

    /// Orders at or above this subtotal ship free.
    pub free_delivery_threshold: Option<u64>,
}

impl DeliveryPolicy {
    /// Surcharge for an order of `subtotal` minor units.
    #[must_use]
    pub fn charge_for(&self, subtotal: u64) -> u64 {
        match self.free_delivery_threshold {
            Some(threshold) if subtotal >= threshold => 0,
            _ => self.charge,
        }
    }
}

/// The fully-resolved price of a cart.
#[derive(Debug, Clone)]
pub struct PricingBreakdown {
    pub lines: Vec<PricedLine>,
    pub subtotal: u64,
    pub offer_discount: u64,
    pub applied_offer: Option<SpecialOfferRecord>,
    pub coupon_discount: u64,
    pub applied_coupon: Option<CouponRecord>,
    pub delivery_charge: u64,
    /// Final payable amount, clamped at zero when discounts exceed the
    /// subtotal.
    pub total: u64,
}

impl PricingBreakdown {
    /// Combined coupon + offer discount, as recorded on the order.
    #[must_use]
    pub fn discount_amount(&self) -> u64 {
        self.offer_discount + self.coupon_discount
    }
}

/// Resolve the payable amount for `lines`.
///
/// `offers` must already be filtered to candidates (the repository hands
/// them over UUID-ordered) and `coupon` must already be validated or
/// redeemed; this function only does arithmetic.
#[must_use]
pub fn resolve(
    lines: Vec<PricedLine>,
    offers: &[SpecialOfferRecord],
    coupon: Option<&CouponRecord>,
    delivery: &DeliveryPolicy,
    now: Timestamp,
) -> PricingBreakdown {
    let subtotal = subtotal(&lines);

    let (applied_offer, offer_discount) = match select_best_offer(offers, subtotal, now) {
        Some((offer, discount)) => (Some(offer.clone()), discount),
        None => (None, 0),
    };

    let coupon_discount = coupon.map_or(0, |coupon| coupon.discount_for(subtotal));

    let delivery_charge = if lines.is_empty() {
        0
    } else {
        delivery.charge_for(subtotal)
    };

    let total = subtotal
        .saturating_sub(offer_discount)
        .saturating_sub(coupon_discount)
        + delivery_charge;

    PricingBreakdown {
        lines,
        subtotal,
        offer_discount,
        applied_offer,
        coupon_discount,
        applied_coupon: coupon.cloned(),
        delivery_charge,
        total,
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::domain::{coupons::records::CouponUuid, offers::records::OfferUuid};

    use super::*;

    fn line(unit_price: u64, quantity: u32) -> PricedLine {
        PricedLine {
            product_uuid: ProductUuid::new(),
            product_name: "Cake".to_string(),
            unit_price,
            quantity,
        }
    }

    fn offer(uuid: OfferUuid, percentage: u64, fixed: u64) -> SpecialOfferRecord {
        SpecialOfferRecord {
            uuid,
            title: "Offer".to_string(),
            discount_percentage: Decimal::from(percentage),
            discount_amount: fixed,
            minimum_order_value: 0,
            active: true,
            valid_from: Timestamp::UNIX_EPOCH,
            valid_until: Timestamp::MAX,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    fn coupon(percentage: u64) -> CouponRecord {
        CouponRecord {
            uuid: CouponUuid::new(),
            code: "SAVE10".to_string(),
            discount_percentage: Decimal::from(percentage),
            valid_from: Timestamp::UNIX_EPOCH,
            valid_until: Timestamp::MAX,
            active: true,
            usage_limit: 5,
            used_count: 0,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    #[test]
    fn subtotal_sums_line_items() {
        assert_eq!(subtotal(&[line(500_00, 2), line(120_50, 1)]), 1120_50);
    }

    #[test]
    fn larger_offer_discount_wins() {
        let offers = [
            offer(OfferUuid::new(), 0, 50_00),
            offer(OfferUuid::new(), 0, 80_00),
        ];

        let (winner, discount) =
            select_best_offer(&offers, 1000_00, Timestamp::now()).expect("an offer should apply");

        assert_eq!(discount, 80_00);
        assert_eq!(winner.uuid, offers[1].uuid);
    }

    #[test]
    fn equal_discounts_resolve_to_first_listed_offer() {
        // The repository lists candidates in UUID order, so first-listed is
        // the lowest UUID.
        let first = OfferUuid::from_uuid(Uuid::from_u128(1));
        let second = OfferUuid::from_uuid(Uuid::from_u128(2));

        let offers = [offer(first, 0, 80_00), offer(second, 0, 80_00)];

        let (winner, _) =
            select_best_offer(&offers, 1000_00, Timestamp::now()).expect("an offer should apply");

        assert_eq!(winner.uuid, first);
    }

    #[test]
    fn no_offer_is_not_an_error() {
        let breakdown = resolve(
            vec![line(500_00, 1)],
            &[],
            None,
            &DeliveryPolicy::default(),
            Timestamp::now(),
        );

        assert_eq!(breakdown.offer_discount, 0);
        assert!(breakdown.applied_offer.is_none());
        assert_eq!(breakdown.total, 500_00);
    }

    #[test]
    fn coupon_and_offer_discounts_stack() {
        let offers = [offer(OfferUuid::new(), 0, 50_00)];
        let coupon = coupon(10);

        let breakdown = resolve(
            vec![line(500_00, 2)],
            &offers,
            Some(&coupon),
            &DeliveryPolicy::default(),
            Timestamp::now(),
        );

        assert_eq!(breakdown.subtotal, 1000_00);
        assert_eq!(breakdown.offer_discount, 50_00);
        assert_eq!(breakdown.coupon_discount, 100_00);
        assert_eq!(breakdown.discount_amount(), 150_00);
        assert_eq!(breakdown.total, 850_00);
    }

    #[test]
    fn total_clamps_at_zero_when_discounts_exceed_subtotal() {
        let offers = [offer(OfferUuid::new(), 100, 0)];
        let coupon = coupon(50);

        let breakdown = resolve(
            vec![line(500_00, 1)],
            &offers,
            Some(&coupon),
            &DeliveryPolicy::default(),
            Timestamp::now(),
        );

        assert_eq!(breakdown.total, 0, "total must never go negative");
    }

    #[test]
    fn delivery_charge_applies_below_free_threshold() {
        let delivery = DeliveryPolicy {
            charge: 100_00,
            free_delivery_threshold: Some(1000_00),
        };

        let below = resolve(
            vec![line(500_00, 1)],
            &[],
            None,
            &delivery,
            Timestamp::now(),
        );

        assert_eq!(below.delivery_charge, 100_00);
        assert_eq!(below.total, 600_00);

        let above = resolve(
            vec![line(500_00, 2)],
            &[],
            None,
            &delivery,
            Timestamp::now(),
        );

        assert_eq!(above.delivery_charge, 0);
        assert_eq!(above.total, 1000_00);
    }

    #[test]
    fn empty_cart_prices_to_zero() {
        let delivery = DeliveryPolicy {
            charge: 100_00,
            free_delivery_threshold: None,
        };

        let breakdown = resolve(Vec::new(), &[], None, &delivery, Timestamp::now());

        assert_eq!(breakdown.subtotal, 0);
        assert_eq!(breakdown.delivery_charge, 0);
        assert_eq!(breakdown.total, 0);
    }
}
