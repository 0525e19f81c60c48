use crate::RevenueStrategy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Revenue as the discounted sale price times quantity.
///
/// `sale_price * quantity * (1 - discount / 100)`; the product card is not
/// consulted. A result beyond the `Decimal` range saturates to
/// `Decimal::MAX` or `Decimal::MIN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> Decimal {
        // |discount / 100| is far below the Decimal range, so this cannot overflow.
        let discount = Decimal::ONE - item.discount / dec!(100);
        item.sale_price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|gross| gross.checked_mul(discount))
            .unwrap_or_else(|| {
                tracing::warn!(
                    sku = %item.sku,
                    sale_price = %item.sale_price,
                    quantity = item.quantity,
                    "Line item revenue out of range, saturating"
                );
                if item.sale_price.is_sign_negative() != discount.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                }
            })
    }
}
