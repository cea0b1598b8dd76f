//! Profitability and break-even ROAS formulas.
//!
//! Every function here is pure arithmetic on one [`ProductInput`]. There is no
//! failure path: degenerate inputs produce IEEE-754 `NaN`/infinities for the
//! percent ratios and the `0` sentinel for any ROAS that cannot be reached.

use crate::model::metrics::{CalculatedValues, ProductReport, RoasTarget};
use crate::model::product::ProductInput;

/// Margin targets swept by [`calculate`], in ascending order.
pub const MARGIN_TARGETS: [u32; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Derives every figure shown for a product.
pub fn calculate(input: &ProductInput) -> CalculatedValues {
    let aov = input.aov;
    let credit_card_fee = (aov * input.credit_card_fee_percent) / 100.0;
    let total_cost = input.product_cost
        + credit_card_fee
        + input.payment_processing_fee
        + input.shipping_cost
        + input.fulfillment_cost;

    let expected_gross_profit = aov - total_cost;
    let gross_margin_percent = (expected_gross_profit / aov) * 100.0;
    let cost_percentage = (total_cost / aov) * 100.0;

    let break_even_roas = if expected_gross_profit > 0.0 {
        aov / expected_gross_profit
    } else {
        0.0
    };

    let roas_targets = MARGIN_TARGETS
        .iter()
        .map(|&margin| RoasTarget {
            margin,
            roas: roas_for_margin(aov, total_cost, f64::from(margin)),
        })
        .collect();

    CalculatedValues {
        credit_card_fee,
        total_cost,
        cost_percentage,
        gross_margin_percent,
        expected_gross_profit,
        break_even_roas,
        roas_targets,
    }
}

/// ROAS required to keep `target_margin` percent of `aov` as profit once ads
/// are paid for. Returns `0` when the costs leave no room for ad spend.
pub fn roas_for_margin(aov: f64, total_cost: f64, target_margin: f64) -> f64 {
    let target_profit = aov * (target_margin / 100.0);
    // profit = revenue - cost - ad spend
    let available_ad_spend = aov - total_cost - target_profit;
    if available_ad_spend > 0.0 {
        aov / available_ad_spend
    } else {
        0.0
    }
}

/// Bundles a product with its figures and derived classifications.
pub fn report(input: &ProductInput) -> ProductReport {
    let values = calculate(input);
    ProductReport {
        id: input.id.clone(),
        product_name: input.product_name.clone(),
        margin_band: values.margin_band(),
        loss_making: values.is_loss_making(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::metrics::MarginBand;

    const EPS: f64 = 1e-9;

    fn product(aov: f64, cost: f64, fee_pct: f64, proc_fee: f64, ship: f64, fulfil: f64) -> ProductInput {
        ProductInput {
            id: "p".to_string(),
            product_name: "Test".to_string(),
            aov,
            product_cost: cost,
            credit_card_fee_percent: fee_pct,
            payment_processing_fee: proc_fee,
            shipping_cost: ship,
            fulfillment_cost: fulfil,
        }
    }

    fn sample() -> ProductInput {
        product(1000.0, 50.0, 2.4, 0.25, 15.0, 3.0)
    }

    #[test]
    fn sample_product_matches_hand_computed_figures() {
        let v = calculate(&sample());
        assert!((v.credit_card_fee - 24.0).abs() < EPS);
        assert!((v.total_cost - 92.25).abs() < EPS);
        assert!((v.expected_gross_profit - 907.75).abs() < EPS);
        assert!((v.gross_margin_percent - 90.775).abs() < EPS);
        assert!((v.cost_percentage - 9.225).abs() < EPS);
        assert!((v.break_even_roas - 1000.0 / 907.75).abs() < EPS);
        assert!((v.break_even_roas - 1.1017).abs() < 1e-4);
    }

    #[test]
    fn ten_percent_target_for_sample_product() {
        let v = calculate(&sample());
        let roas = v.roas_at(10).unwrap();
        assert!((roas - 1000.0 / 807.75).abs() < EPS);
        assert!((roas - 1.238).abs() < 1e-3);
    }

    #[test]
    fn loss_making_product_has_zero_break_even() {
        let v = calculate(&product(100.0, 120.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(v.total_cost, 120.0);
        assert_eq!(v.expected_gross_profit, -20.0);
        assert_eq!(v.break_even_roas, 0.0);
        assert!(v.is_loss_making());
        assert_eq!(v.margin_band(), MarginBand::Loss);
        assert!(v.roas_targets.iter().all(|t| t.roas == 0.0));
    }

    #[test]
    fn costs_equal_to_price_is_not_break_even_reachable() {
        let v = calculate(&product(100.0, 100.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(v.expected_gross_profit, 0.0);
        assert_eq!(v.break_even_roas, 0.0);
        assert!(v.is_loss_making());
    }

    #[test]
    fn zero_aov_yields_nan_ratios_and_zero_sentinels() {
        let v = calculate(&product(0.0, 50.0, 2.4, 0.25, 15.0, 3.0));
        assert!(v.gross_margin_percent.is_infinite() || v.gross_margin_percent.is_nan());
        assert!(v.cost_percentage.is_infinite() || v.cost_percentage.is_nan());
        assert_eq!(v.break_even_roas, 0.0);

        let all_zero = calculate(&product(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert!(all_zero.gross_margin_percent.is_nan());
        assert!(all_zero.cost_percentage.is_nan());
        assert_eq!(all_zero.break_even_roas, 0.0);
        assert!(all_zero.roas_targets.iter().all(|t| t.roas == 0.0));
    }

    #[test]
    fn sweep_has_ten_ascending_targets() {
        let v = calculate(&sample());
        let margins: Vec<u32> = v.roas_targets.iter().map(|t| t.margin).collect();
        assert_eq!(margins, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn sweep_zeroes_targets_beyond_achievable_margin() {
        let v = calculate(&sample());
        // 90.775% is the ceiling: 90% is reachable, 100% is not
        assert!(v.roas_at(90).unwrap() > 0.0);
        assert_eq!(v.roas_at(100).unwrap(), 0.0);
    }

    #[test]
    fn roas_is_non_decreasing_while_ad_spend_is_available() {
        for input in [
            sample(),
            product(250.0, 80.0, 3.0, 0.3, 12.0, 4.0),
            product(59.9, 9.5, 1.9, 0.0, 4.0, 2.5),
        ] {
            let v = calculate(&input);
            let reachable: Vec<f64> = v
                .roas_targets
                .iter()
                .map(|t| t.roas)
                .take_while(|&r| r > 0.0)
                .collect();
            assert!(reachable.windows(2).all(|w| w[0] <= w[1]));
            assert!(reachable.iter().all(|&r| r >= v.break_even_roas));
        }
    }

    #[test]
    fn profitable_products_need_roas_above_one() {
        for (aov, cost) in [(10.0, 1.0), (1000.0, 999.0), (49.99, 20.0)] {
            let v = calculate(&product(aov, cost, 0.0, 0.0, 0.0, 0.0));
            assert!(v.expected_gross_profit > 0.0);
            assert!(v.break_even_roas > 1.0);
        }
    }

    #[test]
    fn calculation_is_bit_identical_on_repeat() {
        let input = product(333.33, 12.34, 2.9, 0.3, 7.77, 1.11);
        let a = calculate(&input);
        let b = calculate(&input);
        assert_eq!(a.break_even_roas.to_bits(), b.break_even_roas.to_bits());
        assert_eq!(a.gross_margin_percent.to_bits(), b.gross_margin_percent.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn arbitrary_margin_target() {
        let roas = roas_for_margin(1000.0, 92.25, 15.0);
        assert!((roas - 1000.0 / 757.75).abs() < EPS);
        assert_eq!(roas_for_margin(1000.0, 92.25, 95.0), 0.0);
    }

    #[test]
    fn report_carries_identity_and_band() {
        let r = report(&sample());
        assert_eq!(r.id, "p");
        assert_eq!(r.margin_band, MarginBand::High);
        assert!(!r.loss_making);
    }
}
