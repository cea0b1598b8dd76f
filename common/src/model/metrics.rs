use serde::Serialize;

/// ROAS needed to keep `margin` percent of the order value as profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoasTarget {
    pub margin: u32,
    pub roas: f64,
}

/// Figures derived from one [`ProductInput`](super::product::ProductInput).
///
/// A pure projection of its input: never stored, always recomputed. Percent
/// fields are on a 0–100 scale. `NaN` values (zero `aov`) serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedValues {
    pub credit_card_fee: f64,
    pub total_cost: f64,
    pub cost_percentage: f64,
    pub gross_margin_percent: f64,
    pub expected_gross_profit: f64,
    /// `0` when no ad spend can be afforded.
    pub break_even_roas: f64,
    /// One entry per margin target, 10 through 100 in steps of 10.
    pub roas_targets: Vec<RoasTarget>,
}

impl CalculatedValues {
    /// True when the product loses money before any ad spend.
    pub fn is_loss_making(&self) -> bool {
        self.expected_gross_profit.is_nan() || self.expected_gross_profit <= 0.0
    }

    /// The highest margin reachable, which is the margin at zero ad spend.
    pub fn max_achievable_margin(&self) -> f64 {
        self.gross_margin_percent
    }

    pub fn roas_at(&self, margin: u32) -> Option<f64> {
        self.roas_targets
            .iter()
            .find(|t| t.margin == margin)
            .map(|t| t.roas)
    }

    pub fn margin_band(&self) -> MarginBand {
        MarginBand::classify(self.gross_margin_percent)
    }
}

/// Coarse health bucket for a gross margin, used for colouring and warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginBand {
    Loss,
    Low,
    Healthy,
    High,
}

impl MarginBand {
    pub fn classify(gross_margin_percent: f64) -> Self {
        if gross_margin_percent.is_nan() || gross_margin_percent < 0.0 {
            MarginBand::Loss
        } else if gross_margin_percent < 20.0 {
            MarginBand::Low
        } else if gross_margin_percent < 50.0 {
            MarginBand::Healthy
        } else {
            MarginBand::High
        }
    }
}

/// A product together with its derived figures, as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReport {
    pub id: String,
    pub product_name: String,
    pub values: CalculatedValues,
    pub margin_band: MarginBand,
    pub loss_making: bool,
}
