use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One product's cost configuration, as entered by the seller.
///
/// All monetary fields share the currency unit of `aov`. The percent field is
/// on a 0–100 scale. Nothing beyond "is a number" is enforced: zero or negative
/// values are legal and flow through the engine to degenerate outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Opaque identifier, unique within a product set. Generated when absent.
    #[serde(default = "new_product_id")]
    pub id: String,
    pub product_name: String,
    /// Average order value, i.e. the selling price per order.
    pub aov: f64,
    pub product_cost: f64,
    pub credit_card_fee_percent: f64,
    pub payment_processing_fee: f64,
    pub shipping_cost: f64,
    pub fulfillment_cost: f64,
}

impl ProductInput {
    /// A product pre-filled with the sample figures shown to new users.
    pub fn with_defaults(id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            aov: 1000.0,
            product_cost: 50.0,
            credit_card_fee_percent: 2.40,
            payment_processing_fee: 0.25,
            shipping_cost: 15.0,
            fulfillment_cost: 3.0,
        }
    }

    /// Reads a numeric field. Returns `None` for `ProductName`.
    pub fn number(&self, field: ProductField) -> Option<f64> {
        match field {
            ProductField::ProductName => None,
            ProductField::Aov => Some(self.aov),
            ProductField::ProductCost => Some(self.product_cost),
            ProductField::CreditCardFeePercent => Some(self.credit_card_fee_percent),
            ProductField::PaymentProcessingFee => Some(self.payment_processing_fee),
            ProductField::ShippingCost => Some(self.shipping_cost),
            ProductField::FulfillmentCost => Some(self.fulfillment_cost),
        }
    }

    /// Writes a numeric field. Writing `ProductName` is a no-op.
    pub fn set_number(&mut self, field: ProductField, value: f64) {
        let slot = match field {
            ProductField::ProductName => return,
            ProductField::Aov => &mut self.aov,
            ProductField::ProductCost => &mut self.product_cost,
            ProductField::CreditCardFeePercent => &mut self.credit_card_fee_percent,
            ProductField::PaymentProcessingFee => &mut self.payment_processing_fee,
            ProductField::ShippingCost => &mut self.shipping_cost,
            ProductField::FulfillmentCost => &mut self.fulfillment_cost,
        };
        *slot = value;
    }
}

/// Generates a fresh opaque product identifier.
pub fn new_product_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// The editable fields of a [`ProductInput`], named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    ProductName,
    Aov,
    ProductCost,
    CreditCardFeePercent,
    PaymentProcessingFee,
    ShippingCost,
    FulfillmentCost,
}

impl ProductField {
    /// The six numeric fields, in display order.
    pub const NUMERIC: [ProductField; 6] = [
        ProductField::Aov,
        ProductField::ProductCost,
        ProductField::CreditCardFeePercent,
        ProductField::PaymentProcessingFee,
        ProductField::ShippingCost,
        ProductField::FulfillmentCost,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProductField::ProductName => "productName",
            ProductField::Aov => "aov",
            ProductField::ProductCost => "productCost",
            ProductField::CreditCardFeePercent => "creditCardFeePercent",
            ProductField::PaymentProcessingFee => "paymentProcessingFee",
            ProductField::ShippingCost => "shippingCost",
            ProductField::FulfillmentCost => "fulfillmentCost",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productName" => Ok(ProductField::ProductName),
            "aov" => Ok(ProductField::Aov),
            "productCost" => Ok(ProductField::ProductCost),
            "creditCardFeePercent" => Ok(ProductField::CreditCardFeePercent),
            "paymentProcessingFee" => Ok(ProductField::PaymentProcessingFee),
            "shippingCost" => Ok(ProductField::ShippingCost),
            "fulfillmentCost" => Ok(ProductField::FulfillmentCost),
            other => Err(format!("unknown product field '{}'", other)),
        }
    }
}
