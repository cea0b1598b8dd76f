use super::Language;

const TR: &[(&str, &str)] = &[
    ("title", "Başabaş ROAS Hesaplayıcı"),
    ("product", "Ürün"),
    ("newProduct", "Yeni Ürün"),
    ("copy", "Kopyala"),
    ("productName", "Ürün Adı"),
    ("aov", "Ortalama Sipariş Değeri (AOV)"),
    ("productCost", "Ürün Maliyeti (Tekil)"),
    ("creditCardFeePercent", "Kredi Kartı Ücretleri"),
    ("paymentProcessingFee", "Ödeme İşlem Ücreti"),
    ("shippingCost", "Kargo Ücreti"),
    ("fulfillmentCost", "Operasyon (Fulfillment) Maliyeti"),
    ("creditCardFee", "Kredi Kartı Ücreti"),
    ("totalCost", "Toplam Maliyet"),
    ("costPercentage", "Maliyet Yüzdesi"),
    ("grossMargin", "Brüt Kar Marjı"),
    ("expectedProfit", "Beklenen Brüt Kar"),
    ("breakEvenRoas", "Başabaş ROAS"),
    ("marginRoas", "Marj ROAS"),
    ("salesPrice", "Satış Fiyatı"),
    ("netProfit", "Net Kar"),
    ("margin", "Marj"),
    ("lossWarningTitle", "Bu ürün şu an zarar ediyor!"),
    (
        "lossWarningDesc",
        "Maliyetleriniz satış fiyatından yüksek. Lütfen fiyatı artırın veya maliyetleri düşürün.",
    ),
    (
        "maxMarginInfo",
        "Bu ürün maliyetleriyle ulaşabileceğiniz maksimum brüt kar marjı {margin} seviyesindedir.",
    ),
    ("exportSheetName", "ROAS Hesaplamaları"),
    ("currency", "Para Birimi"),
];

const EN: &[(&str, &str)] = &[
    ("title", "Break-Even ROAS Calculator"),
    ("product", "Product"),
    ("newProduct", "New Product"),
    ("copy", "Copy"),
    ("productName", "Product Name"),
    ("aov", "Average Order Value (AOV)"),
    ("productCost", "Product Cost (Unit)"),
    ("creditCardFeePercent", "Credit Card Fees"),
    ("paymentProcessingFee", "Payment Processing Fee"),
    ("shippingCost", "Shipping Cost"),
    ("fulfillmentCost", "Fulfillment Cost"),
    ("creditCardFee", "Credit Card Fee"),
    ("totalCost", "Total Cost"),
    ("costPercentage", "Cost Percentage"),
    ("grossMargin", "Gross Margin"),
    ("expectedProfit", "Expected Gross Profit"),
    ("breakEvenRoas", "Break-Even ROAS"),
    ("marginRoas", "Margin ROAS"),
    ("salesPrice", "Sales Price"),
    ("netProfit", "Net Profit"),
    ("margin", "Margin"),
    ("lossWarningTitle", "This product is currently losing money!"),
    (
        "lossWarningDesc",
        "Your costs are higher than the selling price. Please increase the price or reduce costs.",
    ),
    (
        "maxMarginInfo",
        "With these product costs, the maximum gross margin you can achieve is {margin}.",
    ),
    ("exportSheetName", "ROAS Calculations"),
    ("currency", "Currency"),
];

pub(super) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let table = match language {
        Language::Tr => TR,
        Language::En => EN,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
