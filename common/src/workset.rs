use crate::engine;
use crate::model::metrics::CalculatedValues;
use crate::model::product::{ProductField, ProductInput, new_product_id};
use crate::validation::parse_number_or_zero;
use std::collections::HashSet;

/// The ordered list of products currently being edited and compared.
///
/// A set is never empty: it starts with one sample product and refuses to
/// remove its last entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSet {
    products: Vec<ProductInput>,
}

impl ProductSet {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            products: vec![ProductInput::with_defaults(new_product_id(), first_name)],
        }
    }

    /// Rebuilds a set from loaded or shared products.
    ///
    /// Blank and repeated ids are replaced so every product stays addressable.
    /// An empty list falls back to a single sample product named `fallback_name`.
    pub fn from_products(products: Vec<ProductInput>, fallback_name: &str) -> Self {
        if products.is_empty() {
            return Self::new(fallback_name);
        }
        let mut seen = HashSet::new();
        let products = products
            .into_iter()
            .map(|mut p| {
                if p.id.trim().is_empty() || !seen.insert(p.id.clone()) {
                    p.id = new_product_id();
                    seen.insert(p.id.clone());
                }
                p
            })
            .collect();
        Self { products }
    }

    pub fn products(&self) -> &[ProductInput] {
        &self.products
    }

    pub fn into_products(self) -> Vec<ProductInput> {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Never true for a set built through this type's constructors.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProductInput> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Appends a sample product labelled `"{label} {n}"`, `n` being the new size.
    pub fn add(&mut self, label: &str) -> String {
        let id = new_product_id();
        let name = format!("{} {}", label, self.products.len() + 1);
        self.products.push(ProductInput::with_defaults(id.clone(), name));
        id
    }

    /// Appends a copy of `id` under a fresh identity, named `"{name} ({copy_label})"`.
    pub fn duplicate(&mut self, id: &str, copy_label: &str) -> Option<String> {
        let source = self.get(id)?;
        let copy = ProductInput {
            id: new_product_id(),
            product_name: format!("{} ({})", source.product_name, copy_label),
            ..source.clone()
        };
        let new_id = copy.id.clone();
        self.products.push(copy);
        Some(new_id)
    }

    /// Removes `id`. Returns false if it is unknown or the last product left.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.products.len() <= 1 {
            return false;
        }
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Applies one edit as typed by the user. Numeric fields take the numeric
    /// prefix of `raw`, or `0` when there is none.
    pub fn update(&mut self, id: &str, field: ProductField, raw: &str) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        match field {
            ProductField::ProductName => product.product_name = raw.to_string(),
            numeric => product.set_number(numeric, parse_number_or_zero(raw)),
        }
        true
    }

    pub fn calculate_all(&self) -> Vec<(String, CalculatedValues)> {
        self.products
            .iter()
            .map(|p| (p.id.clone(), engine::calculate(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_holds_one_sample_product() {
        let set = ProductSet::new("Product 1");
        assert_eq!(set.len(), 1);
        let p = &set.products()[0];
        assert_eq!(p.product_name, "Product 1");
        assert_eq!(p.aov, 1000.0);
        assert_eq!(p.credit_card_fee_percent, 2.4);
    }

    #[test]
    fn add_numbers_products_by_position() {
        let mut set = ProductSet::new("Product 1");
        let id = set.add("New Product");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(&id).unwrap().product_name, "New Product 2");
    }

    #[test]
    fn duplicate_copies_values_under_new_identity() {
        let mut set = ProductSet::new("Mug");
        let original = set.products()[0].id.clone();
        set.update(&original, ProductField::Aov, "42");
        let copy_id = set.duplicate(&original, "Copy").unwrap();
        assert_ne!(copy_id, original);
        let copy = set.get(&copy_id).unwrap();
        assert_eq!(copy.product_name, "Mug (Copy)");
        assert_eq!(copy.aov, 42.0);
        assert!(set.duplicate("missing", "Copy").is_none());
    }

    #[test]
    fn last_product_cannot_be_removed() {
        let mut set = ProductSet::new("Only");
        let only = set.products()[0].id.clone();
        assert!(!set.remove(&only));
        assert_eq!(set.len(), 1);

        let second = set.add("New Product");
        assert!(!set.remove("missing"));
        assert!(set.remove(&only));
        assert_eq!(set.products()[0].id, second);
        assert!(!set.remove(&second));
    }

    #[test]
    fn update_parses_numbers_leniently() {
        let mut set = ProductSet::new("A");
        let id = set.products()[0].id.clone();
        assert!(set.update(&id, ProductField::ShippingCost, "12.5 TL"));
        assert!(set.update(&id, ProductField::ProductCost, ""));
        assert!(set.update(&id, ProductField::ProductName, "Renamed"));
        let p = set.get(&id).unwrap();
        assert_eq!(p.shipping_cost, 12.5);
        assert_eq!(p.product_cost, 0.0);
        assert_eq!(p.product_name, "Renamed");
        assert!(!set.update("missing", ProductField::Aov, "1"));
    }

    #[test]
    fn from_products_repairs_ids_and_never_starts_empty() {
        let mut a = ProductInput::with_defaults("same", "A");
        a.aov = 10.0;
        let b = ProductInput::with_defaults("same", "B");
        let c = ProductInput::with_defaults("", "C");
        let set = ProductSet::from_products(vec![a, b, c], "Product 1");
        let ids: HashSet<&str> = set.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(set.products()[0].id, "same");
        assert_eq!(set.products()[0].aov, 10.0);

        let empty = ProductSet::from_products(Vec::new(), "Product 1");
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn calculate_all_follows_set_order() {
        let mut set = ProductSet::new("A");
        set.add("B");
        let results = set.calculate_all();
        assert_eq!(results.len(), 2);
        for ((id, values), product) in results.iter().zip(set.products()) {
            assert_eq!(id, &product.id);
            assert_eq!(values.roas_targets.len(), 10);
        }
    }
}
