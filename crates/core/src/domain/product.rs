use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub features: Vec<String>,
    /// Filled from the catalog key when the record omits it.
    #[serde(default)]
    pub category: String,
}

impl Product {
    pub fn star_rating(&self) -> String {
        let stars = self.rating.max(0.0).trunc() as usize;
        "⭐".repeat(stars)
    }
}

/// Products grouped by category, preserving the order categories and items were listed in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, Vec<Product>>", into = "IndexMap<String, Vec<Product>>")]
pub struct ProductCatalog {
    categories: IndexMap<String, Vec<Product>>,
}

impl From<IndexMap<String, Vec<Product>>> for ProductCatalog {
    fn from(categories: IndexMap<String, Vec<Product>>) -> Self {
        Self::new(categories)
    }
}

impl From<ProductCatalog> for IndexMap<String, Vec<Product>> {
    fn from(catalog: ProductCatalog) -> Self {
        catalog.categories
    }
}

impl ProductCatalog {
    pub fn new(mut categories: IndexMap<String, Vec<Product>>) -> Self {
        for (category, products) in categories.iter_mut() {
            for product in products.iter_mut().filter(|product| product.category.is_empty()) {
                product.category = category.clone();
            }
        }
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn category(&self, name: &str) -> Option<&[Product]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// First category, in catalog order, whose name occurs in `normalized_query`.
    pub fn category_mentioned_in(&self, normalized_query: &str) -> Option<(&str, &[Product])> {
        self.categories
            .iter()
            .find(|(name, _)| normalized_query.contains(name.to_lowercase().as_str()))
            .map(|(name, products)| (name.as_str(), products.as_slice()))
    }

    /// Every product, category by category, in catalog order.
    pub fn all_products(&self) -> Vec<&Product> {
        self.categories.values().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use rust_decimal::Decimal;

    use super::{Product, ProductCatalog};

    fn product(name: &str, cents: i64) -> Product {
        Product {
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            rating: 4.6,
            features: vec![],
            category: String::new(),
        }
    }

    #[test]
    fn missing_categories_are_filled_from_catalog_keys() {
        let mut categories = IndexMap::new();
        categories.insert("fashion".to_string(), vec![product("Scarf", 1999)]);
        let catalog = ProductCatalog::new(categories);

        assert_eq!(
            catalog.category("fashion").map(|items| items[0].category.as_str()),
            Some("fashion")
        );
    }

    #[test]
    fn deserializes_prices_from_json_numbers_and_keeps_order() {
        let catalog: ProductCatalog = serde_json::from_str(
            r#"{
                "home": [{"name": "Lamp", "price": 39.99, "rating": 4.1}],
                "electronics": [{"name": "Earbuds", "price": 59.5, "features": ["ANC"]}]
            }"#,
        )
        .expect("catalog json should parse");

        assert_eq!(catalog.category_names().collect::<Vec<_>>(), vec!["home", "electronics"]);
        let earbuds = &catalog.all_products()[1];
        assert_eq!(earbuds.price, Decimal::new(595, 1));
        assert_eq!(earbuds.rating, 0.0);
        assert_eq!(earbuds.category, "electronics");
    }

    #[test]
    fn category_mention_uses_catalog_order() {
        let mut categories = IndexMap::new();
        categories.insert("home".to_string(), vec![product("Lamp", 3999)]);
        categories.insert("electronics".to_string(), vec![product("Earbuds", 5999)]);
        let catalog = ProductCatalog::new(categories);

        let (name, _) =
            catalog.category_mentioned_in("electronics for my home").expect("category expected");
        assert_eq!(name, "home");
        assert!(catalog.category_mentioned_in("something nice").is_none());
    }

    #[test]
    fn star_rating_truncates() {
        assert_eq!(product("Lamp", 100).star_rating(), "⭐⭐⭐⭐");
    }
}
