use crate::models::{Product, ProductCategory};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Aggregate figures over the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: u64,
    pub in_stock_products: u64,
    pub out_of_stock_products: u64,
    pub new_products: u64,
    pub discounted_products: u64,
    /// Distinct categories in first-seen order
    pub categories: Vec<ProductCategory>,
    /// Distinct brands in first-seen order
    pub brands: Vec<String>,
    /// Mean price rounded to the nearest unit, 0 for an empty catalog
    pub average_price: i64,
    pub price_range: PriceRange,
}

impl ProductStats {
    pub fn from_products(products: &[Product]) -> Self {
        let count = |predicate: fn(&Product) -> bool| {
            products.iter().filter(|p| predicate(p)).count() as u64
        };

        let mut categories = Vec::new();
        let mut brands: Vec<String> = Vec::new();
        for product in products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
            if !brands.contains(&product.brand) {
                brands.push(product.brand.clone());
            }
        }

        let average_price = if products.is_empty() {
            0
        } else {
            let sum: i128 = products.iter().map(|p| i128::from(p.price)).sum();
            (sum as f64 / products.len() as f64).round() as i64
        };

        let price_range = PriceRange {
            min: products.iter().map(|p| p.price).min().unwrap_or(0),
            max: products.iter().map(|p| p.price).max().unwrap_or(0),
        };

        Self {
            total_products: products.len() as u64,
            in_stock_products: count(|p| p.in_stock),
            out_of_stock_products: count(|p| !p.in_stock),
            new_products: count(|p| p.is_new),
            discounted_products: count(Product::is_discounted),
            categories,
            brands,
            average_price,
            price_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_seed_catalog_stats() {
        let stats = ProductStats::from_products(&seed::catalog());

        assert_eq!(stats.total_products, 10);
        assert_eq!(stats.in_stock_products, 9);
        assert_eq!(stats.out_of_stock_products, 1);
        assert_eq!(stats.new_products, 5);
        assert_eq!(stats.discounted_products, 4);
        assert_eq!(
            stats.categories,
            vec![
                ProductCategory::Chair,
                ProductCategory::Sofa,
                ProductCategory::Table,
                ProductCategory::Bed,
                ProductCategory::Storage,
                ProductCategory::Outdoor,
            ]
        );
        assert_eq!(
            stats.brands,
            vec!["IKEA", "West Elm", "Ashley", "CB2", "Pottery Barn"]
        );
        assert_eq!(stats.average_price, 2_665_000);
        assert_eq!(stats.price_range, PriceRange { min: 150_000, max: 7_000_000 });
    }

    #[test]
    fn test_empty_catalog_stats() {
        let stats = ProductStats::from_products(&[]);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.average_price, 0);
        assert_eq!(stats.price_range, PriceRange::default());
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(ProductStats::from_products(&seed::catalog())).unwrap();
        assert_eq!(json["totalProducts"], 10);
        assert_eq!(json["priceRange"]["min"], 150_000);
        assert_eq!(json["categories"][0], "chair");
    }
}
