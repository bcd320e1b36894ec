//! Listing pipeline: filter, then sort, then paginate.
//!
//! Query-string criteria arrive as [`ListParams`] (raw strings) and are parsed
//! once into a typed [`ProductQuery`]. Every stage is a pure function of its
//! input slice.

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 8;

/// Raw listing criteria as received on the query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Exact category, case-insensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Brand substring, case-insensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Inclusive lower price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    /// Substring matched against name, brand and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// `true` or `false`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<String>,
    /// name, price, createdAt or updatedAt (default createdAt)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// asc or desc (default desc)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    /// 1-based page number (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Page size (default 8)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

/// Parsed filter criteria; `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.as_str().eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if !contains_ignore_case(&product.brand, brand) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if let Some(search) = &self.search {
            let hit = contains_ignore_case(&product.name, search)
                || contains_ignore_case(&product.brand, search)
                || contains_ignore_case(&product.description, search);
            if !hit {
                return false;
            }
        }
        if self.in_stock.is_some_and(|in_stock| product.in_stock != in_stock) {
            return false;
        }
        true
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortKey {
    Name,
    Price,
    #[default]
    CreatedAt,
    UpdatedAt,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductSort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl ProductSort {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Stable sort: products comparing equal keep their input order in both directions.
    pub fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by(|a, b| self.compare(a, b));
        products
    }
}

/// Pagination metadata returned alongside each page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_products: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u64,
}

/// One page of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: PaginationMeta,
}

/// Page window; `page` and `limit` are both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> ProductResult<Self> {
        if page == 0 {
            return Err(ProductError::MalformedInput(format!("Invalid page: {}", page)));
        }
        if limit == 0 {
            return Err(ProductError::MalformedInput(format!("Invalid limit: {}", limit)));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn apply(&self, products: Vec<Product>) -> ProductPage {
        let total = products.len() as u64;
        let total_pages = total.div_ceil(self.limit);
        let start = (self.page - 1).saturating_mul(self.limit);

        let products = products
            .into_iter()
            .skip(usize::try_from(start).unwrap_or(usize::MAX))
            .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .collect();

        ProductPage {
            products,
            pagination: PaginationMeta {
                current_page: self.page,
                total_pages,
                total_products: total,
                has_next_page: self.page < total_pages,
                has_prev_page: self.page > 1,
                limit: self.limit,
            },
        }
    }
}

/// Fully parsed listing request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: ProductSort,
    pub page: PageRequest,
}

impl ProductQuery {
    /// filter, then sort, then paginate
    pub fn run(&self, products: &[Product]) -> ProductPage {
        let filtered = self.filter.apply(products);
        let sorted = self.sort.apply(filtered);
        self.page.apply(sorted)
    }
}

/// Blank values count as absent; anything else is kept untouched for
/// substring matching.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Empty and whitespace-only values count as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_param<T: FromStr>(name: &str, value: Option<String>) -> ProductResult<Option<T>> {
    present(value)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| ProductError::MalformedInput(format!("Invalid {}: {}", name, raw)))
        })
        .transpose()
}

fn parse_flag(name: &str, value: Option<String>) -> ProductResult<Option<bool>> {
    present(value)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ProductError::MalformedInput(format!(
                "Invalid {}: {}",
                name, raw
            ))),
        })
        .transpose()
}

impl TryFrom<ListParams> for ProductQuery {
    type Error = ProductError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let filter = ProductFilter {
            category: present(params.category),
            brand: non_blank(params.brand),
            min_price: parse_param("minPrice", params.min_price)?,
            max_price: parse_param("maxPrice", params.max_price)?,
            search: non_blank(params.search),
            in_stock: parse_flag("inStock", params.in_stock)?,
        };

        let sort = ProductSort::new(
            parse_param("sortBy", params.sort_by)?.unwrap_or_default(),
            parse_param("sortOrder", params.sort_order)?.unwrap_or_default(),
        );

        let page = PageRequest::new(
            parse_param("page", params.page)?.unwrap_or(DEFAULT_PAGE),
            parse_param("limit", params.limit)?.unwrap_or(DEFAULT_LIMIT),
        )?;

        Ok(Self { filter, sort, page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "category" => params.category = value,
                "brand" => params.brand = value,
                "minPrice" => params.min_price = value,
                "maxPrice" => params.max_price = value,
                "search" => params.search = value,
                "inStock" => params.in_stock = value,
                "sortBy" => params.sort_by = value,
                "sortOrder" => params.sort_order = value,
                "page" => params.page = value,
                "limit" => params.limit = value,
                other => panic!("unknown param {}", other),
            }
        }
        params
    }

    fn query(pairs: &[(&str, &str)]) -> ProductQuery {
        ProductQuery::try_from(params(pairs)).unwrap()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_defaults() {
        let query = query(&[]);
        assert_eq!(query.filter, ProductFilter::default());
        assert_eq!(query.sort.key, SortKey::CreatedAt);
        assert_eq!(query.sort.order, SortOrder::Desc);
        assert_eq!(query.page.page(), 1);
        assert_eq!(query.page.limit(), 8);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let query = query(&[("category", ""), ("minPrice", ""), ("inStock", " ")]);
        assert_eq!(query.filter, ProductFilter::default());
    }

    #[test]
    fn test_malformed_parameters_are_rejected() {
        for pair in [
            ("minPrice", "cheap"),
            ("maxPrice", "1e3"),
            ("page", "0"),
            ("page", "-1"),
            ("limit", "0"),
            ("limit", "ten"),
            ("sortBy", "rating"),
            ("sortOrder", "sideways"),
            ("inStock", "yes"),
        ] {
            let result = ProductQuery::try_from(params(&[pair]));
            assert!(
                matches!(result, Err(ProductError::MalformedInput(_))),
                "{:?} should be malformed",
                pair
            );
        }
    }

    #[test]
    fn test_malformed_message_names_parameter() {
        let err = ProductQuery::try_from(params(&[("page", "abc")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid page: abc");
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let products = seed::catalog();
        let chairs = query(&[("category", "CHAIR")]).filter.apply(&products);
        assert_eq!(chairs.len(), 3);
        assert!(chairs.iter().all(|p| p.category.as_str() == "chair"));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let products = seed::catalog();
        assert!(query(&[("category", "lamp")]).filter.apply(&products).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = seed::catalog();
        let min = products.iter().map(|p| p.price).min().unwrap();
        let max = products.iter().map(|p| p.price).max().unwrap();

        let all = query(&[("minPrice", &min.to_string()), ("maxPrice", &max.to_string())])
            .filter
            .apply(&products);
        assert_eq!(all.len(), products.len());

        let cheapest = query(&[("maxPrice", &min.to_string())]).filter.apply(&products);
        assert!(cheapest.iter().all(|p| p.price == min));
    }

    #[test]
    fn test_search_matches_name_brand_or_description() {
        let products = seed::catalog();
        let filter = ProductFilter {
            search: Some("ikea".to_string()),
            ..Default::default()
        };
        let hits = filter.apply(&products);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| {
            let text = format!("{} {} {}", p.name, p.brand, p.description).to_lowercase();
            text.contains("ikea")
        }));
    }

    #[test]
    fn test_text_criteria_keep_surrounding_spaces() {
        let products = seed::catalog();

        let padded = query(&[("search", "elm "), ("brand", " ")]);
        assert_eq!(padded.filter.search.as_deref(), Some("elm "));
        assert_eq!(padded.filter.brand, None);
        assert!(padded.filter.apply(&products).is_empty());

        let plain = query(&[("search", "elm")]);
        let hits = plain.filter.apply(&products);
        assert!(hits.iter().any(|p| p.brand == "West Elm"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = seed::catalog();
        let filter = query(&[("category", "sofa"), ("inStock", "true")]).filter;
        let once = filter.apply(&products);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let sorted = ProductSort::new(SortKey::Price, SortOrder::Asc).apply(seed::catalog());
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let mut products = seed::catalog();
        for product in &mut products {
            product.price = 100;
        }
        let input_order = ids(&products);

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sorted = ProductSort::new(SortKey::Price, order).apply(products.clone());
            assert_eq!(ids(&sorted), input_order);
        }
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut products = seed::catalog();
        products.truncate(2);
        products[0].name = "beta".to_string();
        products[1].name = "Alpha".to_string();

        let sorted = ProductSort::new(SortKey::Name, SortOrder::Asc).apply(products);
        assert_eq!(sorted[0].name, "Alpha");
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let sorted = ProductSort::default().apply(seed::catalog());
        assert!(sorted.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_pagination_metadata() {
        let page = PageRequest::new(2, 4).unwrap().apply(seed::catalog());
        assert_eq!(page.products.len(), 4);
        assert_eq!(
            page.pagination,
            PaginationMeta {
                current_page: 2,
                total_pages: 3,
                total_products: 10,
                has_next_page: true,
                has_prev_page: true,
                limit: 4,
            }
        );
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let page = PageRequest::new(9, 4).unwrap().apply(seed::catalog());
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total_products, 10);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.has_next_page);
    }

    #[test]
    fn test_empty_input_pagination() {
        let page = PageRequest::default().apply(Vec::new());
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert!(!page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);
    }

    #[test]
    fn test_pages_concatenate_to_sorted_sequence() {
        let products = seed::catalog();
        let sort = ProductSort::new(SortKey::Name, SortOrder::Asc);
        let expected = ids(&sort.apply(products.clone()));

        let first = ProductQuery {
            sort,
            page: PageRequest::new(1, 3).unwrap(),
            ..Default::default()
        }
        .run(&products);

        let mut collected = Vec::new();
        for page in 1..=first.pagination.total_pages {
            let result = ProductQuery {
                sort,
                page: PageRequest::new(page, 3).unwrap(),
                ..Default::default()
            }
            .run(&products);
            collected.extend(ids(&result.products));
        }
        assert_eq!(collected, expected);
    }

    #[test]
    fn test_chair_scenario() {
        let page = query(&[
            ("category", "chair"),
            ("sortBy", "price"),
            ("sortOrder", "asc"),
            ("limit", "2"),
            ("page", "1"),
        ])
        .run(&seed::catalog());

        assert_eq!(page.products.len(), 2);
        assert!(page.products[0].price <= page.products[1].price);
        assert_eq!(page.pagination.total_products, 3);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_next_page);
    }
}
