use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use utoipa::ToSchema;

/// Furniture category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProductCategory {
    Chair,
    Sofa,
    Table,
    Bed,
    Storage,
    Outdoor,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Chair,
        ProductCategory::Sofa,
        ProductCategory::Table,
        ProductCategory::Bed,
        ProductCategory::Storage,
        ProductCategory::Outdoor,
    ];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Product entity as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog-assigned identifier, never reused
    pub id: u64,
    pub name: String,
    pub category: ProductCategory,
    pub brand: String,
    /// Current price in the store's smallest currency unit
    pub price: i64,
    /// Pre-discount price shown struck through
    pub original_price: Option<i64>,
    pub description: String,
    /// Image URL
    pub image: String,
    pub is_new: bool,
    /// Discount percentage, 0-100
    pub discount: u8,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product fields as submitted by a client, before validation.
///
/// Every field is optional here so that validation can report all missing
/// fields at once instead of failing on the first one during deserialization.
/// Numeric fields take any JSON value; a float or a string ends up as a
/// validation message rather than a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One of: chair, sofa, table, bed, storage, outdoor (case-insensitive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub price: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub original_price: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub discount: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// Validated, normalized product fields.
///
/// Only obtainable through `ProductInput::try_from(ProductPayload)`, which runs
/// the validator; the store accepts nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub category: ProductCategory,
    pub brand: String,
    pub price: i64,
    pub original_price: Option<i64>,
    pub description: String,
    pub image: String,
    pub is_new: bool,
    pub discount: u8,
    pub in_stock: bool,
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            category: Some(product.category.to_string()),
            brand: Some(product.brand.clone()),
            price: Some(product.price.into()),
            original_price: product.original_price.map(Into::into),
            description: Some(product.description.clone()),
            image: Some(product.image.clone()),
            is_new: Some(product.is_new),
            discount: Some(product.discount.into()),
            in_stock: Some(product.in_stock),
        }
    }
}

impl Product {
    /// Create a new product with the given id, stamped at `now`
    pub fn new(id: u64, input: ProductInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            brand: input.brand,
            price: input.price,
            original_price: input.original_price,
            description: input.description,
            image: input.image,
            is_new: input.is_new,
            discount: input.discount,
            in_stock: input.in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field; `id` and `created_at` are kept.
    pub fn apply_update(&mut self, input: ProductInput) {
        self.name = input.name;
        self.category = input.category;
        self.brand = input.brand;
        self.price = input.price;
        self.original_price = input.original_price;
        self.description = input.description;
        self.image = input.image;
        self.is_new = input.is_new;
        self.discount = input.discount;
        self.in_stock = input.in_stock;
        self.updated_at = refreshed_timestamp(self.updated_at);
    }

    pub fn is_discounted(&self) -> bool {
        self.discount > 0
    }
}

/// Current time, nudged forward if the clock has not moved past `previous`.
fn refreshed_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}
