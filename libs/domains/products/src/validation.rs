//! Product payload validation.
//!
//! All rules are checked on every call and the failures are reported together,
//! in a fixed order, so a form can show every problem at once.

use crate::error::ProductError;
use crate::models::{ProductCategory, ProductInput, ProductPayload};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use utoipa::ToSchema;

pub const NAME_REQUIRED: &str = "Product name is required";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const CATEGORY_INVALID: &str =
    "Invalid category. Must be one of: chair, sofa, table, bed, storage, outdoor";
pub const BRAND_REQUIRED: &str = "Brand is required";
pub const PRICE_REQUIRED: &str = "Valid price is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const IMAGE_REQUIRED: &str = "Image URL is required";
pub const DISCOUNT_OUT_OF_RANGE: &str = "Discount must be between 0 and 100";

/// Outcome of validating a product payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl From<ValidationReport> for ProductError {
    fn from(report: ValidationReport) -> Self {
        ProductError::Validation(report.errors)
    }
}

enum CategoryCheck {
    Missing,
    Unknown,
    Valid(ProductCategory),
}

fn required_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_category(value: Option<&str>) -> CategoryCheck {
    match required_text(value) {
        None => CategoryCheck::Missing,
        Some(raw) => match ProductCategory::from_str(raw) {
            Ok(category) => CategoryCheck::Valid(category),
            Err(_) => CategoryCheck::Unknown,
        },
    }
}

/// JSON integers, and floats with no fractional part. Strings never count.
fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

fn positive_amount(value: Option<&Value>) -> Option<i64> {
    value.and_then(whole_number).filter(|amount| *amount > 0)
}

/// `None` means the submitted discount is not a whole number in 0-100;
/// absence defaults to 0.
fn valid_discount(value: Option<&Value>) -> Option<u8> {
    match value {
        None => Some(0),
        Some(raw) => whole_number(raw)
            .and_then(|d| u8::try_from(d).ok())
            .filter(|d| *d <= 100),
    }
}

/// Check a payload against every product rule.
///
/// Never fails; an invalid payload yields `is_valid == false` with the
/// messages in field order: name, category, brand, price, description,
/// image, discount.
pub fn validate(payload: &ProductPayload) -> ValidationReport {
    let mut errors = Vec::new();

    if required_text(payload.name.as_deref()).is_none() {
        errors.push(NAME_REQUIRED.to_string());
    }

    match check_category(payload.category.as_deref()) {
        CategoryCheck::Missing => errors.push(CATEGORY_REQUIRED.to_string()),
        CategoryCheck::Unknown => errors.push(CATEGORY_INVALID.to_string()),
        CategoryCheck::Valid(_) => {}
    }

    if required_text(payload.brand.as_deref()).is_none() {
        errors.push(BRAND_REQUIRED.to_string());
    }
    if positive_amount(payload.price.as_ref()).is_none() {
        errors.push(PRICE_REQUIRED.to_string());
    }
    if required_text(payload.description.as_deref()).is_none() {
        errors.push(DESCRIPTION_REQUIRED.to_string());
    }
    if required_text(payload.image.as_deref()).is_none() {
        errors.push(IMAGE_REQUIRED.to_string());
    }
    if valid_discount(payload.discount.as_ref()).is_none() {
        errors.push(DISCOUNT_OUT_OF_RANGE.to_string());
    }

    ValidationReport::from_errors(errors)
}

impl TryFrom<ProductPayload> for ProductInput {
    type Error = ValidationReport;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        let report = validate(&payload);

        let (
            Some(name),
            CategoryCheck::Valid(category),
            Some(brand),
            Some(price),
            Some(description),
            Some(image),
            Some(discount),
        ) = (
            required_text(payload.name.as_deref()),
            check_category(payload.category.as_deref()),
            required_text(payload.brand.as_deref()),
            positive_amount(payload.price.as_ref()),
            required_text(payload.description.as_deref()),
            required_text(payload.image.as_deref()),
            valid_discount(payload.discount.as_ref()),
        )
        else {
            return Err(report);
        };

        Ok(ProductInput {
            name: name.to_string(),
            category,
            brand: brand.to_string(),
            price,
            original_price: positive_amount(payload.original_price.as_ref()),
            description: description.to_string(),
            image: image.to_string(),
            is_new: payload.is_new.unwrap_or(false),
            discount,
            in_stock: payload.in_stock.unwrap_or(true),
        })
    }
}
