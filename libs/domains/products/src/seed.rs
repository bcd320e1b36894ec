//! Sample furniture catalog loaded at startup.

use crate::models::{Product, ProductCategory};
use chrono::{DateTime, TimeDelta, Utc};

/// Days from the Unix epoch to 2024-01-01.
const JAN_1_2024: i64 = 19_723;

fn january_2024(day: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(JAN_1_2024 + day - 1)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u64,
    name: &str,
    category: ProductCategory,
    brand: &str,
    price: i64,
    original_price: Option<i64>,
    description: &str,
    image: &str,
    is_new: bool,
    discount: u8,
    in_stock: bool,
) -> Product {
    // Seeded products are dated one per day starting 2024-01-15.
    let created_at = january_2024(14 + id as i64);
    Product {
        id,
        name: name.to_string(),
        category,
        brand: brand.to_string(),
        price,
        original_price,
        description: description.to_string(),
        image: image.to_string(),
        is_new,
        discount,
        in_stock,
        created_at,
        updated_at: created_at,
    }
}

const CAFE_CHAIR_IMAGE: &str =
    "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&w=400";
const MODERN_CHAIR_IMAGE: &str =
    "https://images.unsplash.com/photo-1567538096630-e0c55bd6374c?ixlib=rb-4.0.3&w=400";
const SOFA_IMAGE: &str =
    "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?ixlib=rb-4.0.3&w=400";
const PATIO_IMAGE: &str =
    "https://images.unsplash.com/photo-1506439773649-6e0eb8cfb237?ixlib=rb-4.0.3&w=400";

/// Ten sample products, ids 1 through 10.
pub fn catalog() -> Vec<Product> {
    use ProductCategory::*;

    vec![
        product(
            1,
            "Syltherine",
            Chair,
            "IKEA",
            2_500_000,
            Some(3_500_000),
            "Stylish cafe chair with comfortable seating and modern design",
            CAFE_CHAIR_IMAGE,
            false,
            30,
            true,
        ),
        product(
            2,
            "Leviosa",
            Chair,
            "West Elm",
            2_500_000,
            None,
            "Stylish cafe chair perfect for any modern space and dining area",
            MODERN_CHAIR_IMAGE,
            false,
            0,
            true,
        ),
        product(
            3,
            "Lolito",
            Sofa,
            "Ashley",
            7_000_000,
            Some(14_000_000),
            "Luxury big sofa for comfortable family time and relaxation",
            SOFA_IMAGE,
            false,
            50,
            true,
        ),
        product(
            4,
            "Respira",
            Table,
            "CB2",
            500_000,
            None,
            "Outdoor bar table and stool set for patio and garden",
            PATIO_IMAGE,
            true,
            0,
            true,
        ),
        product(
            5,
            "Grifo",
            Bed,
            "Pottery Barn",
            1_500_000,
            None,
            "Night lamp with modern design for bedroom decoration",
            SOFA_IMAGE,
            true,
            0,
            false,
        ),
        product(
            6,
            "Muggo",
            Storage,
            "IKEA",
            150_000,
            None,
            "Small mug with elegant design for coffee and tea",
            MODERN_CHAIR_IMAGE,
            true,
            0,
            true,
        ),
        product(
            7,
            "Pingky",
            Sofa,
            "West Elm",
            7_000_000,
            Some(14_000_000),
            "Cute bed set with modern aesthetic and comfortable padding",
            SOFA_IMAGE,
            false,
            50,
            true,
        ),
        product(
            8,
            "Potty",
            Outdoor,
            "CB2",
            500_000,
            None,
            "Minimalist flower pot for outdoor spaces and gardens",
            PATIO_IMAGE,
            true,
            0,
            true,
        ),
        product(
            9,
            "Coastal Chair",
            Chair,
            "Pottery Barn",
            3_200_000,
            Some(4_000_000),
            "Comfortable coastal style chair for living room",
            CAFE_CHAIR_IMAGE,
            false,
            20,
            true,
        ),
        product(
            10,
            "Modern Desk",
            Table,
            "IKEA",
            1_800_000,
            None,
            "Sleek modern desk perfect for home office setup",
            PATIO_IMAGE,
            true,
            0,
            true,
        ),
    ]
}
