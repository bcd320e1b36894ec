//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Furniture Store API",
        version = "1.0.0",
        description = "Furniture catalog with filtering, sorting, pagination and statistics",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Furniture catalog endpoints")
    )
)]
pub struct ApiDoc;
