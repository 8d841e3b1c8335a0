//! Storefront routes rendering the product catalog.
//!
//! - `GET /`               - redirect to the product list
//! - `GET /products`       - product list page (context key `products`)
//! - `GET /products/{id}`  - product detail page (context key `product`)

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use tera::{Context, Tera};
use tracing::{error, warn};

use shopfront_core::domain::product::ProductId;
use shopfront_core::errors::CatalogError;
use shopfront_db::ProductReader;

#[derive(Clone)]
pub struct ShopState {
    reader: ProductReader,
    templates: Arc<Tera>,
}

/// Initialize the Tera engine with storefront templates.
fn init_templates() -> Arc<Tera> {
    let mut tera = match Tera::new("templates/shop/**/*") {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "failed to load shop templates from filesystem, using empty Tera instance");
            Tera::default()
        }
    };

    // Embedded fallbacks in case filesystem templates are not available
    tera.add_raw_template(
        "product_list.html",
        include_str!("../../../templates/shop/product_list.html"),
    )
    .ok();
    tera.add_raw_template(
        "product_detail.html",
        include_str!("../../../templates/shop/product_detail.html"),
    )
    .ok();

    Arc::new(tera)
}

pub fn router(reader: ProductReader) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/products") }))
        .route("/products", get(product_list_page))
        .route("/products/{id}", get(product_detail_page))
        .with_state(ShopState { reader, templates: init_templates() })
}

/// Render the product list page with every product in the catalog.
async fn product_list_page(
    State(state): State<ShopState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let products = state.reader.list().await.map_err(read_failure)?;

    let mut context = Context::new();
    context.insert("products", &products);
    render(&state.templates, "product_list.html", &context)
}

/// Render the detail page for one product.
async fn product_detail_page(
    Path(id): Path<String>,
    State(state): State<ShopState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    // The router hands over the raw path segment; a segment that does not
    // parse as an identifier cannot name a product, so it reads as absent.
    let id = match id.parse::<i64>() {
        Ok(value) => ProductId(value),
        Err(_) => return Err(not_found_page()),
    };

    let product = match state.reader.get(id).await {
        Ok(product) => product,
        Err(CatalogError::NotFound { .. }) => return Err(not_found_page()),
        Err(err) => return Err(read_failure(err)),
    };

    let mut context = Context::new();
    context.insert("product", &product);
    render(&state.templates, "product_detail.html", &context)
}

fn render(
    templates: &Tera,
    name: &str,
    context: &Context,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    templates.render(name, context).map(Html).map_err(|err| {
        error!(error = %err, template = name, "template rendering failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Error</h1><p>The page could not be rendered.</p>".to_string()),
        )
    })
}

fn not_found_page() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("<h1>Product not found</h1>".to_string()))
}

fn read_failure(err: CatalogError) -> (StatusCode, Html<String>) {
    error!(error = %err, "catalog read failed");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html("<h1>Service unavailable</h1><p>Please retry shortly.</p>".to_string()),
    )
}
