use super::handlers::{health, menu, orders};
use super::state::AppState;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, patch, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/menu-items",
            get(menu::list_menu_items).post(menu::create_menu_item),
        )
        .route(
            "/api/menu-items/{id}",
            put(menu::update_menu_item).delete(menu::delete_menu_item),
        )
        .route("/api/menu-items/{id}/status", patch(menu::toggle_menu_item))
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/{id}", axum::routing::delete(orders::delete_order))
        .route("/api/orders/{id}/status", patch(orders::update_order_status))
        .fallback(health::not_found)
        .method_not_allowed_fallback(health::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
