// Route definitions

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

mod api;

pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route("/esim", get(api::get_plans))
        .route("/countries", get(api::search_countries))
        .route("/parse", get(api::parse_search))
        .with_state(app_state);

    Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
}
