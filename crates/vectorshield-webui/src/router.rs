//! Axum router wiring.
//!
//! Routes: `/`, `/favicon.ico`, `/metrics`, and `/static/*` from the static
//! directory. Instrumentation wraps everything, including host rejections.
//! Misses (router fallback and static files that do not exist) go through
//! `ui::not_found` so they share one metrics label. CORS is a route layer so
//! preflights to unknown paths fall through to that fallback as well.

use axum::{handler::HandlerWithoutStateExt, middleware::from_fn_with_state, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{app_state::AppState, middleware, ops, ui};

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.cfg().static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(ui::not_found.into_service());

    let mut router = Router::new()
        .route("/", get(ui::index))
        .route("/favicon.ico", get(ui::favicon))
        .route("/metrics", get(ops::metrics))
        .nest_service("/static", static_files);

    if state.cfg().environment.is_development() {
        router = router.route_layer(CorsLayer::permissive());
    }

    router
        .fallback(ui::not_found)
        .layer(from_fn_with_state(state.clone(), middleware::trusted_host::enforce))
        .layer(from_fn_with_state(state.clone(), middleware::instrument::instrument))
        .with_state(state)
}
