use std::path::Path;

use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::Router;
use registry::AppRegistry;
use tower_http::services::ServeDir;

pub mod auth;
pub mod event;
pub mod health;
pub mod registration;

use self::event::build_event_routers;
use self::health::build_health_check_routers;
use self::registration::build_registration_routers;

/// The full application router: dynamic operations first, everything else
/// falls through to the static asset directory.
pub fn routes(assets_root: &Path) -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(auth::routes())
        .merge(build_event_routers())
        .merge(build_registration_routers())
        .fallback_service(
            ServeDir::new(assets_root).not_found_service(not_found.into_service()),
        )
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
