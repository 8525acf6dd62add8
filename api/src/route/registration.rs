use axum::routing::post;
use axum::Router;
use registry::AppRegistry;

use crate::handler::registration::register;

pub fn build_registration_routers() -> Router<AppRegistry> {
    Router::new().route("/register", post(register))
}
