use axum::routing::get;
use axum::Router;
use registry::AppRegistry;

use crate::handler::auth::{login, show_login_page, show_signup_page, signup};

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .route("/signup", get(show_signup_page).post(signup))
        .route("/login", get(show_login_page).post(login))
}
