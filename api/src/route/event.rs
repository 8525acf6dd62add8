use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::event::{add_event, events_data};

pub fn build_event_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/add-event", post(add_event))
        .route("/events-data", get(events_data))
}
