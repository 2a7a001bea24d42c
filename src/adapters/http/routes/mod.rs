pub mod investor;
pub mod landing;
pub mod policy;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(landing::router())
        .merge(investor::router())
        .merge(policy::router())
}
