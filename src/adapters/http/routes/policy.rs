use axum::{Router, extract::Query, response::Html, routing::get};
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, pages},
    app_error::AppResult,
    application::language::Locale,
};

#[derive(Deserialize)]
struct PolicyQuery {
    lang: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/confidentiality-policy", get(confidentiality_policy))
}

async fn confidentiality_policy(Query(query): Query<PolicyQuery>) -> AppResult<Html<String>> {
    let locale = Locale::from_raw(query.lang.as_deref());
    Ok(Html(pages::confidentiality(locale)?))
}
