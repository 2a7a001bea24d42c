use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect},
    routing::post,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

use crate::adapters::http::{
    app_state::AppState,
    flash::{self, Flash},
};

#[derive(Deserialize)]
struct InvestorAccessForm {
    #[serde(default)]
    email: String,
    confidentiality: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/investor-access", post(investor_access))
}

/// HTML checkboxes are only submitted when ticked, usually as "on".
fn is_checked(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(v.to_lowercase().as_str(), "false" | "0" | "off" | "no"),
    }
}

async fn investor_access(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<InvestorAccessForm>,
) -> impl IntoResponse {
    let accepted = is_checked(form.confidentiality.as_deref());
    let outcome = match app_state
        .intake_use_cases
        .submit_investor_access(&form.email, accepted)
        .await
    {
        Ok(_) => Flash::PasswordSent,
        Err(err) => Flash::for_error(&err),
    };
    (flash::push(jar, outcome), Redirect::to("/"))
}
