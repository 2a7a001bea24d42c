use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

use crate::{
    adapters::http::{
        app_state::AppState,
        flash::{self, Flash},
        pages,
    },
    app_error::AppResult,
};

#[derive(Deserialize)]
struct SignupForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default, rename = "type")]
    user_type: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index).post(join_waitlist))
}

async fn index(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<impl IntoResponse> {
    let (jar, flash) = flash::take(jar);
    let waitlist_count = app_state.intake_use_cases.waitlist_count().await?;
    let html = pages::index(waitlist_count, flash)?;
    Ok((jar, Html(html)))
}

async fn join_waitlist(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<SignupForm>,
) -> impl IntoResponse {
    // A failed confirmation email still counts as a successful signup.
    let outcome = match app_state
        .intake_use_cases
        .submit_waitlist_signup(&form.name, &form.email, &form.user_type)
        .await
    {
        Ok(_) => Flash::WaitlistJoined,
        Err(err) => Flash::for_error(&err),
    };
    (flash::push(jar, outcome), Redirect::to("/"))
}
