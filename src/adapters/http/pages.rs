use askama::Template;

use crate::{
    adapters::http::flash::Flash,
    app_error::{AppError, AppResult},
    application::language::Locale,
};

struct FlashView {
    level: &'static str,
    message: &'static str,
}

#[derive(Template)]
#[template(path = "pages/index.html")]
struct IndexPage {
    waitlist_count: i64,
    flash: Option<FlashView>,
}

#[derive(Template)]
#[template(path = "pages/confidentiality.html")]
struct ConfidentialityPage {
    lang: &'static str,
    english: bool,
}

fn render(template: &impl Template) -> AppResult<String> {
    template
        .render()
        .map_err(|e| AppError::Internal(format!("page template failed to render: {e}")))
}

pub fn index(waitlist_count: i64, flash: Option<Flash>) -> AppResult<String> {
    render(&IndexPage {
        waitlist_count,
        flash: flash.map(|f| FlashView {
            level: f.level().as_str(),
            message: f.message(),
        }),
    })
}

pub fn confidentiality(locale: Locale) -> AppResult<String> {
    render(&ConfidentialityPage {
        lang: locale.as_str(),
        english: locale == Locale::En,
    })
}
