use askama::Template;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::language::Locale,
    domain::entities::user_type::UserType,
};

const BRAND_NAME: &str = "Złap Pracę";
const COPYRIGHT_YEAR: &str = "2026";

/// Subject, plain-text and HTML bodies of one outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Public links embedded in outgoing mail.
#[derive(Debug, Clone)]
pub struct SiteLinks {
    pub origin: Url,
    pub pitch_deck: Url,
}

impl SiteLinks {
    fn origin_label(&self) -> &str {
        self.origin.as_str().trim_end_matches('/')
    }
}

pub fn role_label(user_type: UserType, locale: Locale) -> &'static str {
    match (user_type, locale) {
        (UserType::Client, Locale::Pl) => "Klient",
        (UserType::Provider, Locale::Pl) => "Fachowiec",
        (UserType::Client, Locale::En) => "Client",
        (UserType::Provider, Locale::En) => "Service Provider",
    }
}

#[derive(Template)]
#[template(path = "email/confirmation.html")]
struct ConfirmationHtml<'a> {
    brand: &'a str,
    name: &'a str,
    role_pl: &'a str,
    role_en: &'a str,
    site_url: &'a str,
    year: &'a str,
}

#[derive(Template)]
#[template(path = "email/confirmation.txt")]
struct ConfirmationText<'a> {
    brand: &'a str,
    role_pl: &'a str,
    role_en: &'a str,
    site_url: &'a str,
}

#[derive(Template)]
#[template(path = "email/pitch_password.html")]
struct PitchPasswordHtml<'a> {
    brand: &'a str,
    password: &'a str,
    pitch_deck_url: &'a str,
}

#[derive(Template)]
#[template(path = "email/pitch_password.txt")]
struct PitchPasswordText<'a> {
    brand: &'a str,
    password: &'a str,
    pitch_deck_url: &'a str,
}

fn render(template: &impl Template) -> AppResult<String> {
    template
        .render()
        .map_err(|e| AppError::Internal(format!("email template failed to render: {e}")))
}

/// Bilingual waitlist confirmation. The subject is Polish; the body carries
/// the Polish text followed by its English translation.
pub fn confirmation_email(
    site: &SiteLinks,
    name: Option<&str>,
    user_type: UserType,
) -> AppResult<RenderedEmail> {
    let role_pl = role_label(user_type, Locale::Pl);
    let role_en = role_label(user_type, Locale::En);
    let site_url = site.origin_label();

    let html = render(&ConfirmationHtml {
        brand: BRAND_NAME,
        name: name.unwrap_or_default(),
        role_pl,
        role_en,
        site_url,
        year: COPYRIGHT_YEAR,
    })?;
    let text = render(&ConfirmationText {
        brand: BRAND_NAME,
        role_pl,
        role_en,
        site_url,
    })?;

    Ok(RenderedEmail {
        subject: format!("{BRAND_NAME} – Potwierdzenie dołączenia"),
        text,
        html,
    })
}

pub fn pitch_password_email(site: &SiteLinks, password: &str) -> AppResult<RenderedEmail> {
    let pitch_deck_url = site.pitch_deck.as_str();

    let html = render(&PitchPasswordHtml {
        brand: BRAND_NAME,
        password,
        pitch_deck_url,
    })?;
    let text = render(&PitchPasswordText {
        brand: BRAND_NAME,
        password,
        pitch_deck_url,
    })?;

    Ok(RenderedEmail {
        subject: format!("{BRAND_NAME} – Hasło do Pitch Deck"),
        text,
        html,
    })
}
