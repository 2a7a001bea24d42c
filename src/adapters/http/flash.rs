//! One-shot status messages carried across the post/redirect/get cycle in a
//! signed cookie.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

use crate::app_error::{AppError, ErrorCode};

const FLASH_COOKIE: &str = "flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flash {
    WaitlistJoined,
    MissingFields,
    PasswordSent,
    MissingConsent,
    StorageFailure,
    PasswordEmailFailed,
    UnexpectedFailure,
}

impl Flash {
    const ALL: [Flash; 7] = [
        Flash::WaitlistJoined,
        Flash::MissingFields,
        Flash::PasswordSent,
        Flash::MissingConsent,
        Flash::StorageFailure,
        Flash::PasswordEmailFailed,
        Flash::UnexpectedFailure,
    ];

    /// Cookie value. Kept ASCII so it survives the Set-Cookie header as is.
    pub fn code(&self) -> &'static str {
        match self {
            Flash::WaitlistJoined => "waitlist_joined",
            Flash::MissingFields => "missing_fields",
            Flash::PasswordSent => "password_sent",
            Flash::MissingConsent => "missing_consent",
            Flash::StorageFailure => "storage_failure",
            Flash::PasswordEmailFailed => "password_email_failed",
            Flash::UnexpectedFailure => "unexpected_failure",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flash| flash.code() == code)
    }

    pub fn level(&self) -> FlashLevel {
        match self {
            Flash::WaitlistJoined | Flash::PasswordSent => FlashLevel::Success,
            _ => FlashLevel::Error,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Flash::WaitlistJoined => "Dziękujemy! Jesteś na liście.",
            Flash::MissingFields => "Proszę uzupełnić wszystkie wymagane pola.",
            Flash::PasswordSent => "Hasło zostało wysłane na email.",
            Flash::MissingConsent => "Musisz podać email i zaakceptować poufność.",
            Flash::StorageFailure => "Wystąpił błąd serwera. Spróbuj ponownie później.",
            Flash::PasswordEmailFailed => {
                "Nie udało się wysłać hasła. Spróbuj ponownie później."
            }
            Flash::UnexpectedFailure => "Coś poszło nie tak. Spróbuj ponownie później.",
        }
    }

    pub fn for_error(err: &AppError) -> Self {
        match err.code() {
            ErrorCode::MissingField => Flash::MissingFields,
            ErrorCode::MissingConsent => Flash::MissingConsent,
            ErrorCode::StorageError => Flash::StorageFailure,
            ErrorCode::NotificationError => Flash::PasswordEmailFailed,
            ErrorCode::InternalError => Flash::UnexpectedFailure,
        }
    }
}

pub fn push(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, flash.code()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::minutes(5))
        .build();
    jar.add(cookie)
}

/// Reads the pending flash, if any, and clears it so it is shown once.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let flash = Flash::from_code(cookie.value());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, flash)
}
