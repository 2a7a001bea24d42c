use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::{infra::config::AppConfig, use_cases::intake::IntakeUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub intake_use_cases: Arc<IntakeUseCases>,
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Derives the cookie signing key from `SECRET_KEY`, which may be shorter
/// than the 32 bytes key expansion requires.
pub fn cookie_key(secret: &SecretString) -> Key {
    let digest = Sha256::digest(secret.expose_secret().as_bytes());
    Key::derive_from(digest.as_slice())
}
