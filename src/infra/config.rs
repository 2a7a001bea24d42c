use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub const DEV_SECRET_KEY: &str = "dev-key";

pub struct AppConfig {
    pub database_url: String,
    pub resend_api_key: SecretString,
    /// Base URL of the Resend API; overridable so the transport can be pointed at a stub.
    pub resend_api_url: Url,
    pub email_from: String,
    /// Shared secret mailed to investors who accept the confidentiality terms.
    pub pitch_password: SecretString,
    /// Signs the flash-message cookie.
    pub secret_key: SecretString,
    pub app_origin: Url,
    pub pitch_deck_url: Url,
    pub static_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: String = get_env("DATABASE_URL");
        let resend_api_key = SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let resend_api_url: Url = get_env_default(
            "RESEND_API_URL",
            Url::parse("https://api.resend.com").expect("default Resend URL is valid"),
        );
        let email_from: String =
            get_env_default("EMAIL_FROM", "Złap Pracę <support@zlapprace.pl>".to_string());
        let pitch_password = SecretString::new(get_env::<String>("PITCH_PASSWORD").into());
        let secret_key = SecretString::new(
            get_env_default("SECRET_KEY", DEV_SECRET_KEY.to_string()).into(),
        );
        let app_origin: Url = get_env_default(
            "APP_ORIGIN",
            Url::parse("https://zlapprace.pl").expect("default origin is valid"),
        );
        let pitch_deck_url: Url = get_env_default(
            "PITCH_DECK_URL",
            app_origin
                .join("static/pitch_deck.pdf")
                .expect("APP_ORIGIN must be a base URL"),
        );
        let static_dir: PathBuf = get_env_default("STATIC_DIR", PathBuf::from("static"));
        let port: u16 = get_env_default("PORT", 5000);
        let debug: bool = get_env_default("DEBUG", false);

        Self {
            database_url,
            resend_api_key,
            resend_api_url,
            email_from,
            pitch_password,
            secret_key,
            app_origin,
            pitch_deck_url,
            static_dir,
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            debug,
        }
    }
}
