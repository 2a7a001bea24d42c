use crate::{
    adapters::{
        email::resend::ResendEmailSender,
        http::app_state::{AppState, cookie_key},
    },
    infra::{
        config::{AppConfig, DEV_SECRET_KEY},
        postgres_persistence,
    },
    use_cases::{
        intake::IntakeUseCases,
        notifier::{EmailSender, Notifier},
        waitlist::WaitlistRepo,
    },
};
use secrecy::{ExposeSecret, SecretString};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if config.secret_key.expose_secret() == DEV_SECRET_KEY {
        tracing::warn!("SECRET_KEY not set, flash cookies are signed with the development key");
    }

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let email = Arc::new(ResendEmailSender::new(
        SecretString::new(config.resend_api_key.expose_secret().into()),
        &config.resend_api_url,
        config.email_from.clone(),
    )?) as Arc<dyn EmailSender>;

    let notifier = Arc::new(Notifier::new(email, &config));
    let intake_use_cases = IntakeUseCases::new(postgres_arc as Arc<dyn WaitlistRepo>, notifier);
    let cookie_key = cookie_key(&config.secret_key);

    Ok(AppState {
        config: Arc::new(config),
        intake_use_cases: Arc::new(intake_use_cases),
        cookie_key,
    })
}

pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("zlap_waitlist={default_level},tower_http={default_level}").into()
    });

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = std::env::var("LOG_FILE")
        .ok()
        .and_then(|path| File::create(path).ok())
        .map(|file| {
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true)
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
