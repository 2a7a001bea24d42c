use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

use crate::{
    app_error::AppResult,
    application::email_templates::{
        RenderedEmail, SiteLinks, confirmation_email, pitch_password_email,
    },
    domain::entities::user_type::UserType,
    infra::config::AppConfig,
};

/// Mail transport. Implementations report delivery problems as
/// `AppError::Notification`.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, email: &RenderedEmail) -> AppResult<()>;
}

/// Renders transactional mail and hands it to the transport.
pub struct Notifier {
    email: Arc<dyn EmailSender>,
    site: SiteLinks,
    pitch_password: SecretString,
}

impl Notifier {
    pub fn new(email: Arc<dyn EmailSender>, config: &AppConfig) -> Self {
        Self {
            email,
            site: SiteLinks {
                origin: config.app_origin.clone(),
                pitch_deck: config.pitch_deck_url.clone(),
            },
            pitch_password: SecretString::new(config.pitch_password.expose_secret().into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn send_confirmation(
        &self,
        to: &str,
        name: Option<&str>,
        user_type: UserType,
    ) -> AppResult<()> {
        let rendered = confirmation_email(&self.site, name, user_type)?;
        self.email.send(to, &rendered).await?;
        info!(to, "Confirmation email sent");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn send_pitch_password(&self, to: &str) -> AppResult<()> {
        let rendered = pitch_password_email(&self.site, self.pitch_password.expose_secret())?;
        self.email.send(to, &rendered).await?;
        info!(to, "Pitch deck password sent");
        Ok(())
    }
}
