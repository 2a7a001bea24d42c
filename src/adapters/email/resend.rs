use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::email_templates::RenderedEmail,
    use_cases::notifier::EmailSender,
};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
    endpoint: Url,
    from: String,
}

impl ResendEmailSender {
    pub fn new(api_key: SecretString, api_url: &Url, from: String) -> AppResult<Self> {
        let endpoint = api_url
            .join("emails")
            .map_err(|e| AppError::Internal(format!("invalid Resend API URL: {e}")))?;
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            endpoint,
            from,
        })
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, email: &RenderedEmail) -> AppResult<()> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        };
        self.client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Notification(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Notification(e.to_string()))?;
        Ok(())
    }
}
