//! In-memory mock implementations of the store and mail ports.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use secrecy::SecretString;
use std::sync::Mutex;
use url::Url;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::email_templates::RenderedEmail,
    domain::entities::{
        investor_request::InvestorRequest, user_type::UserType, waitlist_entry::WaitlistEntry,
    },
    infra::config::AppConfig,
    use_cases::{
        notifier::EmailSender,
        waitlist::{NewInvestorRequest, NewWaitlistEntry, WaitlistRepo},
    },
};

// ============================================================================
// Configuration
// ============================================================================

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: String::new(),
        resend_api_key: SecretString::new("re_test_key".into()),
        resend_api_url: Url::parse("http://127.0.0.1:9/").unwrap(),
        email_from: "Złap Pracę <support@zlapprace.test>".to_string(),
        pitch_password: SecretString::new("test-pitch-password".into()),
        secret_key: SecretString::new("test-secret-key".into()),
        app_origin: Url::parse("https://zlapprace.test").unwrap(),
        pitch_deck_url: Url::parse("https://zlapprace.test/static/pitch_deck.pdf").unwrap(),
        static_dir: "static".into(),
        bind_addr: "127.0.0.1:5000".parse().unwrap(),
        debug: false,
    }
}

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    waitlist: Mutex<Vec<WaitlistEntry>>,
    investors: Mutex<Vec<InvestorRequest>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `count` provider signups directly, bypassing validation.
    pub fn seed_waitlist(&self, count: usize) {
        let mut waitlist = self.waitlist.lock().unwrap();
        for i in 0..count {
            let created_at = next_timestamp(waitlist.last().map(|e| e.created_at));
            waitlist.push(WaitlistEntry {
                id: Uuid::new_v4(),
                name: None,
                email: format!("seed{i}@example.com"),
                user_type: UserType::Provider,
                created_at,
            });
        }
    }

    pub fn waitlist(&self) -> Vec<WaitlistEntry> {
        self.waitlist.lock().unwrap().clone()
    }

    pub fn investors(&self) -> Vec<InvestorRequest> {
        self.investors.lock().unwrap().clone()
    }
}

/// Never earlier than the previous insert, mirroring the store's ordering guarantee.
fn next_timestamp(last: Option<NaiveDateTime>) -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    last.map_or(now, |last| last.max(now))
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn create_waitlist_entry(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let mut waitlist = self.waitlist.lock().unwrap();
        let stored = WaitlistEntry {
            id: Uuid::new_v4(),
            name: entry.name().map(str::to_string),
            email: entry.email().to_string(),
            user_type: entry.user_type(),
            created_at: next_timestamp(waitlist.last().map(|e| e.created_at)),
        };
        waitlist.push(stored.clone());
        Ok(stored)
    }

    async fn create_investor_request(
        &self,
        request: &NewInvestorRequest,
    ) -> AppResult<InvestorRequest> {
        let mut investors = self.investors.lock().unwrap();
        let stored = InvestorRequest {
            id: Uuid::new_v4(),
            email: request.email().to_string(),
            accepted: true,
            created_at: next_timestamp(investors.last().map(|r| r.created_at)),
        };
        investors.push(stored.clone());
        Ok(stored)
    }

    async fn count_waitlist_entries(&self) -> AppResult<i64> {
        Ok(self.waitlist.lock().unwrap().len() as i64)
    }
}

/// Store whose every operation fails as if the database were down.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn create_waitlist_entry(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(AppError::Database("Database unavailable".into()))
    }

    async fn create_investor_request(
        &self,
        _request: &NewInvestorRequest,
    ) -> AppResult<InvestorRequest> {
        Err(AppError::Database("Database unavailable".into()))
    }

    async fn count_waitlist_entries(&self) -> AppResult<i64> {
        Err(AppError::Database("Database unavailable".into()))
    }
}

// ============================================================================
// Email senders
// ============================================================================

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub email: RenderedEmail,
}

/// Records every message instead of delivering it.
#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<SentEmail>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, to: &str, email: &RenderedEmail) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            email: email.clone(),
        });
        Ok(())
    }
}

/// Transport that always fails, as on an auth error or timeout.
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _to: &str, _email: &RenderedEmail) -> AppResult<()> {
        Err(AppError::Notification("connection refused".into()))
    }
}
