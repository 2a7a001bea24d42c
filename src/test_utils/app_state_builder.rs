//! Test app state builder for HTTP-level testing.

use std::sync::Arc;

use crate::{
    adapters::http::app_state::{AppState, cookie_key},
    test_utils::{InMemoryWaitlistRepo, RecordingEmailSender, test_config},
    use_cases::{
        intake::IntakeUseCases,
        notifier::{EmailSender, Notifier},
        waitlist::WaitlistRepo,
    },
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo, sender) = TestAppStateBuilder::new().build_with_mocks();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom store (e.g. one that always fails).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Set a custom email sender (e.g. one that always fails).
    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Create app state backed by an in-memory store and a recording sender.
    /// A sender set through `with_email_sender` takes precedence; the returned
    /// recorder then stays empty.
    pub fn build_with_mocks(
        self,
    ) -> (
        AppState,
        Arc<InMemoryWaitlistRepo>,
        Arc<RecordingEmailSender>,
    ) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let recorder = Arc::new(RecordingEmailSender::new());
        let sender: Arc<dyn EmailSender> = match self.email_sender.clone() {
            Some(sender) => sender,
            None => recorder.clone(),
        };

        let app_state = self.with_repo(repo.clone()).with_email_sender(sender).build();

        (app_state, repo, recorder)
    }

    pub fn build(self) -> AppState {
        let config = test_config();
        let repo: Arc<dyn WaitlistRepo> = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::new()));
        let email_sender: Arc<dyn EmailSender> = self
            .email_sender
            .unwrap_or_else(|| Arc::new(RecordingEmailSender::new()));

        let notifier = Arc::new(Notifier::new(email_sender, &config));
        let intake_use_cases = Arc::new(IntakeUseCases::new(repo, notifier));
        let cookie_key = cookie_key(&config.secret_key);

        AppState {
            config: Arc::new(config),
            intake_use_cases,
            cookie_key,
        }
    }
}
