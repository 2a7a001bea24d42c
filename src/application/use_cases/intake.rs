use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::{
    app_error::AppResult,
    domain::entities::{investor_request::InvestorRequest, waitlist_entry::WaitlistEntry},
    use_cases::{
        notifier::Notifier,
        waitlist::{NewInvestorRequest, NewWaitlistEntry, WaitlistRepo},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
}

/// Result of a stored signup. The confirmation email is best-effort, so a
/// failed delivery still counts as a successful signup.
#[derive(Debug, Clone)]
pub struct SignupReceipt {
    pub entry: WaitlistEntry,
    pub confirmation: Delivery,
}

/// Form intake: validate, store, then notify. The store write is the
/// authoritative step; nothing is rolled back when mail fails afterwards.
pub struct IntakeUseCases {
    repo: Arc<dyn WaitlistRepo>,
    notifier: Arc<Notifier>,
}

impl IntakeUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, notifier: Arc<Notifier>) -> Self {
        Self { repo, notifier }
    }

    #[instrument(skip(self))]
    pub async fn submit_waitlist_signup(
        &self,
        name: &str,
        email: &str,
        user_type: &str,
    ) -> AppResult<SignupReceipt> {
        let signup = NewWaitlistEntry::new(name, email, user_type).inspect_err(|err| {
            warn!(stage = "validating", error = %err, "Waitlist signup rejected");
        })?;

        let entry = self
            .repo
            .create_waitlist_entry(&signup)
            .await
            .inspect_err(|err| {
                error!(stage = "persisting", error = %err, "Waitlist signup not stored");
            })?;
        info!(stage = "persisting", entry_id = %entry.id, "Waitlist entry stored");

        let confirmation = match self
            .notifier
            .send_confirmation(&entry.email, entry.name.as_deref(), entry.user_type)
            .await
        {
            Ok(()) => Delivery::Sent,
            Err(err) => {
                warn!(
                    stage = "notifying",
                    entry_id = %entry.id,
                    error = %err,
                    "Confirmation email failed, signup kept"
                );
                Delivery::Failed
            }
        };

        Ok(SignupReceipt {
            entry,
            confirmation,
        })
    }

    /// Unlike the waitlist flow, a failed pitch-deck email is returned to the
    /// caller even though the request has already been stored.
    #[instrument(skip(self))]
    pub async fn submit_investor_access(
        &self,
        email: &str,
        accepted_confidentiality: bool,
    ) -> AppResult<InvestorRequest> {
        let request = NewInvestorRequest::new(email, accepted_confidentiality).inspect_err(|err| {
            warn!(stage = "validating", error = %err, "Investor request rejected");
        })?;

        let stored = self
            .repo
            .create_investor_request(&request)
            .await
            .inspect_err(|err| {
                error!(stage = "persisting", error = %err, "Investor request not stored");
            })?;
        info!(stage = "persisting", request_id = %stored.id, "Investor request stored");

        self.notifier
            .send_pitch_password(&stored.email)
            .await
            .inspect_err(|err| {
                error!(
                    stage = "notifying",
                    request_id = %stored.id,
                    error = %err,
                    "Pitch deck password email failed"
                );
            })?;

        Ok(stored)
    }

    pub async fn waitlist_count(&self) -> AppResult<i64> {
        self.repo.count_waitlist_entries().await
    }
}
