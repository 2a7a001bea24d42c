use async_trait::async_trait;

use crate::{
    app_error::{AppResult, ValidationError},
    domain::entities::{
        investor_request::InvestorRequest, user_type::UserType, waitlist_entry::WaitlistEntry,
    },
};

/// A waitlist signup that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    name: Option<String>,
    email: String,
    user_type: UserType,
}

impl NewWaitlistEntry {
    /// Trims the inputs; a blank name is stored as absent.
    pub fn new(name: &str, email: &str, user_type: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if user_type.trim().is_empty() {
            return Err(ValidationError::MissingUserType);
        }
        let user_type: UserType = user_type
            .parse()
            .map_err(ValidationError::UnknownUserType)?;
        let name = Some(name.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self {
            name,
            email: email.to_string(),
            user_type,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }
}

/// An investor request with a non-empty email and accepted confidentiality terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvestorRequest {
    email: String,
}

impl NewInvestorRequest {
    pub fn new(email: &str, accepted: bool) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() || !accepted {
            return Err(ValidationError::MissingConsent);
        }
        Ok(Self {
            email: email.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Append-only store for signups and investor requests.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn create_waitlist_entry(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
    async fn create_investor_request(
        &self,
        request: &NewInvestorRequest,
    ) -> AppResult<InvestorRequest>;
    /// Display-only; may lag behind concurrent inserts.
    async fn count_waitlist_entries(&self) -> AppResult<i64>;
}
