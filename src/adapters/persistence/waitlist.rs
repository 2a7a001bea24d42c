use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::{
        investor_request::InvestorRequest, user_type::UserType, waitlist_entry::WaitlistEntry,
    },
    use_cases::waitlist::{NewInvestorRequest, NewWaitlistEntry, WaitlistRepo},
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct WaitlistEntryDb {
    id: Uuid,
    name: Option<String>,
    email: String,
    user_type: String,
    created_at: NaiveDateTime,
}

impl TryFrom<WaitlistEntryDb> for WaitlistEntry {
    type Error = AppError;

    fn try_from(row: WaitlistEntryDb) -> Result<Self, Self::Error> {
        let user_type: UserType = row.user_type.parse().map_err(|err: String| {
            tracing::error!(entry_id = %row.id, error = %err, "Corrupt user_type in waitlist row");
            AppError::Database("Stored waitlist entry is invalid".into())
        })?;
        Ok(WaitlistEntry {
            id: row.id,
            name: row.name,
            email: row.email,
            user_type,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow, Debug)]
struct InvestorRequestDb {
    id: Uuid,
    email: String,
    accepted: bool,
    created_at: NaiveDateTime,
}

impl From<InvestorRequestDb> for InvestorRequest {
    fn from(row: InvestorRequestDb) -> Self {
        InvestorRequest {
            id: row.id,
            email: row.email,
            accepted: row.accepted,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn create_waitlist_entry(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let row = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
                INSERT INTO waitlist (id, name, email, user_type)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, email, user_type, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.name())
        .bind(entry.email())
        .bind(entry.user_type().as_str())
        .fetch_one(self.pool())
        .await?;
        row.try_into()
    }

    async fn create_investor_request(
        &self,
        request: &NewInvestorRequest,
    ) -> AppResult<InvestorRequest> {
        let row = sqlx::query_as::<_, InvestorRequestDb>(
            r#"
                INSERT INTO investors (id, email, accepted)
                VALUES ($1, $2, TRUE)
                RETURNING id, email, accepted, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.email())
        .fetch_one(self.pool())
        .await?;
        Ok(row.into())
    }

    async fn count_waitlist_entries(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}
