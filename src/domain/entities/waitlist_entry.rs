use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use super::user_type::UserType;

/// An early-access signup. Append-only: never updated or deleted once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub user_type: UserType,
    pub created_at: NaiveDateTime,
}
