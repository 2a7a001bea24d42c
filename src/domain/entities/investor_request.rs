use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// A request for the confidential pitch deck. Only stored once the
/// confidentiality terms were accepted, so `accepted` is always true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorRequest {
    pub id: Uuid,
    pub email: String,
    pub accepted: bool,
    pub created_at: NaiveDateTime,
}
