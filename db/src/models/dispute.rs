use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum DisputeStatus {
    Submitted,
    UnderReview,
    Resolved,
    Closed,
}

impl DisputeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeStatus::Submitted => "submitted",
            DisputeStatus::UnderReview => "under_review",
            DisputeStatus::Resolved => "resolved",
            DisputeStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Dispute {
    pub id: i64,
    pub customer_id: i64,
    pub vehicle_id: i64,
    pub discrepancy_type: String,
    pub description: String,
    pub supporting_documents: Option<String>,
    pub status: DisputeStatus,
    pub admin_response: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

/// Customer-facing row: dispute joined with the disputed vehicle's
/// identifying fields.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DisputeWithVehicle {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub dispute: Dispute,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i64,
}

/// Admin-facing row: adds the reporting customer's name.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DisputeOverview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub dispute: Dispute,
    pub customer_name: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i64,
}
