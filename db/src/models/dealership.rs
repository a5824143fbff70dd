use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Certification standing of a dealership, owned by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CertificationStatus {
    Pending,
    Active,
    Suspended,
}

impl CertificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationStatus::Pending => "pending",
            CertificationStatus::Active => "active",
            CertificationStatus::Suspended => "suspended",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Dealership {
    pub id: i64,
    pub user_id: i64,
    pub business_name: String,
    pub registration_number: String,
    pub license_number: Option<String>,
    pub year_established: Option<i64>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub website: Option<String>,
    pub operating_hours: Option<String>,
    pub description: Option<String>,
    pub certification_status: CertificationStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Public directory row: an actively certified dealership and how many
/// verified vehicles it currently lists.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CertifiedDealership {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub dealership: Dealership,
    pub vehicle_count: i64,
}

/// Admin listing row: dealership joined with its owning user and the
/// number of vehicles it has listed.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DealershipOverview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub dealership: Dealership,
    pub username: String,
    pub owner_email: String,
    pub vehicle_count: i64,
}
