use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Verification standing of a vehicle listing.
///
/// `pending_verification` is the initial state; only the admin moves a
/// vehicle to `verified` or `rejected`. Approving a previously rejected
/// vehicle is allowed and replaces its checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum VehicleStatus {
    PendingVerification,
    Verified,
    Rejected,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::PendingVerification => "pending_verification",
            VehicleStatus::Verified => "verified",
            VehicleStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending_verification" => Some(VehicleStatus::PendingVerification),
            "verified" => Some(VehicleStatus::Verified),
            "rejected" => Some(VehicleStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub dealership_id: i64,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub mileage: i64,
    pub price: f64,
    pub color: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub previous_owners: i64,
    pub registration_authority: Option<String>,
    pub plate_number: Option<String>,
    pub engine_number: Option<String>,
    pub tare_weight: Option<i64>,
    pub date_liability_licensing: Option<String>,
    pub vehicle_status: Option<String>,
    pub date_liable_registration: Option<String>,
    /// JSON-serialized list of licence numbers.
    pub license_numbers: Option<String>,
    pub engine_type: Option<String>,
    pub engine_capacity: Option<String>,
    pub service_history: Option<String>,
    pub accident_history: Option<String>,
    pub recall_information: Option<String>,
    pub additional_features: Option<String>,
    pub description: Option<String>,
    /// JSON-serialized list of image URLs.
    pub image_urls: Option<String>,
    pub qr_code_path: Option<String>,
    pub status: VehicleStatus,
    pub verification_notes: Option<String>,
    pub verified_by: Option<i64>,
    pub verified_at: Option<NaiveDateTime>,
    pub rejection_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Catalog/search row: the vehicle plus its dealership's public identity.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct VehicleSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub business_name: String,
    pub dealer_certification: super::dealership::CertificationStatus,
}

/// Detail row: the vehicle, the dealership's contact card, the
/// verification checklist flags (absent until first approval) and the
/// verifying admin's username.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct VehicleDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub business_name: String,
    pub dealer_certification: super::dealership::CertificationStatus,
    pub dealer_phone: String,
    pub dealer_email: String,
    pub dealer_website: Option<String>,
    pub vin_verified: Option<bool>,
    pub mileage_verified: Option<bool>,
    pub plate_number_verified: Option<bool>,
    pub engine_number_verified: Option<bool>,
    pub service_history_verified: Option<bool>,
    pub ownership_verified: Option<bool>,
    pub accident_history_verified: Option<bool>,
    pub recall_verified: Option<bool>,
    pub registration_verified: Option<bool>,
    pub engine_specs_verified: Option<bool>,
    pub verified_by_username: Option<String>,
}

/// Admin verified-vehicles row: adds the username of the admin who
/// performed the approval.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct VerifiedVehicle {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub business_name: String,
    pub verified_by_username: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct VerificationChecklist {
    pub id: i64,
    pub vehicle_id: i64,
    pub vin_verified: bool,
    pub mileage_verified: bool,
    pub plate_number_verified: bool,
    pub engine_number_verified: bool,
    pub service_history_verified: bool,
    pub ownership_verified: bool,
    pub accident_history_verified: bool,
    pub recall_verified: bool,
    pub registration_verified: bool,
    pub engine_specs_verified: bool,
    pub created_at: NaiveDateTime,
}
