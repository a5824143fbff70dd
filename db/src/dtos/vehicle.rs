use serde::{Deserialize, Serialize};

pub struct VehicleCreateRequest {
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
}

/// The ten facts an admin asserts when approving a vehicle. Flags left
/// out of the request default to unchecked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistFlags {
    #[serde(default)]
    pub vin_verified: bool,
    #[serde(default)]
    pub mileage_verified: bool,
    #[serde(default)]
    pub plate_number_verified: bool,
    #[serde(default)]
    pub engine_number_verified: bool,
    #[serde(default)]
    pub service_history_verified: bool,
    #[serde(default)]
    pub ownership_verified: bool,
    #[serde(default)]
    pub accident_history_verified: bool,
    #[serde(default)]
    pub recall_verified: bool,
    #[serde(default)]
    pub registration_verified: bool,
    #[serde(default)]
    pub engine_specs_verified: bool,
}

/// Catalog search filter. `None` means "no constraint"; the `body_type`
/// sentinel value "all" is normalized to `None` before it reaches here.
#[derive(Debug, Clone, Default)]
pub struct VehicleSearchFilter {
    pub vin: Option<String>,
    pub make: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub body_type: Option<String>,
}
