use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;

/// The add-vehicle multipart form: up to ten images plus the listing
/// fields. Field names mirror the add-vehicle form inputs.
#[derive(Debug, MultipartForm)]
pub struct AddVehicleForm {
    #[multipart(rename = "vehicleImages", limit = "5MB")]
    pub vehicle_images: Vec<TempFile>,
    pub vin: Text<String>,
    pub make: Text<String>,
    pub model: Text<String>,
    pub year: Text<i64>,
    pub mileage: Text<i64>,
    pub price: Text<f64>,
    pub color: Option<Text<String>>,
    #[multipart(rename = "bodyType")]
    pub body_type: Option<Text<String>>,
    #[multipart(rename = "fuelType")]
    pub fuel_type: Option<Text<String>>,
    pub transmission: Option<Text<String>>,
    #[multipart(rename = "previousOwners")]
    pub previous_owners: Option<Text<i64>>,
    #[multipart(rename = "registrationAuthority")]
    pub registration_authority: Option<Text<String>>,
    #[multipart(rename = "plateNumber")]
    pub plate_number: Option<Text<String>>,
    #[multipart(rename = "engineNumber")]
    pub engine_number: Option<Text<String>>,
    #[multipart(rename = "tareWeight")]
    pub tare_weight: Option<Text<i64>>,
    #[multipart(rename = "dateLiabilityLicensing")]
    pub date_liability_licensing: Option<Text<String>>,
    #[multipart(rename = "vehicleStatus")]
    pub vehicle_status: Option<Text<String>>,
    #[multipart(rename = "dateLiableRegistration")]
    pub date_liable_registration: Option<Text<String>>,
    #[multipart(rename = "licenseNumber1")]
    pub license_number_1: Option<Text<String>>,
    #[multipart(rename = "licenseNumber2")]
    pub license_number_2: Option<Text<String>>,
    #[multipart(rename = "licenseNumber3")]
    pub license_number_3: Option<Text<String>>,
    #[multipart(rename = "engineType")]
    pub engine_type: Option<Text<String>>,
    #[multipart(rename = "engineCapacity")]
    pub engine_capacity: Option<Text<String>>,
    #[multipart(rename = "serviceHistory")]
    pub service_history: Option<Text<String>>,
    #[multipart(rename = "accidentHistory")]
    pub accident_history: Option<Text<String>>,
    #[multipart(rename = "recallInformation")]
    pub recall_information: Option<Text<String>>,
    #[multipart(rename = "additionalFeatures")]
    pub additional_features: Option<Text<String>>,
    pub description: Option<Text<String>>,
}

#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub business_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub website: Option<String>,
    pub operating_hours: Option<String>,
    pub description: Option<String>,
}
