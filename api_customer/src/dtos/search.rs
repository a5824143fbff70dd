use db::models::vehicle::VehicleSummary;
use serde::{Deserialize, Serialize};

/// Raw catalog query string. Numeric fields arrive as strings straight
/// from form inputs; anything empty or unparseable simply drops the
/// filter, it never fails the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub vin: Option<String>,
    pub make: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    #[serde(rename = "bodyType")]
    pub body_type: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub vehicles: Vec<VehicleSummary>,
    pub total_vehicles: i64,
    pub total_pages: i64,
    pub page: i64,
}
