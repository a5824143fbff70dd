use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DisputeRequest {
    pub vehicle_id: i64,
    pub discrepancy_type: String,
    pub description: String,
    pub supporting_documents: Option<String>,
}

/// Query used to prefill the report form from a vehicle page.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<i64>,
}
