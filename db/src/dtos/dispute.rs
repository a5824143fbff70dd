pub struct DisputeCreateRequest {
    pub customer_id: i64,
    pub vehicle_id: i64,
    pub discrepancy_type: String,
    pub description: String,
    pub supporting_documents: Option<String>,
}
