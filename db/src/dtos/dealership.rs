pub struct DealershipCreateRequest {
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
}

/// Fields a dealership may change about itself. Certification status is
/// deliberately absent; only the admin touches it.
pub struct DealershipProfileUpdate {
    pub business_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub website: Option<String>,
    pub operating_hours: Option<String>,
    pub description: Option<String>,
}
