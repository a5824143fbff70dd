use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VinQuery {
    pub vin: Option<String>,
}
