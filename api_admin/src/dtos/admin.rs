use db::dtos::vehicle::ChecklistFlags;
use db::models::dealership::CertificationStatus;
use db::models::dispute::DisputeStatus;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyAction {
    Approve,
    Reject,
}

/// Verification decision payload. The checklist flags sit at the top
/// level of the JSON body next to the action and notes.
#[derive(Debug, Deserialize)]
pub struct VerifyVehicleRequest {
    pub action: VerifyAction,
    pub notes: Option<String>,
    pub rejection_reason: Option<String>,
    #[serde(flatten)]
    pub checklist: ChecklistFlags,
}

#[derive(Debug, Deserialize)]
pub struct CertificationUpdateRequest {
    pub status: CertificationStatus,
}

#[derive(Debug, Deserialize)]
pub struct DisputeUpdateRequest {
    pub status: DisputeStatus,
    pub admin_response: Option<String>,
}
