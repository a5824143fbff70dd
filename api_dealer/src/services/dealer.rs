use common::error::{AppError, Res};
use db::dtos::dealership::DealershipProfileUpdate;
use db::models::dealership::Dealership;
use sqlx::SqlitePool;

use crate::dtos::vehicle::ProfileUpdateRequest;

/// Resolves the dealership profile behind a session user, failing when
/// the account has none.
pub async fn require_dealership(pool: &SqlitePool, user_id: i64) -> Res<Dealership> {
    db::dealership::get_dealership_by_user_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Dealership profile not found".to_string()))
}

pub async fn update_profile(
    pool: &SqlitePool,
    user_id: i64,
    req: ProfileUpdateRequest,
) -> Res<Dealership> {
    let dealership = require_dealership(pool, user_id).await?;

    db::dealership::update_profile(
        pool,
        dealership.id,
        DealershipProfileUpdate {
            business_name: req.business_name,
            phone: req.phone,
            address: req.address,
            city: req.city,
            postal_code: req.postal_code,
            website: req.website,
            operating_hours: req.operating_hours,
            description: req.description,
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Dealership profile not found".to_string()))
}
