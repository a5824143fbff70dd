use actix_web::{Responder, get, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::vin;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::vehicle::VinQuery;

/// QR/VIN search endpoint: an exact VIN lookup against the verified
/// stock. Without a `vin` parameter it reports `searched: false` so the
/// search page can render empty.
#[get("/search/vin")]
pub async fn get_search_vin(
    query: web::Query<VinQuery>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;

    let Some(vin) = query.into_inner().vin.filter(|vin| !vin.trim().is_empty()) else {
        return Success::ok(serde_json::json!({ "searched": false, "vehicle": null }));
    };

    let vin = vin.trim().to_uppercase();
    let vehicle = db::vehicle::get_verified_by_vin(db_pool, &vin).await?;
    Success::ok(serde_json::json!({
        "searched": true,
        "searched_vin": vin,
        "vehicle": vehicle,
    }))
}

/// Exact-VIN detail lookup.
///
/// # Input
/// - `path`: 17-character VIN (letters I, O and Q are never valid)
///
/// # Output
/// - Success: the verified vehicle carrying that VIN
/// - Error: 400 for a malformed VIN, 404 when no verified vehicle
///   matches
#[get("/vin/{vin}")]
pub async fn get_vehicle_by_vin(
    path: web::Path<String>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let vin = path.into_inner().to_uppercase();

    if !vin::is_valid(&vin) {
        return Err(AppError::BadRequest(
            "Invalid VIN format (17 characters, no I, O, Q)".to_string(),
        ));
    }

    let vehicle = db::vehicle::get_verified_by_vin(db_pool, &vin)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found or not verified".to_string()))?;
    Success::ok(vehicle)
}

/// Public detail page data: the vehicle, its dealership's contact card
/// and the recorded verification checklist. Unverified vehicles are
/// invisible here.
#[get("/{id}")]
pub async fn get_vehicle_detail(
    path: web::Path<i64>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let vehicle = db::vehicle::get_verified_detail(db_pool, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found or not verified".to_string()))?;
    Success::ok(vehicle)
}
