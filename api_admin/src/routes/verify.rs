use actix_web::{Responder, get, post, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::principal::AdminUser;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::admin::{VerifyAction, VerifyVehicleRequest};
use crate::services;

/// The review queue: vehicles awaiting verification, oldest first.
#[get("/verify-vehicles")]
pub async fn get_verify_vehicles(
    _admin: AdminUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let vehicles = db::vehicle::list_pending_with_dealer(db_pool).await?;
    Success::ok(vehicles)
}

/// Review context for one vehicle: the full listing and its dealership,
/// regardless of current status.
#[get("/verify-vehicle/{id}")]
pub async fn get_verify_vehicle_detail(
    _admin: AdminUser,
    path: web::Path<i64>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let vehicle_id = path.into_inner();

    let vehicle = db::vehicle::get_vehicle_by_id(db_pool, vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
    let dealership = db::dealership::get_dealership_by_id(db_pool, vehicle.dealership_id).await?;

    Success::ok(serde_json::json!({
        "vehicle": vehicle,
        "dealership": dealership,
    }))
}

/// Records the verification decision.
///
/// # Input
/// - `req`: JSON payload {action: "approve"|"reject", notes,
///   rejection_reason, checklist flags at the top level}
///
/// # Output
/// - approve: status becomes verified and the ten-point checklist is
///   written in the same transaction
/// - reject: 400 unless a non-empty rejection_reason is supplied;
///   checklist untouched
#[post("/verify-vehicle/{id}")]
pub async fn post_verify_vehicle(
    admin: AdminUser,
    path: web::Path<i64>,
    req: web::Json<VerifyVehicleRequest>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let vehicle_id = path.into_inner();
    let req = req.into_inner();

    match req.action {
        VerifyAction::Approve => {
            services::verify::approve_vehicle(
                db_pool,
                vehicle_id,
                admin.0.user_id,
                req.notes.as_deref(),
                &req.checklist,
            )
            .await?
        }
        VerifyAction::Reject => {
            services::verify::reject_vehicle(
                db_pool,
                vehicle_id,
                admin.0.user_id,
                req.notes.as_deref(),
                req.rejection_reason.as_deref(),
            )
            .await?
        }
    }

    Success::ok(serde_json::json!({ "vehicle_id": vehicle_id }))
}

/// Everything currently verified, with the approving admin's name.
#[get("/verified-vehicles")]
pub async fn get_verified_vehicles(
    _admin: AdminUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let vehicles = db::vehicle::list_verified_with_verifier(db_pool).await?;
    Success::ok(vehicles)
}
