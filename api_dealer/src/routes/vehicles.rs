use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::principal::DealerUser;
use db::models::vehicle::VehicleStatus;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::vehicle::{AddVehicleForm, VehicleListQuery};
use crate::services;

/// The dealership's own stock, optionally narrowed to one status (the
/// sentinel value "all" and an absent parameter both mean no filter).
#[get("/vehicles")]
pub async fn get_vehicles(
    dealer: DealerUser,
    query: web::Query<VehicleListQuery>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealership = services::dealer::require_dealership(db_pool, dealer.0.user_id).await?;

    let status = match query.into_inner().status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(value) => Some(
            VehicleStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest("Unknown status filter".to_string()))?,
        ),
    };

    let vehicles = db::vehicle::list_for_dealership(db_pool, dealership.id, status).await?;
    Success::ok(vehicles)
}

/// Lists a new vehicle for verification.
///
/// # Input
/// - multipart form: the listing fields plus up to 10 images (5 MB
///   each, jpeg/jpg/png/gif/webp only)
///
/// # Output
/// - Success: the created vehicle (status pending_verification) with
///   its QR code path, 201 Created
/// - Error: 400 for a malformed VIN or bad upload, 409 for a VIN that
///   already exists
#[post("/add-vehicle")]
pub async fn post_add_vehicle(
    dealer: DealerUser,
    form: MultipartForm<AddVehicleForm>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let vehicle = services::vehicle::create_vehicle(
        db_pool,
        &config.upload_dir,
        &config.qr_dir,
        dealer.0.user_id,
        form.into_inner(),
    )
    .await?;
    Success::created(vehicle)
}

/// Own-vehicle detail, any status, with the checklist when one exists.
#[get("/vehicle/{id}")]
pub async fn get_vehicle_detail(
    dealer: DealerUser,
    path: web::Path<i64>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealership = services::dealer::require_dealership(db_pool, dealer.0.user_id).await?;
    let vehicle = db::vehicle::get_owned_detail(db_pool, path.into_inner(), dealership.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
    Success::ok(vehicle)
}

/// Removes a pending listing owned by the caller.
#[post("/vehicle/{id}/delete")]
pub async fn post_delete_vehicle(
    dealer: DealerUser,
    path: web::Path<i64>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    services::vehicle::delete_vehicle(db_pool, dealer.0.user_id, path.into_inner()).await?;
    Success::ok(serde_json::json!({ "deleted": true }))
}
