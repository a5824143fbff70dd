use actix_web::{Responder, get, post, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::principal::AdminUser;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::admin::CertificationUpdateRequest;

#[get("/dealerships")]
pub async fn get_dealerships(
    _admin: AdminUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealerships = db::dealership::list_with_owner(db_pool).await?;
    Success::ok(dealerships)
}

/// One dealership with its full stock, any status.
#[get("/dealership/{id}")]
pub async fn get_dealership_detail(
    _admin: AdminUser,
    path: web::Path<i64>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealership_id = path.into_inner();

    let dealership = db::dealership::get_dealership_by_id(db_pool, dealership_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Dealership not found".to_string()))?;
    let vehicles = db::vehicle::list_for_dealership(db_pool, dealership_id, None).await?;

    Success::ok(serde_json::json!({
        "dealership": dealership,
        "vehicles": vehicles,
    }))
}

/// Moves a dealership between pending, active and suspended.
#[post("/dealership/{id}/update-status")]
pub async fn post_update_status(
    _admin: AdminUser,
    path: web::Path<i64>,
    req: web::Json<CertificationUpdateRequest>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealership_id = path.into_inner();

    let updated =
        db::dealership::update_certification_status(db_pool, dealership_id, req.status).await?;
    if !updated {
        return Err(AppError::NotFound("Dealership not found".to_string()));
    }
    Success::ok(serde_json::json!({ "updated": true }))
}
