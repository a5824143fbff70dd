use actix_web::{Responder, get, post, web};
use common::error::Res;
use common::http::Success;
use common::principal::CustomerUser;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::dispute::{DisputeRequest, ReportQuery};
use crate::services;

const RECENT_DISPUTES: i64 = 5;

/// Customer dashboard: the profile plus the most recent disputes.
#[get("/dashboard")]
pub async fn get_dashboard(
    customer: CustomerUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let profile = services::dispute::require_customer(db_pool, customer.0.user_id).await?;
    let recent = db::dispute::recent_for_customer(db_pool, profile.id, RECENT_DISPUTES).await?;

    Success::ok(serde_json::json!({
        "customer": profile,
        "recent_disputes": recent,
    }))
}

/// Data for the report form: the caller's profile and, when a
/// `vehicleId` is passed, the vehicle being disputed.
#[get("/report-dispute")]
pub async fn get_report_dispute(
    customer: CustomerUser,
    query: web::Query<ReportQuery>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let profile = services::dispute::require_customer(db_pool, customer.0.user_id).await?;

    let vehicle = match query.into_inner().vehicle_id {
        Some(vehicle_id) => db::vehicle::get_vehicle_by_id(db_pool, vehicle_id).await?,
        None => None,
    };

    Success::ok(serde_json::json!({
        "customer": profile,
        "vehicle": vehicle,
    }))
}

/// Files a dispute about a vehicle.
///
/// # Input
/// - `req`: JSON payload {vehicle_id, discrepancy_type, description}
///
/// # Output
/// - Success: the created dispute (status `submitted`), 201 Created
/// - Error: 403 when the account carries no customer profile, 404 when
///   the vehicle does not exist
#[post("/report-dispute")]
pub async fn post_report_dispute(
    customer: CustomerUser,
    req: web::Json<DisputeRequest>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dispute =
        services::dispute::submit_dispute(db_pool, customer.0.user_id, req.into_inner()).await?;
    Success::created(dispute)
}

#[get("/my-disputes")]
pub async fn get_my_disputes(
    customer: CustomerUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let disputes = services::dispute::my_disputes(db_pool, customer.0.user_id).await?;
    Success::ok(disputes)
}
