use actix_web::{Responder, get, post, web};
use common::error::Res;
use common::http::Success;
use common::principal::DealerUser;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::vehicle::ProfileUpdateRequest;
use crate::services;

/// Dashboard counters for the signed-in dealership: stock totals by
/// status and the value of the verified stock.
#[get("/dashboard")]
pub async fn get_dashboard(
    dealer: DealerUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealership = services::dealer::require_dealership(db_pool, dealer.0.user_id).await?;
    let stats = db::stats::dealer_vehicle_stats(db_pool, dealership.id).await?;

    Success::ok(serde_json::json!({
        "dealership": dealership,
        "stats": stats,
    }))
}

#[get("/profile")]
pub async fn get_profile(
    dealer: DealerUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealership = services::dealer::require_dealership(db_pool, dealer.0.user_id).await?;
    Success::ok(dealership)
}

/// Updates the dealership's own contact card. Certification status is
/// not part of this surface.
#[post("/profile/update")]
pub async fn post_profile_update(
    dealer: DealerUser,
    req: web::Json<ProfileUpdateRequest>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealership =
        services::dealer::update_profile(db_pool, dealer.0.user_id, req.into_inner()).await?;
    Success::ok(dealership)
}
