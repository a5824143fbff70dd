use actix_web::{Responder, get, post, web};
use common::error::Res;
use common::http::Success;
use common::principal::AdminUser;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::admin::DisputeUpdateRequest;
use crate::services;

#[get("/disputes")]
pub async fn get_disputes(
    _admin: AdminUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let disputes = db::dispute::list_all(db_pool).await?;
    Success::ok(disputes)
}

/// Moves a dispute through its states and records the admin response.
#[post("/dispute/{id}/update")]
pub async fn post_update_dispute(
    _admin: AdminUser,
    path: web::Path<i64>,
    req: web::Json<DisputeUpdateRequest>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let req = req.into_inner();

    let dispute = services::dispute::update_dispute(
        db_pool,
        path.into_inner(),
        req.status,
        req.admin_response.as_deref(),
    )
    .await?;
    Success::ok(dispute)
}
