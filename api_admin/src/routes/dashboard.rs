use actix_web::{Responder, get, web};
use common::error::Res;
use common::http::Success;
use common::principal::AdminUser;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Portal-wide counters: dealerships and vehicles by status, disputes.
#[get("/dashboard")]
pub async fn get_dashboard(
    _admin: AdminUser,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let stats = db::stats::portal_stats(db_pool).await?;
    Success::ok(stats)
}
