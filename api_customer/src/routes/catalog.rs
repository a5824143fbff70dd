use actix_web::{HttpResponse, Responder, get, web};
use common::error::Res;
use common::http::Success;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::search::SearchQuery;
use crate::services::search::{self, SearchOutcome};

/// Filtered, paginated catalog of verified vehicles.
///
/// # Input
/// - `query`: optional filters (vin, make, minPrice, maxPrice,
///   bodyType) and a 1-based `page`; the page size is fixed at 9
///
/// # Output
/// - Success: a result page with the total count and page count
/// - VIN fast-path: when the vin filter matches exactly one verified
///   vehicle, 302 redirect to that vehicle's detail view
#[get("/vehicles")]
pub async fn get_vehicles(
    query: web::Query<SearchQuery>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<HttpResponse> {
    let db_pool: &SqlitePool = &pool;

    match search::search_catalog(db_pool, query.into_inner()).await? {
        SearchOutcome::Single(vehicle_id) => Success::redirect(format!("/vehicle/{}", vehicle_id)),
        SearchOutcome::Page(page) => Ok(HttpResponse::Ok().json(page)),
    }
}

/// Directory of actively certified dealerships.
#[get("/browse-dealerships")]
pub async fn get_browse_dealerships(pool: web::Data<Arc<SqlitePool>>) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let dealerships = db::dealership::list_certified(db_pool).await?;
    Success::ok(dealerships)
}
