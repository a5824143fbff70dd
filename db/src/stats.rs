use common::error::{AppError, Res};
use serde::Serialize;
use sqlx::{Executor, Sqlite};

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PortalStats {
    pub total_dealerships: i64,
    pub active_dealerships: i64,
    pub pending_dealerships: i64,
    pub total_vehicles: i64,
    pub pending_vehicles: i64,
    pub verified_vehicles: i64,
    pub total_disputes: i64,
}

/// Counters shown on a dealership's dashboard.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DealerVehicleStats {
    pub total: i64,
    pub verified: i64,
    pub pending: i64,
    pub rejected: i64,
    pub total_value: f64,
}

pub async fn portal_stats<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<PortalStats> {
    sqlx::query_as::<_, PortalStats>(
        r#"
        SELECT
          (SELECT COUNT(*) FROM dealerships) AS total_dealerships,
          (SELECT COUNT(*) FROM dealerships WHERE certification_status = 'active') AS active_dealerships,
          (SELECT COUNT(*) FROM dealerships WHERE certification_status = 'pending') AS pending_dealerships,
          (SELECT COUNT(*) FROM vehicles) AS total_vehicles,
          (SELECT COUNT(*) FROM vehicles WHERE status = 'pending_verification') AS pending_vehicles,
          (SELECT COUNT(*) FROM vehicles WHERE status = 'verified') AS verified_vehicles,
          (SELECT COUNT(*) FROM disputes) AS total_disputes
        "#,
    )
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn dealer_vehicle_stats<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    dealership_id: i64,
) -> Res<DealerVehicleStats> {
    sqlx::query_as::<_, DealerVehicleStats>(
        r#"
        SELECT
          COUNT(*) AS total,
          COALESCE(SUM(CASE WHEN status = 'verified' THEN 1 ELSE 0 END), 0) AS verified,
          COALESCE(SUM(CASE WHEN status = 'pending_verification' THEN 1 ELSE 0 END), 0) AS pending,
          COALESCE(SUM(CASE WHEN status = 'rejected' THEN 1 ELSE 0 END), 0) AS rejected,
          COALESCE(SUM(CASE WHEN status = 'verified' THEN price ELSE 0.0 END), 0.0) AS total_value
        FROM vehicles
        WHERE dealership_id = ?
        "#,
    )
    .bind(dealership_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
