use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{
    dtos::dispute::DisputeCreateRequest,
    models::dispute::{Dispute, DisputeOverview, DisputeStatus, DisputeWithVehicle},
};

pub async fn insert_dispute<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: DisputeCreateRequest,
) -> Res<Dispute> {
    sqlx::query_as::<_, Dispute>(
        r#"
        INSERT INTO disputes (customer_id, vehicle_id, discrepancy_type, description, supporting_documents)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.customer_id)
    .bind(data.vehicle_id)
    .bind(&data.discrepancy_type)
    .bind(&data.description)
    .bind(&data.supporting_documents)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_dispute_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    dispute_id: i64,
) -> Res<Option<Dispute>> {
    sqlx::query_as::<_, Dispute>("SELECT * FROM disputes WHERE id = ?")
        .bind(dispute_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn list_for_customer<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    customer_id: i64,
) -> Res<Vec<DisputeWithVehicle>> {
    sqlx::query_as::<_, DisputeWithVehicle>(
        r#"
        SELECT ds.*, v.vin, v.make, v.model, v.year
        FROM disputes ds
        JOIN vehicles v ON ds.vehicle_id = v.id
        WHERE ds.customer_id = ?
        ORDER BY ds.created_at DESC, ds.id DESC
        "#,
    )
    .bind(customer_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn recent_for_customer<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    customer_id: i64,
    limit: i64,
) -> Res<Vec<DisputeWithVehicle>> {
    sqlx::query_as::<_, DisputeWithVehicle>(
        r#"
        SELECT ds.*, v.vin, v.make, v.model, v.year
        FROM disputes ds
        JOIN vehicles v ON ds.vehicle_id = v.id
        WHERE ds.customer_id = ?
        ORDER BY ds.created_at DESC, ds.id DESC
        LIMIT ?
        "#,
    )
    .bind(customer_id)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_all<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<DisputeOverview>> {
    sqlx::query_as::<_, DisputeOverview>(
        r#"
        SELECT ds.*, c.full_name AS customer_name, v.vin, v.make, v.model, v.year
        FROM disputes ds
        JOIN customers c ON ds.customer_id = c.id
        JOIN vehicles v ON ds.vehicle_id = v.id
        ORDER BY ds.created_at DESC, ds.id DESC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Moves a dispute and records the admin's response. `resolved_at` is
/// recomputed on every transition: set when the new status is
/// `resolved`, cleared otherwise.
pub async fn update_status<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    dispute_id: i64,
    status: DisputeStatus,
    admin_response: Option<&str>,
) -> Res<Option<Dispute>> {
    sqlx::query_as::<_, Dispute>(
        r#"
        UPDATE disputes
        SET status = ?,
            admin_response = ?,
            resolved_at = CASE WHEN ? = 'resolved' THEN CURRENT_TIMESTAMP ELSE NULL END,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(status)
    .bind(admin_response)
    .bind(status)
    .bind(dispute_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
