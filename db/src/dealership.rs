use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{
    dtos::dealership::{DealershipCreateRequest, DealershipProfileUpdate},
    models::dealership::{
        CertificationStatus, CertifiedDealership, Dealership, DealershipOverview,
    },
};

pub async fn insert_dealership<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: DealershipCreateRequest,
) -> Res<Dealership> {
    sqlx::query_as::<_, Dealership>(
        r#"
        INSERT INTO dealerships
          (user_id, business_name, registration_number, license_number, year_established,
           email, phone, address, city, postal_code, website, operating_hours, description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(&data.business_name)
    .bind(&data.registration_number)
    .bind(&data.license_number)
    .bind(data.year_established)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.address)
    .bind(&data.city)
    .bind(&data.postal_code)
    .bind(&data.website)
    .bind(&data.operating_hours)
    .bind(&data.description)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_dealership_by_user_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<Option<Dealership>> {
    sqlx::query_as::<_, Dealership>("SELECT * FROM dealerships WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_dealership_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    dealership_id: i64,
) -> Res<Option<Dealership>> {
    sqlx::query_as::<_, Dealership>("SELECT * FROM dealerships WHERE id = ?")
        .bind(dealership_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn update_profile<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    dealership_id: i64,
    data: DealershipProfileUpdate,
) -> Res<Option<Dealership>> {
    sqlx::query_as::<_, Dealership>(
        r#"
        UPDATE dealerships
        SET business_name = ?, phone = ?, address = ?, city = ?, postal_code = ?,
            website = ?, operating_hours = ?, description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&data.business_name)
    .bind(&data.phone)
    .bind(&data.address)
    .bind(&data.city)
    .bind(&data.postal_code)
    .bind(&data.website)
    .bind(&data.operating_hours)
    .bind(&data.description)
    .bind(dealership_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

/// Returns `false` when no dealership carries the given id.
pub async fn update_certification_status<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    dealership_id: i64,
    status: CertificationStatus,
) -> Res<bool> {
    sqlx::query(
        "UPDATE dealerships SET certification_status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(status)
    .bind(dealership_id)
    .execute(executor)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(AppError::from)
}

/// Public directory of actively certified dealerships.
pub async fn list_certified<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<CertifiedDealership>> {
    sqlx::query_as::<_, CertifiedDealership>(
        r#"
        SELECT d.*,
               (SELECT COUNT(*) FROM vehicles
                WHERE dealership_id = d.id AND status = 'verified') AS vehicle_count
        FROM dealerships d
        WHERE d.certification_status = 'active'
        ORDER BY d.business_name
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_with_owner<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<DealershipOverview>> {
    sqlx::query_as::<_, DealershipOverview>(
        r#"
        SELECT d.*, u.username, u.email AS owner_email,
               (SELECT COUNT(*) FROM vehicles WHERE dealership_id = d.id) AS vehicle_count
        FROM dealerships d
        JOIN users u ON d.user_id = u.id
        ORDER BY d.created_at DESC, d.id DESC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
