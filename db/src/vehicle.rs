use common::error::{AppError, Res};
use sqlx::{Executor, QueryBuilder, Sqlite};

use crate::{
    dtos::vehicle::{VehicleCreateRequest, VehicleSearchFilter},
    models::vehicle::{Vehicle, VehicleDetail, VehicleStatus, VehicleSummary, VerifiedVehicle},
};

const DETAIL_COLUMNS: &str = r#"
    v.*, d.business_name, d.certification_status AS dealer_certification,
    d.phone AS dealer_phone, d.email AS dealer_email, d.website AS dealer_website,
    vc.vin_verified, vc.mileage_verified, vc.plate_number_verified, vc.engine_number_verified,
    vc.service_history_verified, vc.ownership_verified, vc.accident_history_verified,
    vc.recall_verified, vc.registration_verified, vc.engine_specs_verified,
    u.username AS verified_by_username
"#;

pub async fn insert_vehicle<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: VehicleCreateRequest,
) -> Res<Vehicle> {
    sqlx::query_as::<_, Vehicle>(
        r#"
        INSERT INTO vehicles
          (dealership_id, vin, make, model, year, mileage, price, color,
           body_type, fuel_type, transmission, previous_owners,
           registration_authority, plate_number, engine_number, tare_weight,
           date_liability_licensing, vehicle_status, date_liable_registration,
           license_numbers, engine_type, engine_capacity,
           service_history, accident_history, recall_information,
           additional_features, description, image_urls)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.dealership_id)
    .bind(&data.vin)
    .bind(&data.make)
    .bind(&data.model)
    .bind(data.year)
    .bind(data.mileage)
    .bind(data.price)
    .bind(&data.color)
    .bind(&data.body_type)
    .bind(&data.fuel_type)
    .bind(&data.transmission)
    .bind(data.previous_owners)
    .bind(&data.registration_authority)
    .bind(&data.plate_number)
    .bind(&data.engine_number)
    .bind(data.tare_weight)
    .bind(&data.date_liability_licensing)
    .bind(&data.vehicle_status)
    .bind(&data.date_liable_registration)
    .bind(&data.license_numbers)
    .bind(&data.engine_type)
    .bind(&data.engine_capacity)
    .bind(&data.service_history)
    .bind(&data.accident_history)
    .bind(&data.recall_information)
    .bind(&data.additional_features)
    .bind(&data.description)
    .bind(&data.image_urls)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn set_qr_code_path<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
    qr_code_path: &str,
) -> Res<()> {
    sqlx::query("UPDATE vehicles SET qr_code_path = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?")
        .bind(qr_code_path)
        .bind(vehicle_id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

pub async fn get_vehicle_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
) -> Res<Option<Vehicle>> {
    sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
        .bind(vehicle_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_owned_vehicle<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
    dealership_id: i64,
) -> Res<Option<Vehicle>> {
    sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ? AND dealership_id = ?")
        .bind(vehicle_id)
        .bind(dealership_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn delete_vehicle<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
) -> Res<()> {
    sqlx::query("DELETE FROM vehicles WHERE id = ?")
        .bind(vehicle_id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

pub async fn list_for_dealership<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    dealership_id: i64,
    status: Option<VehicleStatus>,
) -> Res<Vec<Vehicle>> {
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT * FROM vehicles WHERE dealership_id = ");
    qb.push_bind(dealership_id);
    if let Some(status) = status {
        qb.push(" AND status = ").push_bind(status);
    }
    qb.push(" ORDER BY created_at DESC, id DESC");

    qb.build_query_as::<Vehicle>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// The admin review queue, oldest submission first.
pub async fn list_pending_with_dealer<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<VehicleSummary>> {
    sqlx::query_as::<_, VehicleSummary>(
        r#"
        SELECT v.*, d.business_name, d.certification_status AS dealer_certification
        FROM vehicles v
        JOIN dealerships d ON v.dealership_id = d.id
        WHERE v.status = 'pending_verification'
        ORDER BY v.created_at ASC, v.id ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_verified_with_verifier<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<VerifiedVehicle>> {
    sqlx::query_as::<_, VerifiedVehicle>(
        r#"
        SELECT v.*, d.business_name, u.username AS verified_by_username
        FROM vehicles v
        JOIN dealerships d ON v.dealership_id = d.id
        LEFT JOIN users u ON v.verified_by = u.id
        WHERE v.status = 'verified'
        ORDER BY v.verified_at DESC, v.id DESC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Public detail view; only verified vehicles are visible here.
pub async fn get_verified_detail<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
) -> Res<Option<VehicleDetail>> {
    let sql = format!(
        r#"
        SELECT {DETAIL_COLUMNS}
        FROM vehicles v
        JOIN dealerships d ON v.dealership_id = d.id
        LEFT JOIN verification_checklist vc ON v.id = vc.vehicle_id
        LEFT JOIN users u ON v.verified_by = u.id
        WHERE v.id = ? AND v.status = 'verified'
        "#
    );
    sqlx::query_as::<_, VehicleDetail>(&sql)
        .bind(vehicle_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Owner's detail view; any status, scoped to the owning dealership.
pub async fn get_owned_detail<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
    dealership_id: i64,
) -> Res<Option<VehicleDetail>> {
    let sql = format!(
        r#"
        SELECT {DETAIL_COLUMNS}
        FROM vehicles v
        JOIN dealerships d ON v.dealership_id = d.id
        LEFT JOIN verification_checklist vc ON v.id = vc.vehicle_id
        LEFT JOIN users u ON v.verified_by = u.id
        WHERE v.id = ? AND v.dealership_id = ?
        "#
    );
    sqlx::query_as::<_, VehicleDetail>(&sql)
        .bind(vehicle_id)
        .bind(dealership_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_verified_by_vin<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vin: &str,
) -> Res<Option<VehicleSummary>> {
    sqlx::query_as::<_, VehicleSummary>(
        r#"
        SELECT v.*, d.business_name, d.certification_status AS dealer_certification
        FROM vehicles v
        JOIN dealerships d ON v.dealership_id = d.id
        WHERE v.vin = ? AND v.status = 'verified'
        "#,
    )
    .bind(vin)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

/// Ids of verified vehicles whose VIN contains the fragment, capped at
/// `limit` rows. Two rows are enough to tell "exactly one" from "many".
pub async fn verified_ids_by_vin_fragment<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    fragment: &str,
    limit: i64,
) -> Res<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(
        "SELECT id FROM vehicles WHERE status = 'verified' AND vin LIKE ? LIMIT ?",
    )
    .bind(format!("%{}%", fragment))
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &VehicleSearchFilter) {
    if let Some(vin) = &filter.vin {
        qb.push(" AND v.vin LIKE ").push_bind(format!("%{}%", vin));
    }
    if let Some(make) = &filter.make {
        qb.push(" AND v.make LIKE ").push_bind(format!("%{}%", make));
    }
    if let Some(min_price) = filter.min_price {
        qb.push(" AND v.price >= ").push_bind(min_price);
    }
    if let Some(max_price) = filter.max_price {
        qb.push(" AND v.price <= ").push_bind(max_price);
    }
    if let Some(body_type) = &filter.body_type {
        qb.push(" AND v.body_type = ").push_bind(body_type.clone());
    }
}

/// Number of verified vehicles matching the filter, computed from the
/// same predicate as [`search_verified`] so page counts line up.
pub async fn count_verified<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    filter: &VehicleSearchFilter,
) -> Res<i64> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
        r#"
        SELECT COUNT(*)
        FROM vehicles v
        JOIN dealerships d ON v.dealership_id = d.id
        WHERE v.status = 'verified'
        "#,
    );
    push_filters(&mut qb, filter);

    qb.build_query_scalar::<i64>()
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn search_verified<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    filter: &VehicleSearchFilter,
    limit: i64,
    offset: i64,
) -> Res<Vec<VehicleSummary>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
        r#"
        SELECT v.*, d.business_name, d.certification_status AS dealer_certification
        FROM vehicles v
        JOIN dealerships d ON v.dealership_id = d.id
        WHERE v.status = 'verified'
        "#,
    );
    push_filters(&mut qb, filter);
    qb.push(" ORDER BY v.created_at DESC, v.id DESC LIMIT ");
    qb.push_bind(limit);
    qb.push(" OFFSET ");
    qb.push_bind(offset);

    qb.build_query_as::<VehicleSummary>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn mark_verified<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
    admin_id: i64,
    notes: Option<&str>,
) -> Res<u64> {
    sqlx::query(
        r#"
        UPDATE vehicles
        SET status = 'verified',
            verification_notes = ?,
            verified_by = ?,
            verified_at = CURRENT_TIMESTAMP,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(notes)
    .bind(admin_id)
    .bind(vehicle_id)
    .execute(executor)
    .await
    .map(|result| result.rows_affected())
    .map_err(AppError::from)
}

pub async fn mark_rejected<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
    admin_id: i64,
    notes: Option<&str>,
    rejection_reason: &str,
) -> Res<u64> {
    sqlx::query(
        r#"
        UPDATE vehicles
        SET status = 'rejected',
            rejection_reason = ?,
            verification_notes = ?,
            verified_by = ?,
            verified_at = CURRENT_TIMESTAMP,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(rejection_reason)
    .bind(notes)
    .bind(admin_id)
    .bind(vehicle_id)
    .execute(executor)
    .await
    .map(|result| result.rows_affected())
    .map_err(AppError::from)
}
