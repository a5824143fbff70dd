use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::vehicle::ChecklistFlags, models::vehicle::VerificationChecklist};

/// Writes the checklist recorded by an approval. Keyed on `vehicle_id`,
/// so re-approving a vehicle replaces the previous checklist in place
/// rather than leaving a window with no row at all.
pub async fn upsert_checklist<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
    flags: &ChecklistFlags,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO verification_checklist
          (vehicle_id, vin_verified, mileage_verified, plate_number_verified,
           engine_number_verified, service_history_verified, ownership_verified,
           accident_history_verified, recall_verified, registration_verified,
           engine_specs_verified)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(vehicle_id) DO UPDATE SET
          vin_verified = excluded.vin_verified,
          mileage_verified = excluded.mileage_verified,
          plate_number_verified = excluded.plate_number_verified,
          engine_number_verified = excluded.engine_number_verified,
          service_history_verified = excluded.service_history_verified,
          ownership_verified = excluded.ownership_verified,
          accident_history_verified = excluded.accident_history_verified,
          recall_verified = excluded.recall_verified,
          registration_verified = excluded.registration_verified,
          engine_specs_verified = excluded.engine_specs_verified,
          created_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(vehicle_id)
    .bind(flags.vin_verified)
    .bind(flags.mileage_verified)
    .bind(flags.plate_number_verified)
    .bind(flags.engine_number_verified)
    .bind(flags.service_history_verified)
    .bind(flags.ownership_verified)
    .bind(flags.accident_history_verified)
    .bind(flags.recall_verified)
    .bind(flags.registration_verified)
    .bind(flags.engine_specs_verified)
    .execute(executor)
    .await
    .map_err(AppError::from)?;
    Ok(())
}

pub async fn get_for_vehicle<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
) -> Res<Option<VerificationChecklist>> {
    sqlx::query_as::<_, VerificationChecklist>(
        "SELECT * FROM verification_checklist WHERE vehicle_id = ?",
    )
    .bind(vehicle_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn count_for_vehicle<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    vehicle_id: i64,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM verification_checklist WHERE vehicle_id = ?",
    )
    .bind(vehicle_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
