use common::error::{AppError, Res};
use db::dtos::vehicle::ChecklistFlags;
use sqlx::SqlitePool;

/// Marks a vehicle verified and records the checklist.
///
/// Both writes run in one transaction: a vehicle is never left marked
/// verified without its checklist. Approving an already rejected
/// vehicle is allowed and simply replaces the previous checklist.
pub async fn approve_vehicle(
    pool: &SqlitePool,
    vehicle_id: i64,
    admin_id: i64,
    notes: Option<&str>,
    flags: &ChecklistFlags,
) -> Res<()> {
    let mut tx = pool.begin().await.map_err(AppError::from)?;

    let updated = db::vehicle::mark_verified(&mut *tx, vehicle_id, admin_id, notes).await?;
    if updated == 0 {
        return Err(AppError::NotFound("Vehicle not found".to_string()));
    }
    db::checklist::upsert_checklist(&mut *tx, vehicle_id, flags).await?;

    tx.commit().await.map_err(AppError::from)?;
    Ok(())
}

/// Marks a vehicle rejected. The reason is mandatory and checked
/// before any write; the checklist, if one exists from an earlier
/// approval, is left alone.
pub async fn reject_vehicle(
    pool: &SqlitePool,
    vehicle_id: i64,
    admin_id: i64,
    notes: Option<&str>,
    rejection_reason: Option<&str>,
) -> Res<()> {
    let reason = rejection_reason
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .ok_or_else(|| AppError::BadRequest("Rejection reason is required".to_string()))?;

    let mut tx = pool.begin().await.map_err(AppError::from)?;

    let updated = db::vehicle::mark_rejected(&mut *tx, vehicle_id, admin_id, notes, reason).await?;
    if updated == 0 {
        return Err(AppError::NotFound("Vehicle not found".to_string()));
    }

    tx.commit().await.map_err(AppError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::principal::Role;
    use db::models::vehicle::VehicleStatus;
    use db::testing::{seed_dealership, seed_user, seed_vehicle};

    #[tokio::test]
    async fn approval_records_the_decision_and_checklist() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;
        let (_, dealership_id) = seed_dealership(&pool, "a").await;
        let vehicle = seed_vehicle(&pool, dealership_id, 42).await;

        let flags = ChecklistFlags {
            vin_verified: true,
            mileage_verified: false,
            ..ChecklistFlags::default()
        };
        approve_vehicle(&pool, vehicle.id, admin_id, Some("ok"), &flags)
            .await
            .unwrap();

        let updated = db::vehicle::get_vehicle_by_id(&*pool, vehicle.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, VehicleStatus::Verified);
        assert!(updated.verified_at.is_some());
        assert_eq!(updated.verification_notes.as_deref(), Some("ok"));

        let checklist = db::checklist::get_for_vehicle(&*pool, vehicle.id)
            .await
            .unwrap()
            .unwrap();
        assert!(checklist.vin_verified);
        assert!(!checklist.mileage_verified);
    }

    #[tokio::test]
    async fn rejection_without_a_reason_changes_nothing() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;
        let (_, dealership_id) = seed_dealership(&pool, "a").await;
        let vehicle = seed_vehicle(&pool, dealership_id, 1).await;

        for reason in [None, Some(""), Some("   ")] {
            let err = reject_vehicle(&pool, vehicle.id, admin_id, None, reason)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }

        let untouched = db::vehicle::get_vehicle_by_id(&*pool, vehicle.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(untouched.status, VehicleStatus::PendingVerification);
        assert!(untouched.rejection_reason.is_none());
    }

    #[tokio::test]
    async fn decisions_on_unknown_vehicles_are_not_found() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;

        let err = approve_vehicle(&pool, 999, admin_id, None, &ChecklistFlags::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = reject_vehicle(&pool, 999, admin_id, None, Some("reason"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn a_rejected_vehicle_can_be_approved_again() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;
        let (_, dealership_id) = seed_dealership(&pool, "a").await;
        let vehicle = seed_vehicle(&pool, dealership_id, 1).await;

        approve_vehicle(&pool, vehicle.id, admin_id, None, &ChecklistFlags::default())
            .await
            .unwrap();
        reject_vehicle(&pool, vehicle.id, admin_id, None, Some("paperwork missing"))
            .await
            .unwrap();
        approve_vehicle(&pool, vehicle.id, admin_id, Some("paperwork arrived"), &ChecklistFlags::default())
            .await
            .unwrap();

        let updated = db::vehicle::get_vehicle_by_id(&*pool, vehicle.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, VehicleStatus::Verified);
        assert_eq!(
            db::checklist::count_for_vehicle(&*pool, vehicle.id)
                .await
                .unwrap(),
            1
        );
    }
}
