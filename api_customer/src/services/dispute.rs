use common::error::{AppError, Res};
use db::dtos::dispute::DisputeCreateRequest;
use db::models::customer::Customer;
use db::models::dispute::{Dispute, DisputeWithVehicle};
use sqlx::SqlitePool;

use crate::dtos::dispute::DisputeRequest;

/// Resolves the customer profile behind a session user. Accounts
/// without one cannot file or list disputes.
pub async fn require_customer(pool: &SqlitePool, user_id: i64) -> Res<Customer> {
    db::customer::get_customer_by_user_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Forbidden("Customer profile not found".to_string()))
}

/// Files a dispute against a vehicle on behalf of the session user.
pub async fn submit_dispute(
    pool: &SqlitePool,
    user_id: i64,
    req: DisputeRequest,
) -> Res<Dispute> {
    let customer = require_customer(pool, user_id).await?;

    db::vehicle::get_vehicle_by_id(pool, req.vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    db::dispute::insert_dispute(
        pool,
        DisputeCreateRequest {
            customer_id: customer.id,
            vehicle_id: req.vehicle_id,
            discrepancy_type: req.discrepancy_type,
            description: req.description,
            supporting_documents: req.supporting_documents,
        },
    )
    .await
}

pub async fn my_disputes(pool: &SqlitePool, user_id: i64) -> Res<Vec<DisputeWithVehicle>> {
    let customer = require_customer(pool, user_id).await?;
    db::dispute::list_for_customer(pool, customer.id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::principal::Role;
    use db::models::dispute::DisputeStatus;
    use db::testing::{seed_customer, seed_dealership, seed_user, seed_vehicle};

    fn request(vehicle_id: i64) -> DisputeRequest {
        DisputeRequest {
            vehicle_id,
            discrepancy_type: "mileage".to_string(),
            description: "odometer disagrees with the listing".to_string(),
            supporting_documents: None,
        }
    }

    #[tokio::test]
    async fn submitting_requires_a_customer_profile() {
        let pool = db::setup_in_memory().await.unwrap();
        let (dealer_user, dealership_id) = seed_dealership(&pool, "a").await;
        let vehicle = seed_vehicle(&pool, dealership_id, 1).await;

        // A dealership account has no customer profile.
        let err = submit_dispute(&pool, dealer_user, request(vehicle.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        // A bare user without any profile is refused the same way.
        let bare_user = seed_user(&pool, "bare", Role::Customer).await;
        let err = submit_dispute(&pool, bare_user, request(vehicle.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn submitting_against_a_missing_vehicle_is_not_found() {
        let pool = db::setup_in_memory().await.unwrap();
        seed_customer(&pool, "c").await;
        let user_id = db::user::get_user_by_username(&*pool, "customer-c")
            .await
            .unwrap()
            .unwrap()
            .id;

        let err = submit_dispute(&pool, user_id, request(999)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn submitted_disputes_show_up_in_my_disputes() {
        let pool = db::setup_in_memory().await.unwrap();
        let (_, dealership_id) = seed_dealership(&pool, "a").await;
        seed_customer(&pool, "c").await;
        let user_id = db::user::get_user_by_username(&*pool, "customer-c")
            .await
            .unwrap()
            .unwrap()
            .id;
        let vehicle = seed_vehicle(&pool, dealership_id, 1).await;

        let dispute = submit_dispute(&pool, user_id, request(vehicle.id)).await.unwrap();
        assert_eq!(dispute.status, DisputeStatus::Submitted);
        assert!(dispute.resolved_at.is_none());

        let disputes = my_disputes(&pool, user_id).await.unwrap();
        assert_eq!(disputes.len(), 1);
        assert_eq!(disputes[0].dispute.id, dispute.id);
        assert_eq!(disputes[0].vin, vehicle.vin);
    }
}
