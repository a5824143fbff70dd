use common::error::{AppError, Res};
use db::models::dispute::{Dispute, DisputeStatus};
use sqlx::SqlitePool;

/// Applies an admin decision to a dispute. The resolution timestamp
/// tracks the status: set on `resolved`, cleared on anything else.
pub async fn update_dispute(
    pool: &SqlitePool,
    dispute_id: i64,
    status: DisputeStatus,
    admin_response: Option<&str>,
) -> Res<Dispute> {
    db::dispute::update_status(pool, dispute_id, status, admin_response)
        .await?
        .ok_or_else(|| AppError::NotFound("Dispute not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::dtos::dispute::DisputeCreateRequest;
    use db::testing::{seed_customer, seed_dealership, seed_vehicle};

    #[tokio::test]
    async fn unknown_disputes_are_not_found() {
        let pool = db::setup_in_memory().await.unwrap();
        let err = update_dispute(&pool, 42, DisputeStatus::UnderReview, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn walking_the_dispute_state_machine() {
        let pool = db::setup_in_memory().await.unwrap();
        let (_, dealership_id) = seed_dealership(&pool, "a").await;
        let customer_id = seed_customer(&pool, "c").await;
        let vehicle = seed_vehicle(&pool, dealership_id, 1).await;

        let dispute = db::dispute::insert_dispute(
            &*pool,
            DisputeCreateRequest {
                customer_id,
                vehicle_id: vehicle.id,
                discrepancy_type: "service_history".to_string(),
                description: "missing service stamps".to_string(),
                supporting_documents: None,
            },
        )
        .await
        .unwrap();

        let under_review = update_dispute(
            &pool,
            dispute.id,
            DisputeStatus::UnderReview,
            Some("looking into it"),
        )
        .await
        .unwrap();
        assert_eq!(under_review.status, DisputeStatus::UnderReview);
        assert!(under_review.resolved_at.is_none());

        let resolved = update_dispute(
            &pool,
            dispute.id,
            DisputeStatus::Resolved,
            Some("stamps verified with the workshop"),
        )
        .await
        .unwrap();
        assert_eq!(resolved.status, DisputeStatus::Resolved);
        assert!(resolved.resolved_at.is_some());
        assert_eq!(
            resolved.admin_response.as_deref(),
            Some("stamps verified with the workshop")
        );

        let closed = update_dispute(&pool, dispute.id, DisputeStatus::Closed, None)
            .await
            .unwrap();
        assert_eq!(closed.status, DisputeStatus::Closed);
        assert!(closed.resolved_at.is_none());
    }
}
