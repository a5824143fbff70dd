use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use common::error::{AppError, Res};
use common::principal::Role;
use db::dtos::customer::CustomerCreateRequest;
use db::dtos::dealership::DealershipCreateRequest;
use db::dtos::user::UserCreateRequest;
use db::models::user::User;
use sqlx::SqlitePool;

use crate::dtos::auth::{CustomerRegisterRequest, DealershipRegisterRequest};

/// Inserts the account and its dealership profile in one transaction.
/// A constraint violation on username, email or registration number
/// rolls both rows back.
pub async fn register_dealership(
    pool: &SqlitePool,
    req: &DealershipRegisterRequest,
) -> Res<User> {
    if req.password != req.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }

    let password_hash = hash_password(&req.password)?;

    let mut tx = pool.begin().await.map_err(AppError::from)?;

    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            username: req.username.clone(),
            email: req.email.clone(),
            password_hash,
            role: Role::Dealership,
        },
    )
    .await
    .map_err(map_dealership_conflict)?;

    db::dealership::insert_dealership(
        &mut *tx,
        DealershipCreateRequest {
            user_id: user.id,
            business_name: req.business_name.clone(),
            registration_number: req.registration_number.clone(),
            license_number: req.license_number.clone(),
            year_established: req.year_established,
            email: req.email.clone(),
            phone: req.phone.clone(),
            address: req.address.clone(),
            city: req.city.clone(),
            postal_code: req.postal_code.clone(),
            website: req.website.clone(),
            operating_hours: req.operating_hours.clone(),
            description: req.description.clone(),
        },
    )
    .await
    .map_err(map_dealership_conflict)?;

    tx.commit().await.map_err(AppError::from)?;
    Ok(user)
}

/// Inserts the account and its customer profile in one transaction.
pub async fn register_customer(pool: &SqlitePool, req: &CustomerRegisterRequest) -> Res<User> {
    if req.password != req.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }

    let password_hash = hash_password(&req.password)?;

    let mut tx = pool.begin().await.map_err(AppError::from)?;

    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            username: req.username.clone(),
            email: req.email.clone(),
            password_hash,
            role: Role::Customer,
        },
    )
    .await
    .map_err(map_customer_conflict)?;

    db::customer::insert_customer(
        &mut *tx,
        CustomerCreateRequest {
            user_id: user.id,
            full_name: req.full_name.clone(),
            phone: req.phone.clone(),
            address: req.address.clone(),
            city: req.city.clone(),
            postal_code: req.postal_code.clone(),
        },
    )
    .await
    .map_err(map_customer_conflict)?;

    tx.commit().await.map_err(AppError::from)?;
    Ok(user)
}

fn hash_password(password: &str) -> Res<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AppError::Internal("Failed to hash password".to_string()))
}

fn map_dealership_conflict(error: AppError) -> AppError {
    match error {
        AppError::Conflict(_) => AppError::Conflict(
            "Username, email, or registration number already exists".to_string(),
        ),
        other => other,
    }
}

fn map_customer_conflict(error: AppError) -> AppError {
    match error {
        AppError::Conflict(_) => {
            AppError::Conflict("Username or email already exists".to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::auth::LoginRequest;
    use crate::services::auth::authenticate_user;

    fn dealership_request(username: &str, registration_number: &str) -> DealershipRegisterRequest {
        DealershipRegisterRequest {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
            business_name: "Atlantic Motors".to_string(),
            registration_number: registration_number.to_string(),
            license_number: None,
            year_established: Some(2012),
            phone: "021-555-0100".to_string(),
            address: "1 Main Road".to_string(),
            city: "Cape Town".to_string(),
            postal_code: None,
            website: None,
            operating_hours: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn duplicate_registration_number_rolls_back_the_user_row() {
        let pool = db::setup_in_memory().await.unwrap();

        register_dealership(&pool, &dealership_request("first", "REG-001"))
            .await
            .unwrap();

        let err = register_dealership(&pool, &dealership_request("second", "REG-001"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Full rollback: neither the user nor the profile survived.
        assert!(
            db::user::get_user_by_username(&*pool, "second")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn password_mismatch_blocks_before_any_write() {
        let pool = db::setup_in_memory().await.unwrap();

        let mut request = dealership_request("mismatch", "REG-002");
        request.confirm_password = "different".to_string();
        let err = register_dealership(&pool, &request).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(
            db::user::get_user_by_username(&*pool, "mismatch")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn registered_customer_can_log_in() {
        let pool = db::setup_in_memory().await.unwrap();

        let request = CustomerRegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
            confirm_password: "correct horse".to_string(),
            full_name: "Ada Lovelace".to_string(),
            phone: None,
            address: None,
            city: None,
            postal_code: None,
        };
        let user = register_customer(&pool, &request).await.unwrap();
        assert_eq!(user.role, Role::Customer);

        let authenticated = authenticate_user(
            &pool,
            &LoginRequest {
                username: "ada".to_string(),
                password: "correct horse".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(authenticated.id, user.id);

        let err = authenticate_user(
            &pool,
            &LoginRequest {
                username: "ada".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
