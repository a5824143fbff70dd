use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use common::error::{AppError, Res};
use db::models::user::User;
use sqlx::SqlitePool;

use crate::dtos::auth::LoginRequest;

/// Authenticates an existing user.
///
/// Unknown usernames and wrong passwords produce the same error so the
/// response does not reveal which accounts exist.
pub async fn authenticate_user(pool: &SqlitePool, login_data: &LoginRequest) -> Res<User> {
    let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

    let user = db::user::get_user_by_username(pool, &login_data.username)
        .await?
        .ok_or_else(invalid)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal("Stored password hash is malformed".to_string()))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid { Ok(user) } else { Err(invalid()) }
}
