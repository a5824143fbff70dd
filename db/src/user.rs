use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::user::UserCreateRequest, models::user::User};

pub async fn get_user_by_username<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    username: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_user<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, role)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&data.password_hash)
    .bind(data.role)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
