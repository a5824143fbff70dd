use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::customer::CustomerCreateRequest, models::customer::Customer};

pub async fn insert_customer<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: CustomerCreateRequest,
) -> Res<Customer> {
    sqlx::query_as::<_, Customer>(
        r#"
        INSERT INTO customers (user_id, full_name, phone, address, city, postal_code)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(&data.full_name)
    .bind(&data.phone)
    .bind(&data.address)
    .bind(&data.city)
    .bind(&data.postal_code)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_customer_by_user_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<Option<Customer>> {
    sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}
