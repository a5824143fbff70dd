use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use common::error::Res;
use common::http::Success;
use common::principal::Principal;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::auth::{CustomerRegisterRequest, DealershipRegisterRequest, LoginRequest};
use crate::services;

#[get("/")]
pub async fn get_index() -> Res<impl Responder> {
    Success::ok(serde_json::json!({
        "service": "Before You Sign - Certified Ethical Dealership Programme",
        "status": "ok",
    }))
}

/// Login landing: an already signed-in user is bounced to their role's
/// dashboard, everyone else is told to authenticate.
#[get("/login")]
pub async fn get_login(session: Session) -> Res<HttpResponse> {
    if let Ok(principal) = Principal::from_session(&session) {
        return Success::redirect(format!("/{}/dashboard", principal.role.as_str()));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "authenticated": false })))
}

/// Authenticates a user with username and password.
///
/// # Input
/// - `login_data`: JSON payload containing username and password
/// - `session`: Session the principal is written into on success
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns the user object; the session cookie now carries
///   the user id, username and role
/// - Error: Returns 401 Unauthorized for invalid credentials
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    session: Session,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let user = services::auth::authenticate_user(db_pool, &login_data.into_inner()).await?;

    let principal = Principal {
        user_id: user.id,
        username: user.username.clone(),
        role: user.role,
    };
    principal.persist(&session)?;

    Success::ok(user)
}

/// Registers a dealership: the account and its business profile are
/// created together or not at all.
///
/// # Input
/// - `req`: JSON payload with the account credentials and business
///   details (name, registration number, licence, contact fields)
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns the created user with 201 Created
/// - Error: 400 when the passwords do not match, 409 when the
///   username, email or registration number is already taken
#[post("/register/dealership")]
pub async fn post_register_dealership(
    req: web::Json<DealershipRegisterRequest>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let user = services::register::register_dealership(db_pool, &req.into_inner()).await?;
    Success::created(user)
}

/// Registers a customer account with its profile.
#[post("/register/customer")]
pub async fn post_register_customer(
    req: web::Json<CustomerRegisterRequest>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &pool;
    let user = services::register::register_customer(db_pool, &req.into_inner()).await?;
    Success::created(user)
}

/// Clears the session and sends the browser back to the home page.
#[get("/logout")]
pub async fn get_logout(session: Session) -> Res<HttpResponse> {
    session.purge();
    Success::redirect("/".to_string())
}
