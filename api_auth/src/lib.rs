use actix_session::{
    SessionMiddleware, config::PersistentSession, storage::CookieSessionStore,
};
use actix_web::{
    cookie::{Key, time::Duration},
    web,
};

pub mod routes {
    pub mod auth;
    pub mod session;
}
mod services {
    pub(crate) mod auth;
    pub(crate) mod register;
}
mod dtos {
    pub(crate) mod auth;
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("")
        .service(routes::auth::get_index)
        .service(routes::auth::get_login)
        .service(routes::auth::post_login)
        .service(routes::auth::post_register_dealership)
        .service(routes::auth::post_register_customer)
        .service(routes::auth::get_logout)
        .service(routes::session::get_session)
}

/// Cookie-backed session middleware. The session carries the typed
/// principal (user id, username, role) for 24 hours.
pub fn session_middleware(
    cookie_secure: bool,
    secret: &[u8],
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::derive_from(secret))
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .session_lifecycle(PersistentSession::default().session_ttl(Duration::hours(24)))
        .build()
}
