use actix_session::{Session, SessionExt};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures::future::{Ready, ready};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Res};

/// Account role carried by the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Dealership,
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Dealership => "dealership",
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }
}

/// The authenticated identity of a request, read once from the session
/// cookie. Handlers take `Principal` (any signed-in user) or one of the
/// role wrappers below, which perform the claim check at extraction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl Principal {
    const USER_ID: &'static str = "user_id";
    const USERNAME: &'static str = "username";
    const ROLE: &'static str = "role";

    /// Writes the principal into the session cookie after login.
    pub fn persist(&self, session: &Session) -> Res<()> {
        session
            .insert(Self::USER_ID, self.user_id)
            .and_then(|_| session.insert(Self::USERNAME, &self.username))
            .and_then(|_| session.insert(Self::ROLE, self.role))
            .map_err(|_| AppError::Internal("Failed to write session cookie".to_string()))
    }

    pub fn from_session(session: &Session) -> Res<Principal> {
        let user_id = session
            .get::<i64>(Self::USER_ID)
            .map_err(|_| AppError::BadRequest("Session error".to_string()))?
            .ok_or(AppError::LoginRequired)?;
        let username = session
            .get::<String>(Self::USERNAME)
            .map_err(|_| AppError::BadRequest("Session error".to_string()))?
            .ok_or(AppError::LoginRequired)?;
        let role = session
            .get::<Role>(Self::ROLE)
            .map_err(|_| AppError::BadRequest("Session error".to_string()))?
            .ok_or(AppError::LoginRequired)?;

        Ok(Principal {
            user_id,
            username,
            role,
        })
    }

    fn require(self, role: Role) -> Res<Principal> {
        if self.role == role {
            Ok(self)
        } else {
            Err(AppError::Forbidden(format!(
                "{} access required",
                role.as_str()
            )))
        }
    }
}

impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Principal::from_session(&req.get_session()))
    }
}

/// A principal proven to carry the admin role.
pub struct AdminUser(pub Principal);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            Principal::from_session(&req.get_session())
                .and_then(|p| p.require(Role::Admin))
                .map(AdminUser),
        )
    }
}

/// A principal proven to carry the dealership role.
pub struct DealerUser(pub Principal);

impl FromRequest for DealerUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            Principal::from_session(&req.get_session())
                .and_then(|p| p.require(Role::Dealership))
                .map(DealerUser),
        )
    }
}

/// A principal proven to carry the customer role.
pub struct CustomerUser(pub Principal);

impl FromRequest for CustomerUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            Principal::from_session(&req.get_session())
                .and_then(|p| p.require(Role::Customer))
                .map(CustomerUser),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_serde() {
        for role in [Role::Dealership, Role::Admin, Role::Customer] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn require_rejects_other_roles() {
        let principal = Principal {
            user_id: 1,
            username: "ada".to_string(),
            role: Role::Customer,
        };
        assert!(principal.clone().require(Role::Customer).is_ok());
        assert!(matches!(
            principal.require(Role::Admin),
            Err(AppError::Forbidden(_))
        ));
    }
}
