use actix_web::{Responder, get};
use common::error::Res;
use common::http::Success;
use common::principal::Principal;

/// Returns the signed-in principal, or redirects to `/login` when the
/// session cookie carries none.
#[get("/session")]
pub async fn get_session(principal: Principal) -> Res<impl Responder> {
    Success::ok(principal)
}
