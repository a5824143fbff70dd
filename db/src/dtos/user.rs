use common::principal::Role;

pub struct UserCreateRequest {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
