//! User entity (row mapping for the `users` table).
//!
//! The password hash stays inside the persistence layer; the domain `User`
//! it converts into does not carry it.

use domain::models::User;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        User {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}
