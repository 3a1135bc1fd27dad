//! User CRUD service.
//!
//! Passwords are hashed here, before anything touches the database, and the
//! plaintext never reaches a repository or an audit snapshot.

use domain::models::{
    AuditTable, NewAuditEntry, NewUser, RequestContext, User, UserInput, UserUpdate,
};
use domain::validate::{validate_user, PasswordRule};
use persistence::repositories::{audit_log, user, UserRepository};
use shared::password::hash_password;
use sqlx::PgPool;

use crate::error::ApiError;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
    repo: UserRepository,
}

/// A duplicate email violates `users_email_key`; everything else is an
/// unexpected persistence failure.
fn map_db_error(err: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return ApiError::Conflict("Este e-mail já está cadastrado".into());
        }
    }
    err.into()
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        let repo = UserRepository::new(pool.clone());
        Self { pool, repo }
    }

    /// All users, ordered by name.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let entities = self.repo.list().await?;
        Ok(entities.into_iter().map(User::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(User::from)
            .ok_or_else(|| ApiError::NotFound("Usuário não encontrado".into()))
    }

    /// Validates, hashes the password, inserts, and audits a new user.
    /// A duplicate email aborts the transaction before any audit entry is
    /// written.
    pub async fn create(&self, input: &UserInput, context: RequestContext) -> Result<i64, ApiError> {
        let violations = validate_user(input, PasswordRule::Required);
        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        let password = input.password.as_deref().unwrap_or_default();
        let new_user = NewUser {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_lowercase(),
            password_hash: hash_password(password)?,
        };

        let mut tx = self.pool.begin().await?;

        let id = user::insert(&mut *tx, &new_user)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| ApiError::Internal("Não foi possível criar o usuário".into()))?;

        let entry = NewAuditEntry::create(AuditTable::Users, id, new_user.snapshot(), context);
        audit_log::record(&mut *tx, &entry).await?;

        tx.commit().await?;

        tracing::info!(user_id = id, "User created");
        Ok(id)
    }

    /// Validates and applies an edit. A blank password keeps the stored
    /// hash; a supplied one is validated and rehashed.
    pub async fn update(
        &self,
        id: i64,
        input: &UserInput,
        context: RequestContext,
    ) -> Result<(), ApiError> {
        let violations = validate_user(input, PasswordRule::IfProvided);
        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        let password_hash = if input.wants_password_change() {
            let password = input.password.as_deref().unwrap_or_default();
            Some(hash_password(password)?)
        } else {
            None
        };

        let update = UserUpdate {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_lowercase(),
            password_hash,
        };

        let mut tx = self.pool.begin().await?;

        let current: User = user::fetch(&mut *tx, id)
            .await?
            .map(User::from)
            .ok_or_else(|| ApiError::NotFound("Usuário não encontrado".into()))?;

        let rows = user::update(&mut *tx, id, &update)
            .await
            .map_err(map_db_error)?;
        if rows == 0 {
            return Err(ApiError::Internal("Nenhum usuário foi atualizado".into()));
        }

        let entry = NewAuditEntry::update(
            AuditTable::Users,
            id,
            current.snapshot(),
            update.snapshot(),
            context,
        );
        audit_log::record(&mut *tx, &entry).await?;

        tx.commit().await?;

        tracing::info!(user_id = id, "User updated");
        Ok(())
    }

    /// Deletes a user. Zero rows affected after a successful fetch means a
    /// concurrent delete won the race; reported as not found.
    pub async fn delete(&self, id: i64, context: RequestContext) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        let current: User = user::fetch(&mut *tx, id)
            .await?
            .map(User::from)
            .ok_or_else(|| ApiError::NotFound("Usuário não encontrado".into()))?;

        let rows = user::delete(&mut *tx, id).await?;
        if rows == 0 {
            return Err(ApiError::NotFound("Usuário não encontrado".into()));
        }

        let entry = NewAuditEntry::delete(AuditTable::Users, id, current.snapshot(), context);
        audit_log::record(&mut *tx, &entry).await?;

        tx.commit().await?;

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
