use sea_orm::{sqlx::error::ErrorKind, DbErr, RuntimeErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        if is_constraint_violation(&e) {
            Self::Constraint(e.to_string())
        } else {
            Self::Db(e.to_string())
        }
    }
}

/// True only when the database rejected the row for a unique, foreign key,
/// not-null or check constraint. Missing tables, locks and lost connections
/// are storage failures.
pub fn is_constraint_violation(e: &DbErr) -> bool {
    if e.sql_err().is_some() {
        return true;
    }
    match e {
        DbErr::Exec(RuntimeErr::SqlxError(inner)) | DbErr::Query(RuntimeErr::SqlxError(inner)) => matches!(
            inner.as_database_error().map(|d| d.kind()),
            Some(
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            )
        ),
        _ => false,
    }
}
