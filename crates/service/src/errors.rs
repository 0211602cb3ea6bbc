use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Client-caused failures: bad input or a row the database refused.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::Constraint(_)
                | Self::Model(ModelError::Validation(_))
                | Self::Model(ModelError::Constraint(_))
        )
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match ModelError::from(e) {
            ModelError::Constraint(msg) => Self::Constraint(msg),
            ModelError::Db(msg) => Self::Db(msg),
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}
