use sqlx::PgPool;

use crate::app_error::AppError;

pub mod waitlist;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Log the actual error for debugging, but don't expose details
        tracing::error!(error = ?err, "Database error");
        match &err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::Database("Database unavailable".into())
            }
            _ => AppError::Database("Database operation failed".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_error::ErrorCode;

    #[test]
    fn sqlx_errors_become_storage_errors() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert_eq!(err.to_string(), "Database error: Database unavailable");

        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
