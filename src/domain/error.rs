//! Errors produced by the model layer.

use thiserror::Error;

/// Failure of a model lookup.
///
/// The display text is what API clients see in the `error` field of the
/// error envelope.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No record matched the lookup key.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// The store rejected or failed the query.
    #[error(transparent)]
    Database(sqlx::Error),
}

impl ModelError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Returns true if the lookup simply matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for ModelError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::NotFound { entity: "record" };
        }

        tracing::error!(error = ?err, "Database query failed");
        Self::Database(err)
    }
}
