use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to an in-memory partition or create its tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
