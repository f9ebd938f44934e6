use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a seeding pass. Store errors pass through unchanged.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] DbErr),
}
