use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::time::Instant;

use crate::error::SeedError;

/// Counts of records created by one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// The store already held data and nothing was written.
    pub skipped: bool,
    pub categories: usize,
    pub sub_categories: usize,
    pub products: usize,
}

impl SeedSummary {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait Seeder: Send {
    async fn seed(&mut self, db: &DatabaseConnection) -> Result<SeedSummary, SeedError>;
}

/// Runs one seeder behind a padded status line and logs the outcome.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &mut S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<SeedSummary, SeedError> {
    common::status::begin("Seeding", name);

    let start = Instant::now();
    match seeder.seed(db).await {
        Ok(summary) if summary.skipped => {
            common::status::skipped("already populated");
            tracing::info!(seeder = name, "store already populated, nothing seeded");
            Ok(summary)
        }
        Ok(summary) => {
            common::status::done(start.elapsed());
            tracing::info!(
                seeder = name,
                categories = summary.categories,
                sub_categories = summary.sub_categories,
                products = summary.products,
                "seeding complete"
            );
            Ok(summary)
        }
        Err(err) => {
            common::status::failed();
            tracing::error!(seeder = name, error = %err, "seeding failed");
            Err(err)
        }
    }
}
