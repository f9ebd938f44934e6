use migration::Migrator;
use sea_orm::DbErr;
use sea_orm_migration::prelude::*;
use std::time::Instant;

/// Applies every pending migration one step at a time, printing a status
/// line per migration. Stops at the first failure.
pub async fn run_all_migrations(url: &str) -> Result<(), DbErr> {
    let db = sea_orm::Database::connect(url).await?;

    println!("Running migrations...");
    let pending = Migrator::get_pending_migrations(&db).await?;
    if pending.is_empty() {
        println!("Nothing to migrate.");
        return Ok(());
    }

    for migration in pending {
        common::status::begin("Applying", migration.name());
        let start = Instant::now();
        match Migrator::up(&db, Some(1)).await {
            Ok(()) => common::status::done(start.elapsed()),
            Err(err) => {
                common::status::failed();
                return Err(err);
            }
        }
    }

    Ok(())
}
