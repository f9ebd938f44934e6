use migration::{Migrator, MigratorTrait};
use seeder::seed::run_seeder;
use seeder::seeds::catalog::CatalogSeeder;
use std::process;
use util::config;

#[tokio::main]
async fn main() {
    let guard = common::logger::init_logging(
        &config::log_dir(),
        &config::log_file(),
        &config::log_level(),
        config::log_to_stdout(),
    );

    let code = match run().await {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(error = %err, "seeder exited with an error");
            eprintln!("Seeding failed: {err}");
            1
        }
    };

    // process::exit skips destructors; flush the log writer first.
    drop(guard);
    process::exit(code);
}

async fn run() -> Result<(), seeder::error::SeedError> {
    tracing::info!(project = %config::project_name(), "starting catalog seeder");
    let db = db::connect().await?;
    Migrator::up(&db, None).await?;

    run_seeder(&mut CatalogSeeder::from_config(), "Catalog", &db).await?;
    Ok(())
}
