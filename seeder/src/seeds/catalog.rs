use async_trait::async_trait;
use db::store::{CatalogStore, SeaOrmCatalogStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, TransactionTrait};
use util::config;

use crate::error::SeedError;
use crate::generator::ProductGenerator;
use crate::seed::{SeedSummary, Seeder};
use crate::settings::SeedSettings;
use crate::taxonomy::{ImagePools, Taxonomy};

/// Populates an empty catalog with the sample taxonomy and generated
/// products.
///
/// All inputs, including the random source, are supplied by the caller.
pub struct CatalogSeeder<R> {
    rng: R,
    taxonomy: Taxonomy,
    pools: ImagePools,
    settings: SeedSettings,
}

impl CatalogSeeder<StdRng> {
    /// Built-in tables and settings from the environment. `SEED_RNG_SEED`
    /// makes the output reproducible; otherwise the generator is seeded
    /// from OS entropy.
    pub fn from_config() -> Self {
        let rng = match config::seed_rng_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(
            rng,
            Taxonomy::builtin(),
            ImagePools::builtin(),
            SeedSettings::from_config(),
        )
    }
}

impl<R: Rng + Send> CatalogSeeder<R> {
    pub fn new(rng: R, taxonomy: Taxonomy, pools: ImagePools, settings: SeedSettings) -> Self {
        Self {
            rng,
            taxonomy,
            pools,
            settings,
        }
    }

    /// One seeding pass against `store`.
    ///
    /// A store that already has categories is left untouched. The first
    /// store failure aborts the pass; records written before it are only
    /// discarded if the store is transaction-scoped.
    pub async fn seed_catalog<S: CatalogStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<SeedSummary, SeedError> {
        let existing = store.category_count().await?;
        if existing > 0 {
            tracing::info!(existing, "catalog already has categories, skipping seed");
            return Ok(SeedSummary::skipped());
        }

        let generator = ProductGenerator::new(&self.pools, &self.settings);
        let mut summary = SeedSummary::default();

        for entry in self.taxonomy.entries() {
            let category = store.create_category(&entry.category).await?;
            summary.categories += 1;

            for sub_name in &entry.sub_categories {
                let sub_category = store.create_sub_category(sub_name, category.id).await?;
                summary.sub_categories += 1;

                let products = generator.generate(&mut self.rng, &sub_category, &entry.category);
                tracing::debug!(
                    category = %entry.category,
                    sub_category = %sub_category.name,
                    count = products.len(),
                    "generated products"
                );
                for product in products {
                    store.create_product(product).await?;
                    summary.products += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Runs [`Self::seed_catalog`] inside a single transaction: committed
    /// when the whole pass succeeds, rolled back on any failure.
    pub async fn seed_in_transaction(
        &mut self,
        db: &DatabaseConnection,
    ) -> Result<SeedSummary, SeedError> {
        let txn = db.begin().await?;

        let result = {
            let store = SeaOrmCatalogStore::new(&txn);
            self.seed_catalog(&store).await
        };

        match result {
            Ok(summary) => {
                txn.commit().await?;
                Ok(summary)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback after failed seed also failed");
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl<R: Rng + Send> Seeder for CatalogSeeder<R> {
    async fn seed(&mut self, db: &DatabaseConnection) -> Result<SeedSummary, SeedError> {
        self.seed_in_transaction(db).await
    }
}
