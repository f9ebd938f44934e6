use db::store::{CatalogStore, SeaOrmCatalogStore};
use db::test_utils::setup_test_db;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use seeder::error::SeedError;
use seeder::seed::{SeedSummary, run_seeder};
use seeder::seeds::catalog::CatalogSeeder;
use seeder::settings::SeedSettings;
use seeder::taxonomy::{ImagePools, Taxonomy, TaxonomyEntry};
use serial_test::serial;
use std::collections::HashMap;
use util::config::AppConfig;

fn seeder_with(seed: u64, taxonomy: Taxonomy) -> CatalogSeeder<StdRng> {
    CatalogSeeder::new(
        StdRng::seed_from_u64(seed),
        taxonomy,
        ImagePools::builtin(),
        SeedSettings::default(),
    )
}

#[tokio::test]
async fn empty_database_gets_full_catalog() {
    let db = setup_test_db().await;

    let summary = seeder_with(11, Taxonomy::builtin())
        .seed_in_transaction(&db)
        .await
        .unwrap();

    let store = SeaOrmCatalogStore::new(&db);
    assert_eq!(store.category_count().await.unwrap(), 4);
    assert_eq!(store.sub_category_count().await.unwrap(), 24);
    let product_count = store.product_count().await.unwrap();
    assert!((192..=240).contains(&product_count), "{product_count}");
    assert_eq!(summary.products as u64, product_count);

    let categories = store.categories().await.unwrap();
    let sub_categories = store.sub_categories().await.unwrap();
    let products = store.products().await.unwrap();

    let category_names: HashMap<i64, &str> =
        categories.iter().map(|c| (c.id, c.name.as_str())).collect();
    let owner: HashMap<i64, i64> = sub_categories.iter().map(|s| (s.id, s.category_id)).collect();
    assert!(owner.values().all(|id| category_names.contains_key(id)));

    let pools = ImagePools::builtin();
    let min = Decimal::new(2_000, 2);
    let max = Decimal::new(50_000, 2);
    for product in &products {
        let category_id = owner[&product.sub_category_id];
        let pool = pools.pool_for(category_names[&category_id]);

        assert!(product.price >= min && product.price < max);
        assert_eq!(product.price.scale(), 2);
        assert_eq!(product.images.len(), 3);
        assert!(product.images.iter().all(|url| pool.contains(url)));
        if let Some(discount) = product.discount_price {
            assert_eq!(
                discount,
                (product.price * Decimal::new(85, 2))
                    .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
            );
        }
    }

    for sub in &sub_categories {
        let count = products.iter().filter(|p| p.sub_category_id == sub.id).count();
        assert!((8..=10).contains(&count), "{} has {count}", sub.name);
    }
}

#[tokio::test]
async fn reseeding_leaves_catalog_unchanged() {
    let db = setup_test_db().await;

    seeder_with(12, Taxonomy::builtin()).seed_in_transaction(&db).await.unwrap();
    let store = SeaOrmCatalogStore::new(&db);
    let before = store.products().await.unwrap();

    let second = seeder_with(13, Taxonomy::builtin())
        .seed_in_transaction(&db)
        .await
        .unwrap();

    assert_eq!(second, SeedSummary::skipped());
    assert_eq!(store.category_count().await.unwrap(), 4);
    assert_eq!(store.sub_category_count().await.unwrap(), 24);
    assert_eq!(store.products().await.unwrap(), before);
}

#[tokio::test]
async fn database_with_one_category_is_not_seeded() {
    let db = setup_test_db().await;
    let store = SeaOrmCatalogStore::new(&db);
    store.create_category("Handmade").await.unwrap();

    let summary = seeder_with(14, Taxonomy::builtin())
        .seed_in_transaction(&db)
        .await
        .unwrap();

    assert!(summary.skipped);
    assert_eq!(store.category_count().await.unwrap(), 1);
    assert_eq!(store.sub_category_count().await.unwrap(), 0);
    assert_eq!(store.product_count().await.unwrap(), 0);
}

#[tokio::test]
async fn failure_midway_rolls_back_everything() {
    let db = setup_test_db().await;
    // Second "Tools" violates the per-category unique name.
    let taxonomy = Taxonomy::new(vec![
        TaxonomyEntry::new("Garden", &["Plants"]),
        TaxonomyEntry::new("Workshop", &["Tools", "Tools"]),
    ]);

    let err = seeder_with(15, taxonomy).seed_in_transaction(&db).await.unwrap_err();
    assert!(matches!(err, SeedError::Store(_)));

    let store = SeaOrmCatalogStore::new(&db);
    assert_eq!(store.category_count().await.unwrap(), 0);
    assert_eq!(store.sub_category_count().await.unwrap(), 0);
    assert_eq!(store.product_count().await.unwrap(), 0);

    // A later pass starts from a clean slate.
    let summary = seeder_with(16, Taxonomy::builtin())
        .seed_in_transaction(&db)
        .await
        .unwrap();
    assert_eq!((summary.categories, summary.sub_categories), (4, 24));
}

#[tokio::test]
async fn category_without_pool_uses_electronics_images() {
    let db = setup_test_db().await;
    let taxonomy = Taxonomy::new(vec![TaxonomyEntry::new("Garden", &["Plants", "Tools"])]);

    seeder_with(17, taxonomy).seed_in_transaction(&db).await.unwrap();

    let pools = ImagePools::builtin();
    let electronics = pools.pool_for("Electronics");
    let products = SeaOrmCatalogStore::new(&db).products().await.unwrap();
    assert!(!products.is_empty());
    for product in &products {
        assert!(product.images.iter().all(|url| electronics.contains(url)));
        assert!(product.description.contains("Garden"));
    }
}

#[tokio::test]
async fn run_seeder_reports_summary() {
    let db = setup_test_db().await;
    let mut catalog = seeder_with(18, Taxonomy::builtin());

    let first = run_seeder(&mut catalog, "Catalog", &db).await.unwrap();
    assert_eq!((first.categories, first.sub_categories), (4, 24));
    assert!(!first.skipped);

    let second = run_seeder(&mut catalog, "Catalog", &db).await.unwrap();
    assert!(second.skipped);
}

#[tokio::test]
#[serial]
async fn configured_seed_reproduces_catalog() {
    AppConfig::set_seed_rng_seed(Some(42));
    AppConfig::set_seed_discount_probability(1.0);

    let first_db = setup_test_db().await;
    let second_db = setup_test_db().await;
    CatalogSeeder::from_config().seed_in_transaction(&first_db).await.unwrap();
    CatalogSeeder::from_config().seed_in_transaction(&second_db).await.unwrap();

    AppConfig::reset();

    let first = SeaOrmCatalogStore::new(&first_db).products().await.unwrap();
    let second = SeaOrmCatalogStore::new(&second_db).products().await.unwrap();
    let strip = |products: Vec<db::catalog::Product>| {
        products
            .into_iter()
            .map(|p| (p.title, p.price, p.discount_price, p.images))
            .collect::<Vec<_>>()
    };
    let first = strip(first);
    assert!(first.iter().all(|(_, _, discount, _)| discount.is_some()));
    assert_eq!(first, strip(second));
}
