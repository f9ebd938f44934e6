//! Fixed inputs of the catalog seed: the category tree and the sample image
//! pools. Both are plain values handed to the seeder, so tests can swap in
//! their own.

use std::collections::HashMap;

/// Pool used for categories without a curated pool.
pub const DEFAULT_IMAGE_CATEGORY: &str = "Electronics";

const CATALOG_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Electronics",
        &["Laptops", "Smartphones", "Cameras", "Audio", "Accessories", "Gaming"],
    ),
    (
        "Fashion",
        &["Men's Clothing", "Women's Clothing", "Kids", "Shoes", "Watches", "Jewelry"],
    ),
    (
        "Home & Kitchen",
        &["Furniture", "Decor", "Kitchenware", "Bedding", "Lighting", "Storage"],
    ),
    (
        "Books",
        &["Fiction", "Non-fiction", "Sci-Fi", "Biography", "Children", "Mystery"],
    ),
];

const IMAGE_POOLS: &[(&str, &[&str])] = &[
    (
        "Electronics",
        &[
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1526738549149-8e07eca6c147?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1585565804112-f201f68c48b4?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?auto=format&fit=crop&w=800&q=80",
        ],
    ),
    (
        "Fashion",
        &[
            "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1552374196-1ab2a1c593e8?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1483985988355-763728e1935b?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1469334031218-e382a71b716b?auto=format&fit=crop&w=800&q=80",
        ],
    ),
    (
        "Home & Kitchen",
        &[
            "https://images.unsplash.com/photo-1556911220-e15b29be8c8f?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1513694203232-719a280e022f?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1583847661884-db8e516fc694?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1522758971460-1d21eed7dc1d?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1517649763962-0c623066013b?auto=format&fit=crop&w=800&q=80",
        ],
    ),
    (
        "Books",
        &[
            "https://images.unsplash.com/photo-1495446815901-a7297e633e8d?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1491841550275-ad7854e35ca6?auto=format&fit=crop&w=800&q=80",
        ],
    ),
];

/// One top-level category and its sub-categories, in seeding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub category: String,
    pub sub_categories: Vec<String>,
}

impl TaxonomyEntry {
    pub fn new(category: impl Into<String>, sub_categories: &[&str]) -> Self {
        Self {
            category: category.into(),
            sub_categories: sub_categories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered category tree walked by a seeding pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    pub fn new(entries: Vec<TaxonomyEntry>) -> Self {
        Self { entries }
    }

    /// The storefront's four categories with six sub-categories each.
    pub fn builtin() -> Self {
        Self::new(
            CATALOG_TAXONOMY
                .iter()
                .map(|(category, subs)| TaxonomyEntry::new(*category, subs))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn sub_category_count(&self) -> usize {
        self.entries.iter().map(|e| e.sub_categories.len()).sum()
    }
}

/// Sample image URLs keyed by exact top-level category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePools {
    pools: HashMap<String, Vec<String>>,
    default_category: String,
}

impl ImagePools {
    pub fn new(
        pools: impl IntoIterator<Item = (String, Vec<String>)>,
        default_category: impl Into<String>,
    ) -> Self {
        Self {
            pools: pools.into_iter().collect(),
            default_category: default_category.into(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            IMAGE_POOLS.iter().map(|(category, urls)| {
                (
                    category.to_string(),
                    urls.iter().map(|u| u.to_string()).collect(),
                )
            }),
            DEFAULT_IMAGE_CATEGORY,
        )
    }

    /// Pool for `category`, or the default category's pool when there is no
    /// exact match. Empty only if the default pool itself is missing.
    pub fn pool_for(&self, category: &str) -> &[String] {
        self.pools
            .get(category)
            .or_else(|| self.pools.get(&self.default_category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_curated_pool(&self, category: &str) -> bool {
        self.pools.contains_key(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_taxonomy_has_four_categories_of_six() {
        let taxonomy = Taxonomy::builtin();
        let names: Vec<_> = taxonomy.entries().iter().map(|e| e.category.as_str()).collect();

        assert_eq!(names, ["Electronics", "Fashion", "Home & Kitchen", "Books"]);
        assert!(taxonomy.entries().iter().all(|e| e.sub_categories.len() == 6));
        assert_eq!(taxonomy.sub_category_count(), 24);
        assert_eq!(taxonomy.entries()[1].sub_categories[0], "Men's Clothing");
    }

    #[test]
    fn every_builtin_category_has_a_five_image_pool() {
        let pools = ImagePools::builtin();
        for entry in Taxonomy::builtin().entries() {
            assert!(pools.has_curated_pool(&entry.category));
            assert_eq!(pools.pool_for(&entry.category).len(), 5);
        }
    }

    #[test]
    fn lookup_is_exact_and_falls_back_to_electronics() {
        let pools = ImagePools::builtin();
        let electronics = pools.pool_for("Electronics").to_vec();

        assert_ne!(pools.pool_for("Books"), electronics.as_slice());
        assert_eq!(pools.pool_for("Garden"), electronics.as_slice());
        assert_eq!(pools.pool_for("books"), electronics.as_slice());
        assert!(!pools.has_curated_pool("Garden"));
    }

    #[test]
    fn missing_default_pool_yields_empty_slice() {
        let pools = ImagePools::new(
            [("Books".to_string(), vec!["https://img/book".to_string()])],
            "Electronics",
        );
        assert_eq!(pools.pool_for("Books").len(), 1);
        assert!(pools.pool_for("Garden").is_empty());
    }
}
