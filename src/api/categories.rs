//! Workplace category provider with a session cache

use super::error::CategoryFetchError;
use super::traits::CatalogApi;
use crate::state::ProductCategory;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Friendly names for the identifiers the catalog is known to return
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("beauty", "Beauty Salon"),
    ("fragrances", "Perfume Store"),
    ("furniture", "Furniture Store"),
    ("groceries", "Grocery Store"),
    ("home-decoration", "Home Decor Shop"),
    ("kitchen-accessories", "Kitchen Store"),
    ("laptops", "Computer Store"),
    ("mens-shirts", "Clothing Store"),
    ("mens-shoes", "Shoe Store"),
    ("mens-watches", "Watch Shop"),
    ("mobile-accessories", "Phone Accessories"),
    ("motorcycle", "Motorcycle Dealership"),
    ("skin-care", "Pharmacy"),
    ("smartphones", "Electronics Store"),
    ("sports-accessories", "Sports Store"),
    ("sunglasses", "Optical Store"),
    ("tablets", "Electronics Store"),
    ("tops", "Clothing Store"),
    ("vehicle", "Car Dealership"),
    ("womens-bags", "Accessories Store"),
    ("womens-dresses", "Fashion Boutique"),
    ("womens-jewellery", "Jewelry Store"),
    ("womens-shoes", "Shoe Store"),
    ("womens-watches", "Watch Shop"),
];

const FALLBACK: &[(&str, &str)] = &[
    ("office", "Office Work"),
    ("retail", "Retail Store"),
    ("restaurant", "Restaurant"),
    ("hospital", "Hospital"),
    ("school", "School"),
    ("bank", "Bank"),
    ("factory", "Factory"),
    ("hotel", "Hotel"),
];

/// Static list used whenever the remote list is unavailable
pub fn fallback_categories() -> Vec<ProductCategory> {
    FALLBACK
        .iter()
        .map(|(slug, name)| ProductCategory::new(slug, name, ""))
        .collect()
}

/// Display name for a category identifier
pub fn display_name(slug: &str) -> String {
    DISPLAY_NAMES
        .iter()
        .find(|(known, _)| *known == slug)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| derived_name(slug))
}

/// `widgets-misc` → `Widgets Misc Store`
fn derived_name(slug: &str) -> String {
    let words: Vec<String> = slug.split('-').map(capitalize).collect();
    format!("{} Store", words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result of a category lookup
#[derive(Debug)]
pub struct CategoryList {
    pub categories: Vec<ProductCategory>,
    /// Set when the fallback list was returned
    pub advisory: Option<CategoryFetchError>,
}

/// Fetches workplace categories once per session and caches them.
///
/// Clones share the cache. The cache lock is held across the fetch, so
/// overlapping calls issue a single request and the later caller is served
/// from the cache.
#[derive(Clone)]
pub struct CategoryProvider {
    api: Arc<dyn CatalogApi>,
    cache: Arc<Mutex<Option<Vec<ProductCategory>>>>,
}

impl CategoryProvider {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Cached list, or a fresh fetch; falls back to the static list on failure
    pub async fn get_categories(&self) -> CategoryList {
        let mut cache = self.cache.lock().await;

        if let Some(cached) = cache.as_ref() {
            tracing::debug!("Category cache hit ({} entries)", cached.len());
            return CategoryList {
                categories: cached.clone(),
                advisory: None,
            };
        }

        match self.api.fetch_category_list().await {
            Ok(slugs) => {
                let categories: Vec<ProductCategory> = slugs
                    .iter()
                    .map(|slug| ProductCategory {
                        slug: slug.clone(),
                        name: display_name(slug),
                        url: self.api.category_url(slug),
                    })
                    .collect();
                tracing::info!("Loaded {} workplace categories", categories.len());
                *cache = Some(categories.clone());
                CategoryList {
                    categories,
                    advisory: None,
                }
            }
            Err(source) => {
                tracing::warn!("Error fetching product categories: {source}");
                CategoryList {
                    categories: fallback_categories(),
                    advisory: Some(CategoryFetchError { source }),
                }
            }
        }
    }

    /// Forget the cached list; the next lookup hits the network
    pub async fn clear_cache(&self) {
        *self.cache.lock().await = None;
        tracing::debug!("Category cache cleared");
    }

    #[cfg(test)]
    pub async fn is_cached(&self) -> bool {
        self.cache.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockCatalogApi};
    fn mock_with_list(slugs: Vec<&'static str>, times: usize) -> MockCatalogApi {
        let mut mock = MockCatalogApi::new();
        mock.expect_fetch_category_list()
            .times(times)
            .returning(move || Ok(slugs.iter().map(|s| s.to_string()).collect()));
        mock.expect_category_url()
            .returning(|slug| format!("https://dummyjson.com/products/category/{slug}"));
        mock
    }

    fn failing_mock(times: usize) -> MockCatalogApi {
        let mut mock = MockCatalogApi::new();
        mock.expect_fetch_category_list()
            .times(times)
            .returning(|| Err(ApiError::Status(500)));
        mock
    }

    mod names {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_curated_name() {
            assert_eq!(display_name("mens-shoes"), "Shoe Store");
            assert_eq!(display_name("skin-care"), "Pharmacy");
        }

        #[test]
        fn test_derived_name_for_unknown_identifier() {
            assert_eq!(display_name("widgets-misc"), "Widgets Misc Store");
            assert_eq!(display_name("garden"), "Garden Store");
        }

        #[test]
        fn test_derived_name_keeps_empty_segments() {
            assert_eq!(display_name("a--b"), "A  B Store");
        }

        #[test]
        fn test_curated_table_size() {
            assert_eq!(DISPLAY_NAMES.len(), 24);
        }

        #[test]
        fn test_fallback_list() {
            let fallback = fallback_categories();
            let slugs: Vec<&str> = fallback.iter().map(|c| c.slug.as_str()).collect();
            assert_eq!(
                slugs,
                vec!["office", "retail", "restaurant", "hospital", "school", "bank", "factory", "hotel"]
            );
            assert!(fallback.iter().all(|c| c.url.is_empty()));
        }
    }

    mod provider {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_transforms_identifiers() {
            let provider = CategoryProvider::new(Arc::new(mock_with_list(
                vec!["mens-shoes", "widgets-misc"],
                1,
            )));

            let list = provider.get_categories().await;

            assert!(list.advisory.is_none());
            assert_eq!(
                list.categories,
                vec![
                    ProductCategory::new(
                        "mens-shoes",
                        "Shoe Store",
                        "https://dummyjson.com/products/category/mens-shoes"
                    ),
                    ProductCategory::new(
                        "widgets-misc",
                        "Widgets Misc Store",
                        "https://dummyjson.com/products/category/widgets-misc"
                    ),
                ]
            );
        }

        #[tokio::test]
        async fn test_second_call_is_served_from_cache() {
            // times(1): a second network call would fail the mock
            let provider =
                CategoryProvider::new(Arc::new(mock_with_list(vec!["beauty", "laptops"], 1)));

            let first = provider.get_categories().await;
            let second = provider.get_categories().await;

            assert_eq!(first.categories, second.categories);
            assert!(provider.is_cached().await);
        }

        #[tokio::test]
        async fn test_failure_returns_fallback_with_advisory() {
            let provider = CategoryProvider::new(Arc::new(failing_mock(1)));

            let list = provider.get_categories().await;

            assert_eq!(list.categories, fallback_categories());
            assert!(list.advisory.is_some());
            assert!(!provider.is_cached().await);
        }

        #[tokio::test]
        async fn test_failure_is_not_cached() {
            let provider = CategoryProvider::new(Arc::new(failing_mock(2)));

            provider.get_categories().await;
            let again = provider.get_categories().await;

            assert!(again.advisory.is_some());
        }

        #[tokio::test]
        async fn test_clear_cache_forces_refetch() {
            let provider = CategoryProvider::new(Arc::new(mock_with_list(vec!["tops"], 2)));

            provider.get_categories().await;
            provider.clear_cache().await;
            assert!(!provider.is_cached().await);

            let list = provider.get_categories().await;
            assert_eq!(list.categories[0].name, "Clothing Store");
        }

        #[tokio::test]
        async fn test_clones_share_cache() {
            let provider = CategoryProvider::new(Arc::new(mock_with_list(vec!["vehicle"], 1)));
            let clone = provider.clone();

            provider.get_categories().await;
            let list = clone.get_categories().await;

            assert_eq!(list.categories[0].name, "Car Dealership");
        }

        #[tokio::test]
        async fn test_concurrent_calls_fetch_once() {
            let provider = CategoryProvider::new(Arc::new(mock_with_list(vec!["groceries"], 1)));

            let (a, b) = tokio::join!(provider.get_categories(), provider.get_categories());

            assert_eq!(a.categories, b.categories);
        }
    }
}
