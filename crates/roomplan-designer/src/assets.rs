//! Asset dimension resolution
//!
//! Placement needs real dimensions before an item enters the scene. They come
//! from, in order: the catalog entry's explicit dimensions, the dimensions of
//! the entry's model asset, and finally the type-keyed default table.
//!
//! Model loading is an external service behind [`AssetLoader`].
//! [`DimensionResolver`] caches its answers and remembers failures so a broken
//! asset is fetched at most once.

use async_trait::async_trait;
use parking_lot::RwLock;
use roomplan_core::{AssetError, Dimensions, FurnitureDefinition};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Service that measures model assets
///
/// Implementations return the axis-aligned dimensions of the asset's
/// geometry.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Loads `asset_ref` and returns its dimensions.
    async fn load_dimensions(&self, asset_ref: &str) -> Result<Dimensions, AssetError>;
}

/// Loader backed by a JSON manifest mapping asset references to dimensions.
///
/// ```json
/// { "/models/bed.glb": { "width": 1.6, "height": 0.6, "depth": 2.0 } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManifestAssetLoader {
    entries: HashMap<String, Dimensions>,
}

impl ManifestAssetLoader {
    pub fn new(entries: HashMap<String, Dimensions>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> roomplan_core::Result<Self> {
        let entries: HashMap<String, Dimensions> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> roomplan_core::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let loader = Self::from_json(&content)?;
        tracing::info!(
            "Loaded asset manifest with {} entries from {:?}",
            loader.entries.len(),
            path.as_ref()
        );
        Ok(loader)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl AssetLoader for ManifestAssetLoader {
    async fn load_dimensions(&self, asset_ref: &str) -> Result<Dimensions, AssetError> {
        self.entries
            .get(asset_ref)
            .copied()
            .ok_or_else(|| AssetError::NotFound {
                asset_ref: asset_ref.to_string(),
            })
    }
}

/// Loader that never succeeds; every item falls back to default dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAssetLoader;

#[async_trait]
impl AssetLoader for OfflineAssetLoader {
    async fn load_dimensions(&self, _asset_ref: &str) -> Result<Dimensions, AssetError> {
        Err(AssetError::Unavailable {
            reason: "asset loading is disabled".to_string(),
        })
    }
}

/// Caching front of an [`AssetLoader`].
pub struct DimensionResolver {
    loader: Arc<dyn AssetLoader>,
    cache: RwLock<HashMap<String, Dimensions>>,
    failed: RwLock<HashSet<String>>,
}

impl DimensionResolver {
    pub fn new(loader: Arc<dyn AssetLoader>) -> Self {
        Self {
            loader,
            cache: RwLock::new(HashMap::new()),
            failed: RwLock::new(HashSet::new()),
        }
    }

    /// Resolver that always falls back to catalog or default dimensions.
    pub fn offline() -> Self {
        Self::new(Arc::new(OfflineAssetLoader))
    }

    /// Resolves the dimensions to place `definition` with. Never fails.
    pub async fn resolve(&self, definition: &FurnitureDefinition) -> Dimensions {
        if let Some(dimensions) = definition.dimensions.filter(Dimensions::is_valid) {
            return dimensions;
        }

        if let Some(asset_ref) = &definition.asset_ref {
            if let Some(dimensions) = self.asset_dimensions(asset_ref).await {
                return dimensions;
            }
        }

        definition.default_dimensions()
    }

    /// Dimensions of `asset_ref`, loading them on first use.
    pub async fn asset_dimensions(&self, asset_ref: &str) -> Option<Dimensions> {
        // Guards must be released before awaiting the loader
        let cached = self.cache.read().get(asset_ref).copied();
        if cached.is_some() {
            return cached;
        }
        if self.has_failed(asset_ref) {
            return None;
        }

        let result = match self.loader.load_dimensions(asset_ref).await {
            Ok(dimensions) if dimensions.is_valid() => Ok(dimensions),
            Ok(_) => Err(AssetError::DegenerateGeometry {
                asset_ref: asset_ref.to_string(),
            }),
            Err(err) => Err(err),
        };

        match result {
            Ok(dimensions) => {
                tracing::debug!("Resolved {} to {}", asset_ref, dimensions);
                self.cache.write().insert(asset_ref.to_string(), dimensions);
                Some(dimensions)
            }
            Err(err) => {
                tracing::warn!("Falling back to default dimensions: {}", err);
                self.failed.write().insert(asset_ref.to_string());
                None
            }
        }
    }

    pub fn is_cached(&self, asset_ref: &str) -> bool {
        self.cache.read().contains_key(asset_ref)
    }

    pub fn has_failed(&self, asset_ref: &str) -> bool {
        self.failed.read().contains(asset_ref)
    }

    /// Forgets all cached dimensions and failures.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
        self.failed.write().clear();
    }

    /// Drops cache entries for assets not in `used`.
    pub fn cleanup_unused<'a, I>(&self, used: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let used: HashSet<&str> = used.into_iter().collect();
        self.cache.write().retain(|key, _| used.contains(key.as_str()));
    }

    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }
}

impl std::fmt::Debug for DimensionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DimensionResolver")
            .field("cached", &self.cached_count())
            .field("failed", &self.failed.read().len())
            .finish()
    }
}
