//! Public asset storage backed by `object_store`.

use async_trait::async_trait;
use object_store::{
    azure::MicrosoftAzureBuilder, local::LocalFileSystem, memory::InMemory, path::Path,
    Attribute, Attributes, ObjectStore, PutOptions, PutPayload,
};
use std::sync::Arc;

use crate::server::{
    config::{AssetBackend, AssetConfig},
    error::{config::ConfigError, provider::ProviderError, AppError},
};

/// Category of stored asset. Each kind is written under its own key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    ProofOfPayment,
    Card,
    ProductImage,
    NewsImage,
}

impl AssetKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::ProofOfPayment => "proofs",
            Self::Card => "cards",
            Self::ProductImage => "products",
            Self::NewsImage => "news",
        }
    }
}

/// Stores a named binary asset and returns the URL it is publicly served from.
///
/// Writing the same kind and name twice overwrites the earlier object, which is what
/// makes re-rendering a membership card safe.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn store(
        &self,
        kind: AssetKind,
        name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, ProviderError>;
}

/// `AssetStore` writing to any `object_store` backend.
pub struct ObjectAssetStore {
    store: Arc<dyn ObjectStore>,
    /// Base URL the backend's objects are served from, without trailing slash.
    public_base_url: String,
}

impl ObjectAssetStore {
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// In-memory store, used when no durable backend is configured and in tests.
    pub fn in_memory(public_base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(InMemory::new()), public_base_url)
    }

    /// Builds the configured backend.
    ///
    /// Azure reads its account and credentials from the standard `AZURE_*` environment
    /// variables understood by `object_store`; the local backend creates its root
    /// directory if it does not exist.
    ///
    /// # Arguments
    /// - `config` - Asset section of the application configuration
    ///
    /// # Returns
    /// - `Ok(ObjectAssetStore)` - Store ready for writes
    /// - `Err(AppError::ConfigErr)` - Backend could not be built from the configuration
    pub fn from_config(config: &AssetConfig) -> Result<Self, AppError> {
        let store: Arc<dyn ObjectStore> = match &config.backend {
            AssetBackend::Azure { container } => Arc::new(
                MicrosoftAzureBuilder::from_env()
                    .with_container_name(container)
                    .build()
                    .map_err(|e| invalid("AZURE_STORAGE_CONTAINER", e))?,
            ),
            AssetBackend::Local { root } => {
                std::fs::create_dir_all(root).map_err(|e| invalid("ASSET_LOCAL_ROOT", e))?;
                Arc::new(
                    LocalFileSystem::new_with_prefix(root)
                        .map_err(|e| invalid("ASSET_LOCAL_ROOT", e))?,
                )
            }
            AssetBackend::Memory => Arc::new(InMemory::new()),
        };

        tracing::info!("Asset store configured with {} backend", config.backend.name());

        Ok(Self::new(store, config.public_base_url.clone()))
    }

    fn public_url(&self, path: &Path) -> String {
        format!("{}/{}", self.public_base_url, path)
    }
}

fn invalid(name: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}

#[async_trait]
impl AssetStore for ObjectAssetStore {
    async fn store(
        &self,
        kind: AssetKind,
        name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, ProviderError> {
        let path = Path::from_iter([kind.prefix(), name]);

        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store
            .put_opts(&path, PutPayload::from(bytes), opts)
            .await?;

        tracing::debug!("Stored asset {}", path);

        Ok(self.public_url(&path))
    }
}
