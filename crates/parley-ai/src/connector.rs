//! Provider client handles and the connector that produces them.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{AiClient, ConfigError};

/// Opaque, cheaply clonable handle to an authenticated provider client.
///
/// Handles are replaced, never mutated: a new API key yields a new handle.
#[derive(Clone)]
pub struct ProviderClient {
    inner: Arc<dyn AiClient>,
}

impl ProviderClient {
    pub fn new(client: impl AiClient + 'static) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Whether two handles refer to the same underlying client.
    pub fn same_as(&self, other: &ProviderClient) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for ProviderClient {
    type Target = dyn AiClient;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClient").finish_non_exhaustive()
    }
}

/// Builds provider clients from an API key.
///
/// `connect` may contact the provider to check the key; it must not touch
/// any session state.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, api_key: &str, model: &str) -> Result<ProviderClient, ConfigError>;
}
