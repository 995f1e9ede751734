//! # Store Client
//!
//! High-level API over the Resource actor. It wraps a `ResourceClient<Resource>` and
//! exposes the store contract: `list` (from [`ActorClient`]) and `append`.

use crate::model::{Resource, ResourceCreate};
use crate::resource_actor::ResourceError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Resource actor.
#[derive(Clone)]
pub struct StoreClient {
    inner: ResourceClient<Resource>,
}

impl StoreClient {
    pub fn new(inner: ResourceClient<Resource>) -> Self {
        Self { inner }
    }

    /// Appends a record and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn append(&self, params: ResourceCreate) -> Result<Resource, ResourceError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Resource> for StoreClient {
    type Error = ResourceError;

    fn inner(&self) -> &ResourceClient<Resource> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ResourceError::ActorCommunicationError(e.to_string())
    }
}
