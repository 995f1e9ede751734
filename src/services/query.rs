use crate::clients::StoreClient;
use crate::model::{NameFilter, Resource};
use crate::resource_actor::ResourceError;
use actor_framework::ActorClient;
use tracing::instrument;

/// Read-only lookup over the store.
#[derive(Clone)]
pub struct QueryService {
    store: StoreClient,
}

impl QueryService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// All resources in insertion order, or those whose name contains `filter`
    /// case-insensitively. An absent or empty filter returns everything.
    #[instrument(skip(self))]
    pub async fn resources(&self, filter: Option<&str>) -> Result<Vec<Resource>, ResourceError> {
        let filter = filter.and_then(NameFilter::new);
        self.store.list(filter).await
    }

    /// Number of stored resources.
    pub async fn count(&self) -> Result<usize, ResourceError> {
        self.store.count().await
    }
}
