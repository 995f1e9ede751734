use crate::clients::StoreClient;
use crate::model::{Resource, ResourceCreate};
use crate::resource_actor::ResourceError;
use tracing::info;

/// Creates resources.
///
/// The store actor assigns the id and publishes the "resource added" event after the
/// append, so by the time a listener sees the event the record is already listable.
#[derive(Clone)]
pub struct MutationService {
    store: StoreClient,
}

impl MutationService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// Appends a resource. No validation: any strings, including empty ones, are accepted.
    pub async fn add_resource(
        &self,
        name: impl Into<String>,
        kind: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Resource, ResourceError> {
        let params = ResourceCreate::new(name, kind, region);
        info!(
            target: "resource_feed::mutation",
            name = %params.name,
            kind = %params.kind,
            region = %params.region,
            "addResource"
        );
        self.store.append(params).await
    }
}
