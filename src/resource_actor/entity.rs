//! [`ActorEntity`] implementation for the [`Resource`] domain type.
//!
//! The injected context is the creation-event channel: every appended record is
//! published from inside the actor, right after it becomes visible to `List`.

use super::error::ResourceError;
use crate::events::EventChannel;
use crate::model::{NameFilter, Resource, ResourceCreate, ResourceId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Resource {
    type Id = ResourceId;
    type Create = ResourceCreate;
    type Filter = NameFilter;
    type Context = EventChannel<Resource>;
    type Error = ResourceError;

    fn from_create_params(id: ResourceId, params: ResourceCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.kind, params.region))
    }

    fn matches(&self, filter: &NameFilter) -> bool {
        filter.matches(&self.name)
    }

    /// Publishes the stored record as a "resource added" event.
    async fn on_created(&self, events: &EventChannel<Resource>) {
        let receivers = events.publish(self.clone());
        debug!(id = %self.id, receivers, "Resource added event published");
    }
}
