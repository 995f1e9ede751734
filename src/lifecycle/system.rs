use crate::clients::StoreClient;
use crate::config::StoreSettings;
use crate::events::EventChannel;
use crate::model::{Resource, ResourceCreate};
use crate::resource_actor::{self, ResourceError};
use crate::services::{MutationService, QueryService, Services, SubscriptionService};
use tracing::{error, info};

/// The running store: one Resource actor plus the channel it publishes creations on.
pub struct ResourceSystem {
    store: StoreClient,
    events: EventChannel<Resource>,
    handle: tokio::task::JoinHandle<()>,
}

impl ResourceSystem {
    /// Seeds the store and spawns its actor. Must be called inside a Tokio runtime.
    ///
    /// Zero mailbox or event capacities are rejected with [`ResourceError::InvalidSettings`].
    pub fn start(
        settings: StoreSettings,
        seed: Vec<ResourceCreate>,
    ) -> Result<Self, ResourceError> {
        settings
            .validate()
            .map_err(|e| ResourceError::InvalidSettings(e.to_string()))?;
        let events = EventChannel::new(settings.event_capacity);
        let (actor, client) = resource_actor::new(settings.mailbox_size, seed)?;
        info!(records = actor.len(), "Store seeded");

        let handle = tokio::spawn(actor.run(events.clone()));

        Ok(Self {
            store: StoreClient::new(client),
            events,
            handle,
        })
    }

    pub fn store(&self) -> &StoreClient {
        &self.store
    }

    pub fn events(&self) -> &EventChannel<Resource> {
        &self.events
    }

    pub fn query(&self) -> QueryService {
        QueryService::new(self.store.clone())
    }

    pub fn mutation(&self) -> MutationService {
        MutationService::new(self.store.clone())
    }

    pub fn subscription(&self) -> SubscriptionService {
        SubscriptionService::new(self.events.clone())
    }

    pub fn services(&self) -> Services {
        Services {
            query: self.query(),
            mutation: self.mutation(),
            subscription: self.subscription(),
        }
    }

    /// Drops this handle's client and waits for the actor to drain and exit.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!(published = self.events.published(), "System shutdown complete.");
        Ok(())
    }
}
