use crate::events::{EventChannel, Subscription};
use crate::model::Resource;
use tracing::debug;

/// Hands out live "resource added" feeds, one per client.
#[derive(Clone)]
pub struct SubscriptionService {
    events: EventChannel<Resource>,
}

impl SubscriptionService {
    pub fn new(events: EventChannel<Resource>) -> Self {
        Self { events }
    }

    /// Registers a listener. The returned stream yields every resource created from now
    /// on until it is dropped or the service shuts down.
    pub fn resource_added(&self) -> Subscription<Resource> {
        let subscription = self.events.subscribe();
        debug!(listeners = self.events.listener_count(), "resourceAdded subscription opened");
        subscription
    }

    /// Number of currently connected listeners.
    pub fn listener_count(&self) -> usize {
        self.events.listener_count()
    }
}
