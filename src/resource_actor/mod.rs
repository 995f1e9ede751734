//! # Resource Actor
//!
//! The Resource Store: a single [`ResourceActor`] owning every [`Resource`] in insertion
//! order.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Resource`]
//! - [`error`] - [`ResourceError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor, seeded, and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let events = EventChannel::new(DEFAULT_EVENT_CAPACITY);
//! let (actor, generic_client) = resource_actor::new(32, default_seed())?;
//! let store = StoreClient::new(generic_client);
//!
//! // The event channel is the actor's context: creates are published from inside it
//! tokio::spawn(actor.run(events.clone()));
//!
//! let created = store.append(ResourceCreate::new("Pub/Sub", "Messaging", "asia-east1")).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Resource, ResourceCreate};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the Resource actor, preloaded with `seed`, and its client.
pub fn new(
    mailbox_size: usize,
    seed: Vec<ResourceCreate>,
) -> Result<(ResourceActor<Resource>, ResourceClient<Resource>), ResourceError> {
    let (actor, client) = ResourceActor::new(mailbox_size);
    let actor = actor
        .seed(seed)
        .map_err(|e| ResourceError::InvalidSeed(e.to_string()))?;
    Ok((actor, client))
}
