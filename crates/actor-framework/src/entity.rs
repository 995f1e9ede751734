//! The [`ActorEntity`] trait: the contract a record type fulfils to live in a
//! [`ResourceActor`](crate::ResourceActor).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Architecture Note
/// The actor loop is written once against this contract. Associated types keep each
/// store honest: a store of `Resource` only accepts `Resource::Create` payloads and
/// `Resource::Filter` queries.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await (e.g. publish to a channel). The
/// `Context` type is injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run),
/// which lets dependencies be bound after the actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic `count + 1` assignment.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Criteria a `List` request narrows the collection with.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned id and the payload.
    /// Called synchronously before `on_create`, and for every seeded record.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity belongs in the result of a filtered `List`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is appended.
    /// Returning an error rejects the create; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once the entity is appended and visible to `List`.
    ///
    /// Runs inside the actor's message handler, so hooks observe entities in the same
    /// order they were appended.
    async fn on_created(&self, _ctx: &Self::Context) {}
}
