//! # Actor Framework
//!
//! Building blocks for single-writer, append-only resource stores on top of the
//! **Actor Model**. One [`ResourceActor`] owns an ordered collection of entities and
//! processes every request sequentially from its mailbox, so the collection needs no
//! locks and every append observes a consistent record count.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model, its filter and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and id assignment
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Lifecycle of a Store
//!
//! ```rust,ignore
//! // 1. Create the actor and its client
//! let (actor, client) = ResourceActor::<Resource>::new(32);
//!
//! // 2. Seed it before it starts (no hooks run for seeded records)
//! let actor = actor.seed(initial_records)?;
//!
//! // 3. Run it with its context injected (e.g. an event channel)
//! tokio::spawn(actor.run(events.clone()));
//!
//! // 4. Talk to it
//! let created = client.create(params).await?;
//! let all = client.list(None).await?;
//! ```
//!
//! ## Identifier Assignment
//!
//! Ids are `count + 1` at the moment of insertion. Because the actor is the only writer
//! and handles one message at a time, two creates can never observe the same count.
//! Records are never removed, so counts never shrink and ids never repeat.
//!
//! ## Testing
//!
//! See [`mock`] for utilities to test client wrappers without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
