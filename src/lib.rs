//! # Resource Feed
//!
//! An in-memory catalogue of cloud resources served over GraphQL, with a live feed of
//! every resource created.
//!
//! ```graphql
//! query        { resources(filter: "cloud") { id name type region } }
//! mutation     { addResource(name: "Pub/Sub", type: "Messaging", region: "asia-east1") { id } }
//! subscription { resourceAdded { id name type region } }
//! ```
//!
//! ## Module Tour
//!
//! - [`model`]: the [`Resource`](model::Resource) record, creation params and the name filter.
//! - [`resource_actor`]: the store, a single [`ResourceActor`](actor_framework::ResourceActor)
//!   that assigns ids, appends and publishes, one request at a time.
//! - [`events`]: [`EventChannel`](events::EventChannel), the broadcast fan-out to listeners.
//! - [`clients`]: [`StoreClient`](clients::StoreClient), the typed wrapper over the actor.
//! - [`services`]: query, mutation and subscription operations.
//! - [`graphql`]: schema and resolvers.
//! - [`server`]: axum router, health endpoint and graceful serve loop.
//! - [`lifecycle`]: [`ResourceSystem`](lifecycle::ResourceSystem) wiring and shutdown.
//! - [`config`]: command-line and environment configuration.
//!
//! ## Ordering
//!
//! The actor appends a record and then publishes it before it reads its next request.
//! Ids therefore come out as `1, 2, 3, ...` with no gaps or duplicates under concurrent
//! mutations, events reach every listener in id order, and a listener that sees an event
//! can already find the record through `resources`.

pub mod clients;
pub mod config;
pub mod events;
pub mod graphql;
pub mod lifecycle;
pub mod model;
pub mod resource_actor;
pub mod server;
pub mod services;
