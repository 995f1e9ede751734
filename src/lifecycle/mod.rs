//! # System Lifecycle
//!
//! Starts the Resource actor with its event channel injected as context, hands out the
//! services built on top of it and shuts the whole thing down again.
//!
//! ```rust,ignore
//! setup_tracing();
//! let system = ResourceSystem::start(StoreSettings::default(), default_seed())?;
//!
//! let schema = build_schema(system.services());
//! // ... serve ...
//! drop(schema);
//!
//! system.shutdown().await?;
//! ```
//!
//! The actor only stops once every [`StoreClient`](crate::clients::StoreClient) is gone,
//! so anything holding services (the schema, the router) must be dropped before
//! [`ResourceSystem::shutdown`] can complete.

pub mod system;

pub use actor_framework::tracing::setup_tracing;
pub use system::*;
