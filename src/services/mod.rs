//! The operations the API exposes: read ([`QueryService`]), create
//! ([`MutationService`]) and follow ([`SubscriptionService`]).
//!
//! Services are cheap to clone; every clone talks to the same store and channel.

pub mod mutation;
pub mod query;
pub mod subscription;

pub use mutation::*;
pub use query::*;
pub use subscription::*;

/// The full set of services, as handed to the GraphQL schema.
#[derive(Clone)]
pub struct Services {
    pub query: QueryService,
    pub mutation: MutationService,
    pub subscription: SubscriptionService,
}
