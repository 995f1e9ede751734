//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod resource;

pub use resource::*;
