//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod store_client;

pub use store_client::*;
