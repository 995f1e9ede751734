//! GraphQL surface over the services.
//!
//! ```graphql
//! type Query { resources(filter: String): [Resource!]! }
//! type Mutation { addResource(name: String!, type: String!, region: String!): Resource! }
//! type Subscription { resourceAdded: Resource! }
//! ```

mod schema;
mod types;

pub use schema::{build_schema, MutationRoot, QueryRoot, ResourceSchema, SubscriptionRoot};
