use crate::model::Resource;
use crate::services::{MutationService, QueryService, Services, SubscriptionService};
use async_graphql::{Context, Object, Result, Schema, Subscription};
use futures::Stream;

/// The executable schema served at the GraphQL endpoint.
pub type ResourceSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Builds the schema with the services available to every resolver.
pub fn build_schema(services: Services) -> ResourceSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(services.query)
        .data(services.mutation)
        .data(services.subscription)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every resource in creation order, optionally narrowed to names containing
    /// `filter` (case-insensitive).
    async fn resources(&self, ctx: &Context<'_>, filter: Option<String>) -> Result<Vec<Resource>> {
        let service = ctx.data::<QueryService>()?;
        Ok(service.resources(filter.as_deref()).await?)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a resource and notifies `resourceAdded` subscribers.
    async fn add_resource(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "type")] kind: String,
        region: String,
    ) -> Result<Resource> {
        let service = ctx.data::<MutationService>()?;
        Ok(service.add_resource(name, kind, region).await?)
    }
}

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Emits each resource created after the subscription starts.
    async fn resource_added(&self, ctx: &Context<'_>) -> Result<impl Stream<Item = Resource>> {
        let service = ctx.data::<SubscriptionService>()?;
        Ok(service.resource_added())
    }
}
