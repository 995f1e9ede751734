use crate::model::Resource;
use async_graphql::{Object, ID};

/// `type Resource { id: ID!, name: String!, type: String!, region: String! }`
#[Object]
impl Resource {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    #[graphql(name = "type")]
    async fn kind(&self) -> &str {
        &self.kind
    }

    async fn region(&self) -> &str {
        &self.region
    }
}
