use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Server {
    id: u32,
    hostname: String,
}

#[derive(Debug)]
struct ServerCreate {
    hostname: String,
}

#[derive(Debug, thiserror::Error)]
#[error("server error: {0}")]
struct ServerError(String);

impl From<String> for ServerError {
    fn from(msg: String) -> Self {
        ServerError(msg)
    }
}

#[async_trait]
impl ActorEntity for Server {
    type Id = u32;
    type Create = ServerCreate;
    type Filter = String;
    type Context = Arc<AtomicUsize>;
    type Error = ServerError;

    fn from_create_params(id: u32, params: ServerCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            hostname: params.hostname,
        })
    }

    fn matches(&self, filter: &String) -> bool {
        self.hostname.starts_with(filter.as_str())
    }

    async fn on_created(&self, ctx: &Self::Context) {
        ctx.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone)]
struct ServerClient {
    inner: ResourceClient<Server>,
}

#[async_trait]
impl ActorClient<Server> for ServerClient {
    type Error = ServerError;

    fn inner(&self) -> &ResourceClient<Server> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ServerError(e.to_string())
    }
}

// --- Test ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let created_hook_calls = Arc::new(AtomicUsize::new(0));

    let (actor, client) = ResourceActor::<Server>::new(10);
    let actor = actor
        .seed(vec![ServerCreate {
            hostname: "web-01".into(),
        }])
        .unwrap();
    let handle = tokio::spawn(actor.run(created_hook_calls.clone()));

    // 1. Create continues after the seed
    let db = client
        .create(ServerCreate {
            hostname: "db-01".into(),
        })
        .await
        .unwrap();
    assert_eq!(db.id, 2);

    // 2. Filtered list through the domain wrapper
    let servers = ServerClient {
        inner: client.clone(),
    };
    let web = servers.list(Some("web".to_string())).await.unwrap();
    assert_eq!(web.len(), 1);
    assert_eq!(web[0].hostname, "web-01");
    assert_eq!(servers.count().await.unwrap(), 2);

    // 3. Seeded records do not trigger hooks
    assert_eq!(created_hook_calls.load(Ordering::SeqCst), 1);

    // 4. Shutdown once every client is gone
    drop(servers);
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_actor_reports_error() {
    let (actor, client) = ResourceActor::<Server>::new(4);
    drop(actor);

    let err = client.list(None).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));

    let servers = ServerClient { inner: client };
    let mapped = servers.count().await.unwrap_err();
    assert_eq!(mapped.0, "Actor closed");
}
