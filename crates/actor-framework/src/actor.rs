//! The generic single-writer store actor.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an ordered, append-only collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and the
/// receiver end of the mailbox. Messages are processed *sequentially*, which is what
/// makes `count + 1` id assignment safe under any number of concurrent clients: the
/// read-count-then-append sequence can never interleave with another create.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Seed**: Optionally preload records with [`seed`](Self::seed).
/// 3.  **Run**: Spawn `actor.run(context)` in a background task.
///
/// ## Operations
///
/// * **Create**:
///     1. Derives the id from the current count (`len + 1`).
///     2. Calls `T::from_create_params` to instantiate the entity.
///     3. Calls the `on_create` hook; an error rejects the create.
///     4. Appends the entity.
///     5. Calls the `on_created` hook with the injected context.
///     6. Replies with a clone of the stored entity.
///
/// * **List**: Clones every entity (or every entity matching the filter) in insertion order.
///
/// * **Count**: Replies with the number of stored entities.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC mailbox. If it is full, client calls
    ///   wait until there is space. Must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Preloads records before the actor starts.
    ///
    /// Seeded records get ids the same way created ones do, but no hooks run:
    /// nobody can be listening yet.
    pub fn seed(
        mut self,
        records: impl IntoIterator<Item = T::Create>,
    ) -> Result<Self, FrameworkError> {
        for params in records {
            let id = self.next_id()?;
            let item = T::from_create_params(id, params)
                .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
            self.store.push(item);
        }
        Ok(self)
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn next_id(&self) -> Result<T::Id, FrameworkError> {
        let count = self.store.len();
        u32::try_from(count + 1)
            .map(T::Id::from)
            .map_err(|_| FrameworkError::IdSpaceExhausted(count))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook. It lives as long as the
    /// loop, so anything it owns (e.g. a broadcast sender) is released on shutdown.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Resource" instead of "resource_feed::model::resource::Resource")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.next_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            item.on_created(&context).await;
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = match &filter {
                        Some(filter) => self
                            .store
                            .iter()
                            .filter(|item| item.matches(filter))
                            .cloned()
                            .collect(),
                        None => self.store.clone(),
                    };
                    debug!(entity_type, ?filter, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
