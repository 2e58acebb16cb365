//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and processes requests
//! sequentially. Because only the actor task touches the store, a request is
//! atomic with respect to every other request on the same actor; the `Batch`
//! request builds on that to apply several actions all-or-nothing.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Shelf { id: u32, items: u32 }
/// #[derive(Debug)] struct ShelfCreate { items: u32 }
/// #[derive(Debug)] struct ShelfUpdate;
/// #[derive(Debug)] enum ShelfAction {}
/// #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
///
/// #[async_trait]
/// impl ActorEntity for Shelf {
///     type Id = u32;
///     type Create = ShelfCreate;
///     type Update = ShelfUpdate;
///     type Action = ShelfAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ShelfError;
///
///     fn from_create_params(id: u32, p: ShelfCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, items: p.items })
///     }
///     async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Shelf>::new(10);
///     tokio::spawn(actor.run(()));
///     let shelf = client.create(ShelfCreate { items: 3 }).await.unwrap();
///     assert_eq!(shelf.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: next id from the `u32` counter, `from_create_params`, `on_create`, insert.
/// * **Get / GetMany**: clones out of the store; `GetMany` skips unknown ids and repeats.
/// * **Update**: `on_update` against a copy, stored only on success; returns the new state.
/// * **Delete**: `on_delete`, then remove.
/// * **Action**: `handle_action` against the stored entity.
/// * **Batch**: every action runs against a staged clone; the staged clones replace the
///   stored entities only when all actions succeed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Product" instead of "order_desk::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;
                    let result = self.create(id.clone(), params, &context).await;
                    log_outcome(entity_type, &id, "Create", &result);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = self.get_many(&ids);
                    debug!(
                        entity_type,
                        requested = ids.len(),
                        found = items.len(),
                        "GetMany"
                    );
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    log_outcome(entity_type, &id, "Update", &result);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    log_outcome(entity_type, &id, "Delete", &result);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    log_outcome(entity_type, &id, "Action", &result);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Batch {
                    actions,
                    respond_to,
                } => {
                    debug!(entity_type, ?actions, "Batch");
                    let size = actions.len();
                    let result = self.apply_batch(actions, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, size, "Batch committed"),
                        Err(e) => warn!(entity_type, size, error = %e, "Batch rolled back"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;
        self.store.insert(id, item.clone());
        Ok(item)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let item = self.store.get_mut(id).ok_or_else(|| not_found(id))?;
        // Stage on a copy so a failing hook leaves the stored entity as it was.
        let mut staged = item.clone();
        staged.on_update(update, context).await.map_err(entity_error)?;
        *item = staged.clone();
        Ok(staged)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self.store.get(id).ok_or_else(|| not_found(id))?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.store.remove(id);
        Ok(())
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let item = self.store.get_mut(id).ok_or_else(|| not_found(id))?;
        item.handle_action(action, context).await.map_err(entity_error)
    }

    fn get_many(&self, ids: &[T::Id]) -> Vec<T> {
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert((*id).clone()))
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    async fn apply_batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let current = self
                        .store
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| not_found(&id))?;
                    entry.insert(current)
                }
            };
            results.push(
                item.handle_action(action, context)
                    .await
                    .map_err(entity_error)?,
            );
        }

        self.store.extend(staged);
        Ok(results)
    }
}

fn not_found<I: std::fmt::Display>(id: &I) -> FrameworkError {
    FrameworkError::NotFound(id.to_string())
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

fn log_outcome<I: std::fmt::Display, R>(
    entity_type: &str,
    id: &I,
    done: &str,
    result: &Result<R, FrameworkError>,
) {
    match result {
        Ok(_) => info!(entity_type, %id, "{done} ok"),
        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
        Err(e) => warn!(entity_type, %id, error = %e, "{done} rejected"),
    }
}
