//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose mailbox is served by an
//! in-memory script of expectations instead of a `ResourceActor`. Code that depends on a
//! client (an operation, another actor's hooks) can then be tested without spawning the
//! actors it depends on.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Pure mock**: the code under test only sees mocked clients.
//! 2. **Single actor**: spawn one `ResourceActor` and drive it through its client.
//! 3. **Full system**: spawn everything (see `OrderSystem` in the application crate).
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::{MockClient, Received};
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Shelf { id: u32, items: u32 }
//! #[derive(Debug)] struct ShelfCreate;
//! #[derive(Debug)] struct ShelfUpdate;
//! #[derive(Debug)] enum ShelfAction {}
//! #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32; type Create = ShelfCreate; type Update = ShelfUpdate;
//!     type Action = ShelfAction; type ActionResult = (); type Context = (); type Error = ShelfError;
//!     fn from_create_params(id: u32, _: ShelfCreate) -> Result<Self, Self::Error> { Ok(Self { id, items: 0 }) }
//!     async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Shelf>::new();
//!     mock.expect_get_many(vec![1, 2]).return_ok(vec![Shelf { id: 1, items: 4 }]);
//!     mock.expect_get(3).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get_many(vec![1, 2]).await.unwrap().len(), 1);
//!     assert!(matches!(client.get(3).await, Err(FrameworkError::ActorClosed)));
//!
//!     assert!(matches!(mock.take_received()[0], Received::GetMany(ref ids) if ids == &vec![1, 2]));
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation is not answered (the caller sees
//! `ActorDropped`) and is reported by [`MockClient::verify`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    GetMany {
        ids: Vec<T::Id>,
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Batch {
        response: Result<Vec<T::ActionResult>, FrameworkError>,
    },
}

/// A request observed by the mock, payload included.
pub enum Received<T: ActorEntity> {
    Create(T::Create),
    Get(T::Id),
    GetMany(Vec<T::Id>),
    Update(T::Id, T::Update),
    Delete(T::Id),
    Action(T::Id, T::Action),
    Batch(Vec<(T::Id, T::Action)>),
}

impl<T: ActorEntity> std::fmt::Debug for Received<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Received::Create(params) => f.debug_tuple("Create").field(params).finish(),
            Received::Get(id) => f.debug_tuple("Get").field(id).finish(),
            Received::GetMany(ids) => f.debug_tuple("GetMany").field(ids).finish(),
            Received::Update(id, update) => f.debug_tuple("Update").field(id).field(update).finish(),
            Received::Delete(id) => f.debug_tuple("Delete").field(id).finish(),
            Received::Action(id, action) => f.debug_tuple("Action").field(id).field(action).finish(),
            Received::Batch(actions) => f.debug_tuple("Batch").field(actions).finish(),
        }
    }
}

type Shared<V> = Arc<Mutex<V>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
    received: Shared<Vec<Received<T>>>,
    unexpected: Shared<Vec<String>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Shared<VecDeque<Expectation<T>>> = Arc::default();
        let received: Shared<Vec<Received<T>>> = Arc::default();
        let unexpected: Shared<Vec<String>> = Arc::default();

        let (exps, log, misses) = (expectations.clone(), received.clone(), unexpected.clone());
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = exps.lock().unwrap().pop_front();
                let miss = serve(request, expectation, &log);
                if let Some(miss) = miss {
                    misses.lock().unwrap().push(miss);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            received,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get_many` operation with exactly these ids.
    pub fn expect_get_many(&mut self, ids: Vec<T::Id>) -> GetManyExpectationBuilder<T> {
        GetManyExpectationBuilder {
            ids,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `batch` operation.
    pub fn expect_batch(&mut self) -> BatchExpectationBuilder<T> {
        BatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the requests observed so far, oldest first.
    pub fn take_received(&self) -> Vec<Received<T>> {
        std::mem::take(&mut *self.received.lock().unwrap())
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let misses = self.unexpected.lock().unwrap();
        if !misses.is_empty() {
            panic!("Unexpected requests: {:?}", *misses);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Answers one request from its expectation. Returns a description of the mismatch, if any.
fn serve<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    log: &Mutex<Vec<Received<T>>>,
) -> Option<String> {
    let mut log = log.lock().unwrap();
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            let miss = (id != want).then(|| format!("get({id}), expected get({want})"));
            log.push(Received::Get(id));
            if miss.is_none() {
                let _ = respond_to.send(response);
            }
            miss
        }
        (
            ResourceRequest::GetMany { ids, respond_to },
            Some(Expectation::GetMany { ids: want, response }),
        ) => {
            let miss = (ids != want).then(|| format!("get_many({ids:?}), expected get_many({want:?})"));
            log.push(Received::GetMany(ids));
            if miss.is_none() {
                let _ = respond_to.send(response);
            }
            miss
        }
        (ResourceRequest::Create { params, respond_to }, Some(Expectation::Create { response })) => {
            log.push(Received::Create(params));
            let _ = respond_to.send(response);
            None
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => {
            let miss = (id != want).then(|| format!("delete({id}), expected delete({want})"));
            log.push(Received::Delete(id));
            if miss.is_none() {
                let _ = respond_to.send(response);
            }
            miss
        }
        (
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            },
            Some(Expectation::Action { id: want, response }),
        ) => {
            let miss = (id != want).then(|| format!("action({id}), expected action({want})"));
            log.push(Received::Action(id, action));
            if miss.is_none() {
                let _ = respond_to.send(response);
            }
            miss
        }
        (ResourceRequest::Batch { actions, respond_to }, Some(Expectation::Batch { response })) => {
            log.push(Received::Batch(actions));
            let _ = respond_to.send(response);
            None
        }
        (request, _) => {
            let received = match request {
                ResourceRequest::Create { params, .. } => Received::Create(params),
                ResourceRequest::Get { id, .. } => Received::Get(id),
                ResourceRequest::GetMany { ids, .. } => Received::GetMany(ids),
                ResourceRequest::Update { id, update, .. } => Received::Update(id, update),
                ResourceRequest::Delete { id, .. } => Received::Delete(id),
                ResourceRequest::Action { id, action, .. } => Received::Action(id, action),
                ResourceRequest::Batch { actions, .. } => Received::Batch(actions),
            };
            let miss = format!("{received:?} did not match the next expectation");
            log.push(received);
            Some(miss)
        }
    }
}

macro_rules! expectation_builder {
    ($(#[$doc:meta])* $name:ident { $($field:ident: $ty:ty),* } => $variant:ident, $ok:ty) => {
        $(#[$doc])*
        pub struct $name<T: ActorEntity> {
            $($field: $ty,)*
            expectations: Shared<VecDeque<Expectation<T>>>,
        }

        impl<T: ActorEntity> $name<T> {
            /// Sets the expectation to return a successful result.
            pub fn return_ok(self, value: $ok) {
                self.push(Ok(value));
            }

            /// Sets the expectation to return an error.
            pub fn return_err(self, error: FrameworkError) {
                self.push(Err(error));
            }

            fn push(self, response: Result<$ok, FrameworkError>) {
                let Self { $($field,)* expectations } = self;
                expectations
                    .lock()
                    .unwrap()
                    .push_back(Expectation::$variant { $($field,)* response });
            }
        }
    };
}

expectation_builder!(
    /// Builder for `get` expectations.
    GetExpectationBuilder { id: T::Id } => Get, Option<T>
);
expectation_builder!(
    /// Builder for `get_many` expectations.
    GetManyExpectationBuilder { ids: Vec<T::Id> } => GetMany, Vec<T>
);
expectation_builder!(
    /// Builder for `create` expectations.
    CreateExpectationBuilder {} => Create, T
);
expectation_builder!(
    /// Builder for `delete` expectations.
    DeleteExpectationBuilder { id: T::Id } => Delete, ()
);
expectation_builder!(
    /// Builder for `action` expectations.
    ActionExpectationBuilder { id: T::Id } => Action, T::ActionResult
);
expectation_builder!(
    /// Builder for `batch` expectations.
    BatchExpectationBuilder {} => Batch, Vec<T::ActionResult>
);

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its mailbox.
///
/// The test plays the actor: it pulls requests with [`expect_get_many`] / [`expect_batch`]
/// and answers through the returned one-shot sender, which allows delays and interleavings
/// that the scripted [`MockClient`] cannot express.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<T::Id>,
    tokio::sync::oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Batch request
pub async fn expect_batch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<(T::Id, T::Action)>,
    tokio::sync::oneshot::Sender<Result<Vec<T::ActionResult>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Batch {
            actions,
            respond_to,
        }) => Some((actions, respond_to)),
        _ => None,
    }
}
