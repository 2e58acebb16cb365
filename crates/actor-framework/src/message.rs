//! # Generic Messages
//!
//! Messages exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `ResourceActor`.
///
/// The variants are the CRUD lifecycle of a resource plus two set-oriented
/// operations:
///
/// - **Create**: builds a resource from [`ActorEntity::Create`] and returns it, id included.
/// - **Get** / **GetMany**: reads. `GetMany` returns only the ids that exist, in the order
///   they were first requested; missing ids are simply absent from the result.
/// - **Update**: applies [`ActorEntity::Update`] and returns the new state.
/// - **Delete**: removes the resource.
/// - **Action**: one custom [`ActorEntity::Action`] against one resource.
/// - **Batch**: several actions, possibly across resources, applied all-or-nothing.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Batch {
        actions: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
}
