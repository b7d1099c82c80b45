//! Application services for the board engine.

mod store;
mod sync;
mod workflow;

pub use store::BoardStore;
pub use sync::{BoardServiceError, BoardServiceResult, BoardSyncService, ReorderCardRequest};
pub use workflow::{DeleteState, FormState, LifecycleController, SubmitOutcome};
