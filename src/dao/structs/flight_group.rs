use std::collections::HashMap;
use std::sync::Arc;
use futures_util::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use crate::dao::errors::DataAccessError;

pub type FlightResult<T> = Result<T, DataAccessError>;

pub type SharedFlight<T> = Shared<BoxFuture<'static, FlightResult<T>>>;

/// In-flight lookups keyed by string.
///
/// The first caller for a key starts the work on its own task; later callers
/// for the same key attach to it until it completes, then the key is
/// forgotten. Clones share the same map.
pub struct FlightGroup<T: Clone + Send + Sync + 'static> {
    pub(crate) calls: Arc<Mutex<HashMap<String, SharedFlight<T>>>>,
}

/// Removes a key from the group when its task ends, panics included.
pub(crate) struct FlightGuard<T: Clone + Send + Sync + 'static> {
    pub(crate) calls: Arc<Mutex<HashMap<String, SharedFlight<T>>>>,
    pub(crate) key: String,
}
