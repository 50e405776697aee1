use tokio::sync::watch;
use tokio::time::Instant;

/// Carries the caller's deadline and cancellation signal.
///
/// Every cache and store round trip issued by the data access layer is raced
/// against both. An expired deadline yields `DataAccessError::DeadlineExceeded`,
/// a triggered `CancelHandle` yields `DataAccessError::Cancelled`.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub(crate) deadline: Option<Instant>,
    pub(crate) cancel: Option<watch::Receiver<bool>>,
}

/// Trigger side of a cancellable `RequestContext`.
#[derive(Debug)]
pub struct CancelHandle {
    pub(crate) sender: watch::Sender<bool>,
}
