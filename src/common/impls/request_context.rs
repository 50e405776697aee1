use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use crate::common::structs::request_context::{CancelHandle, RequestContext};
use crate::dao::errors::DataAccessError;

impl RequestContext {
    /// A context without deadline that can never be cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().with_deadline(Instant::now() + timeout)
    }

    /// Keeps the earliest of the current and the given deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// Attaches a fresh cancellation signal, replacing any previous one.
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancel = Some(receiver);
        (self, CancelHandle { sender })
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|receiver| *receiver.borrow())
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= Instant::now())
    }

    /// Drives `future` until it resolves, the deadline passes or the context
    /// is cancelled, whichever happens first.
    pub async fn run<F, T, E>(&self, future: F) -> Result<T, DataAccessError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<DataAccessError>,
    {
        if self.is_cancelled() {
            return Err(DataAccessError::Cancelled);
        }
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, future).await {
                    Ok(result) => result.map_err(Into::into),
                    Err(_) => Err(DataAccessError::DeadlineExceeded),
                },
                None => future.await.map_err(Into::into),
            }
        };
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(DataAccessError::Cancelled),
            result = bounded => result,
        }
    }

    async fn cancelled(&self) {
        match &self.cancel {
            Some(receiver) => {
                let mut receiver = receiver.clone();
                let closed = receiver.wait_for(|cancelled| *cancelled).await.is_err();
                if closed {
                    std::future::pending::<()>().await;
                }
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}
