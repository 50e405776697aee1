use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use futures_util::FutureExt;
use log::debug;
use parking_lot::Mutex;
use crate::dao::errors::DataAccessError;
use crate::dao::structs::flight_group::{FlightGroup, FlightGuard, FlightResult, SharedFlight};

impl<T: Clone + Send + Sync + 'static> Default for FlightGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for FlightGroup<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> std::fmt::Debug for FlightGroup<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightGroup")
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Drop for FlightGuard<T> {
    fn drop(&mut self) {
        self.calls.lock().remove(&self.key);
    }
}

impl<T: Clone + Send + Sync + 'static> FlightGroup<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns the pending lookup for `key`, starting `work` if there is none.
    ///
    /// The work keeps running when every caller stops waiting for it, so
    /// the cache is still populated. The flag is true when this caller
    /// joined an existing lookup.
    pub fn join<F, Fut>(&self, key: &str, work: F) -> (SharedFlight<T>, bool)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FlightResult<T>> + Send + 'static,
    {
        let mut calls = self.calls.lock();
        if let Some(existing) = calls.get(key) {
            debug!("[DAO] Joining in-flight lookup {}", key);
            return (existing.clone(), true);
        }
        let registry = self.calls.clone();
        let owned_key = key.to_string();
        let future = work();
        let handle = tokio::spawn(async move {
            let _guard = FlightGuard {
                calls: registry,
                key: owned_key,
            };
            future.await
        });
        let flight = async move {
            match handle.await {
                Ok(result) => result,
                Err(error) => Err(DataAccessError::Flight(error.to_string())),
            }
        }
        .boxed()
        .shared();
        calls.insert(key.to_string(), flight.clone());
        (flight, false)
    }

    pub async fn work<F, Fut>(&self, key: &str, work: F) -> FlightResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FlightResult<T>> + Send + 'static,
    {
        let (flight, _) = self.join(key, work);
        flight.await
    }
}
