//! Lock-guarded network handle.
//!
//! Searches take a read guard for their whole run and mutations take the
//! write guard, so a traffic update can never interleave with a search in
//! progress.  Any number of searches may read the same snapshot at once.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{NetworkError, NetworkResult, RoadNetwork};

/// Cheaply clonable handle to a network shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork(Arc<RwLock<RoadNetwork>>);

impl SharedNetwork {
    pub fn new(network: RoadNetwork) -> Self {
        Self(Arc::new(RwLock::new(network)))
    }

    /// Read guard for searching.  Blocks while a writer holds the lock.
    pub fn read(&self) -> NetworkResult<RwLockReadGuard<'_, RoadNetwork>> {
        self.0.read().map_err(|_| NetworkError::Poisoned)
    }

    /// Write guard for topology or congestion changes.
    pub fn write(&self) -> NetworkResult<RwLockWriteGuard<'_, RoadNetwork>> {
        self.0.write().map_err(|_| NetworkError::Poisoned)
    }

    pub fn update_traffic_conditions(
        &self,
        source: &str,
        destination: &str,
        factor: f64,
    ) -> NetworkResult<bool> {
        self.write()?.update_traffic_conditions(source, destination, factor)
    }

    pub fn generation(&self) -> NetworkResult<u64> {
        Ok(self.read()?.generation())
    }
}
