// État global partagé de l'application

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use crate::error::RoutingError;
use crate::simulator::Simulator;
use crate::types::{RouterId, RoutingTable, ShortestPaths};

/// Un seul verrou exclusif couvre les mutations de topologie et les recalculs :
/// Dijkstra ne voit jamais une topologie modifiée en cours de route.
pub struct AppState {
    simulator: Mutex<Simulator>,
}

impl AppState {
    pub fn new(simulator: Simulator) -> Arc<Self> {
        Arc::new(Self {
            simulator: Mutex::new(simulator),
        })
    }

    /// Accès direct pour enchaîner plusieurs opérations sous le même verrou
    pub async fn lock(&self) -> MutexGuard<'_, Simulator> {
        self.simulator.lock().await
    }

    pub async fn add_router(&self, router_id: RouterId) -> Result<(), RoutingError> {
        self.simulator.lock().await.add_router(router_id)
    }

    pub async fn add_link(&self, a: RouterId, b: RouterId, cost: i64) -> Result<(), RoutingError> {
        self.simulator.lock().await.add_link(a, b, cost)
    }

    pub async fn recompute_all(&self) -> Result<BTreeMap<RouterId, ShortestPaths>, RoutingError> {
        self.simulator.lock().await.recompute_all()
    }

    pub async fn routing_table(&self, router_id: RouterId) -> RoutingTable {
        self.simulator.lock().await.routing_table(router_id)
    }

    pub async fn get_path(&self, source: RouterId, destination: RouterId) -> Result<Vec<RouterId>, RoutingError> {
        self.simulator.lock().await.get_path(source, destination)
    }

    pub async fn clear(&self) {
        self.simulator.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_mutations_and_recompute() {
        let state = AppState::new(Simulator::new());
        for id in 0..8 {
            state.add_router(id).await.unwrap();
        }

        let mut handles = Vec::new();
        for id in 1..8 {
            let state = Arc::clone(&state);
            handles.push(tokio::spawn(async move {
                state.add_link(id - 1, id, 1).await.unwrap();
                let _ = state.recompute_all().await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        state.recompute_all().await.unwrap();
        assert_eq!(state.routing_table(0).await.get(&7), Some(&7));
        assert_eq!(state.get_path(0, 3).await, Ok(vec![0, 1, 2, 3]));
    }

    #[tokio::test]
    async fn test_clear_through_shared_state() {
        let state = AppState::new(Simulator::new());
        state.add_router(1).await.unwrap();
        state.add_router(2).await.unwrap();
        state.add_link(1, 2, 3).await.unwrap();
        state.recompute_all().await.unwrap();
        state.clear().await;
        assert!(state.routing_table(1).await.is_empty());
        assert_eq!(state.recompute_all().await.unwrap_err(), RoutingError::NoRoutersConfigured);
    }
}
